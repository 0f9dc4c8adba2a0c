//! Formatting utilities for terminal output

use crate::core::Clue;

/// Format a clue as an emoji string
#[must_use]
pub fn clue_to_emoji(clue: &Clue) -> String {
    clue.to_emoji()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // Cast is safe: ratio is clamped to [0, 1]
    let filled = ((ratio * width as f64) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the most a clue can carry
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    // log2(243)
    let max_entropy = 7.92;
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clue_to_emoji_all_gray() {
        let clue: Clue = "-----".parse().unwrap();
        assert_eq!(clue_to_emoji(&clue), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn clue_to_emoji_all_green() {
        assert_eq!(clue_to_emoji(&Clue::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn clue_to_emoji_keeps_position_order() {
        let clue: Clue = "GY---".parse().unwrap();
        assert_eq!(clue_to_emoji(&clue), "🟩🟨⬜⬜⬜");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_overflow_is_clamped() {
        let bar = create_progress_bar(250.0, 100.0, 4);
        assert_eq!(bar, "████");
    }
}
