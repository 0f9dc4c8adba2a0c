//! Word analysis command
//!
//! Scores one guess against the session's answers.

use crate::core::Word;
use crate::solver::{GuessMetrics, Mode, Partition, Session, Strategy};
use anyhow::{Result, bail};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub mode: Mode,
    pub metrics: GuessMetrics,
    /// What the mode's strategy would rank this guess by
    pub score: f64,
    pub total_candidates: usize,
}

/// Analyze `word` as a guess against the remaining answers of `session`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the guess list
pub fn analyze_word(word: &str, session: &Session) -> Result<AnalysisResult> {
    let word = Word::new(word)?;
    if !session.accepts(&word) {
        bail!("Word '{word}' not in word list");
    }

    let mode = session.config().mode;
    let partition = Partition::of(&word, session.answers());

    Ok(AnalysisResult {
        word,
        mode,
        metrics: GuessMetrics::from(&partition),
        score: mode.score(&partition),
        total_candidates: partition.total(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SessionConfig;
    use crate::wordlists::loader::words_from_slice;

    fn session(mode: Mode) -> Session {
        Session::new(
            SessionConfig::new(mode, false),
            words_from_slice(&["aaaaa", "bbbbb", "ccccc", "ddddd"]),
            &words_from_slice(&["abzzz"]),
        )
        .unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let result = analyze_word("abzzz", &session(Mode::Wordle)).unwrap();

        assert_eq!(result.word.text(), "abzzz");
        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.metrics.buckets, 3);
        assert_eq!(result.metrics.max_partition, 2);
        // (1 + 1 + 4) / 4
        assert!((result.score - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn score_follows_mode() {
        let result = analyze_word("abzzz", &session(Mode::Absurdle)).unwrap();
        assert!((result.score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn analyze_invalid_word() {
        assert!(analyze_word("zzzzz", &session(Mode::Wordle)).is_err());
        assert!(analyze_word("toolong", &session(Mode::Wordle)).is_err());
    }

    #[test]
    fn entropy_properties() {
        let result = analyze_word("aaaaa", &session(Mode::Wordle)).unwrap();

        assert!(result.metrics.entropy >= 0.0);
        assert!(result.metrics.entropy <= 2.0 + 1e-9);
        assert!(result.metrics.expected_remaining <= 4.0);
    }
}
