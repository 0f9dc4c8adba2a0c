//! Word solving command
//!
//! Plays a session against a known target, feeding it the clues the game
//! would give, and returns the solution path.

use crate::core::{Clue, Word};
use crate::solver::{GuessMetrics, Mode, Session};
use anyhow::{Result, bail};

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: Word,
    pub max_guesses: usize,
    /// Played on the first turn instead of the session's suggestion
    pub first_word: Option<Word>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self {
            target,
            max_guesses: 6,
            first_word: None,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub mode: Mode,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub guess: Word,
    pub clue: Clue,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Present when more than one answer was left to choose from
    pub metrics: Option<GuessMetrics>,
}

/// Solve `config.target` starting from `session`
///
/// # Errors
///
/// Returns an error if:
/// - The target is not in the session's answer list
/// - The forced first word is not a playable guess
/// - The session runs out of guesses to suggest
pub fn solve_word(config: &SolveConfig, session: Session) -> Result<SolveResult> {
    let target = config.target;
    if !session.answers().contains(&target) {
        bail!("'{target}' is not in the answer list");
    }
    if let Some(first) = config.first_word
        && !session.accepts(&first)
    {
        bail!("'{first}' is not in the guess list");
    }

    let mode = session.config().mode;
    let mut session = session;
    let mut steps = Vec::new();

    for turn in 0..config.max_guesses {
        let forced = if turn == 0 { config.first_word } else { None };
        let Some(guess) = forced.or_else(|| session.suggest()) else {
            bail!("No guess available after {turn} turns");
        };

        let candidates_before = session.answers().len();
        let metrics =
            (candidates_before > 1).then(|| GuessMetrics::calculate(&guess, session.answers()));

        let clue = Clue::compute(&guess, &target);
        session = session.apply(guess, clue);

        steps.push(GuessStep {
            guess,
            clue,
            candidates_before,
            candidates_after: session.answers().len(),
            metrics,
        });

        if clue.is_perfect() {
            log::debug!("solved {target} in {} guesses", steps.len());
            return Ok(SolveResult {
                target,
                mode,
                success: true,
                steps,
            });
        }
    }

    Ok(SolveResult {
        target,
        mode,
        success: false,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SessionConfig;
    use crate::wordlists::loader::words_from_slice;

    const ANSWERS: &[&str] = &[
        "pearl", "algae", "abbey", "raise", "arise", "sassy", "those", "thyme", "robot", "floor",
    ];

    fn session(mode: Mode) -> Session {
        Session::new(
            SessionConfig::new(mode, false),
            words_from_slice(ANSWERS),
            &words_from_slice(&["roate", "zzzzz"]),
        )
        .unwrap()
    }

    fn target(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn solves_every_answer() {
        for mode in [Mode::Wordle, Mode::Absurdle] {
            for &answer in ANSWERS {
                let mut config = SolveConfig::new(target(answer));
                config.max_guesses = 11;

                let result = solve_word(&config, session(mode)).unwrap();
                assert!(result.success, "{mode} {answer}");
                assert_eq!(result.steps.last().unwrap().guess, config.target);
            }
        }
    }

    #[test]
    fn opening_comes_first() {
        let result = solve_word(&SolveConfig::new(target("pearl")), session(Mode::Wordle)).unwrap();
        assert_eq!(result.steps[0].guess.text(), "roate");
    }

    #[test]
    fn records_candidate_counts() {
        let result = solve_word(&SolveConfig::new(target("sassy")), session(Mode::Wordle)).unwrap();

        assert_eq!(result.steps[0].candidates_before, ANSWERS.len());
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
            assert_eq!(step.metrics.is_some(), step.candidates_before > 1);
        }
    }

    #[test]
    fn unknown_target_is_an_error() {
        let result = solve_word(&SolveConfig::new(target("crane")), session(Mode::Wordle));
        assert!(result.is_err());
    }

    #[test]
    fn forced_first_word_is_played() {
        let mut config = SolveConfig::new(target("floor"));
        config.first_word = Some(target("zzzzz"));
        config.max_guesses = 11;

        let result = solve_word(&config, session(Mode::Wordle)).unwrap();
        assert_eq!(result.steps[0].guess.text(), "zzzzz");
        assert!(result.success);

        config.first_word = Some(target("crane"));
        assert!(solve_word(&config, session(Mode::Wordle)).is_err());
    }

    #[test]
    fn respects_max_guesses() {
        let mut config = SolveConfig::new(target("sassy"));
        config.max_guesses = 1;

        let result = solve_word(&config, session(Mode::Wordle)).unwrap();
        assert!(!result.success);
        assert_eq!(result.steps.len(), 1);
    }
}
