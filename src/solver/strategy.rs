//! Guess selection strategies
//!
//! A strategy reduces a clue partition to a score and says whether lower or
//! higher scores are better. All three game modes share the same selection
//! loop and differ only in that reduction, the direction, and which pool sizes
//! let them answer without scoring anything.

use super::partition::Partition;
use crate::core::Word;
use std::fmt;

/// Which end of the score range a strategy is after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

impl Direction {
    /// Whether `candidate` strictly beats `incumbent`
    ///
    /// Strictness keeps the first-encountered guess on ties.
    #[inline]
    #[must_use]
    pub fn prefers(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Self::Minimize => candidate < incumbent,
            Self::Maximize => candidate > incumbent,
        }
    }
}

/// A strategy for selecting the best guess from a pool of candidates
pub trait Strategy {
    /// Reduce a partition of the remaining answers to a comparable score
    fn score(&self, partition: &Partition) -> f64;

    /// Whether low or high scores win
    fn direction(&self) -> Direction;

    /// An answer to play without scoring, when searching cannot do better
    fn shortcut(&self, _answers: &[Word]) -> Option<Word> {
        None
    }

    /// Select the best guess from the guess pool given the current answers
    ///
    /// Returns `None` if the guess pool is empty.
    fn select_guess(&self, guess_pool: &[Word], answers: &[Word]) -> Option<Word> {
        if let Some(answer) = self.shortcut(answers) {
            log::trace!("shortcut to {answer} with {} answers left", answers.len());
            return Some(answer);
        }
        select_best_guess(self, guess_pool, answers).map(|(guess, _)| guess)
    }
}

/// Score every guess against `answers` and keep the best one
///
/// Ties go to the guess that comes first in `guess_pool`. Returns the winning
/// guess with its score, or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_variants::core::Word;
/// use wordle_variants::solver::{MinimaxStrategy, select_best_guess};
///
/// let guesses = [Word::new("zzzzz").unwrap(), Word::new("aaaaa").unwrap()];
/// let answers = [Word::new("aaaaa").unwrap(), Word::new("bbbbb").unwrap()];
///
/// let (best, worst_case) = select_best_guess(&MinimaxStrategy, &guesses, &answers).unwrap();
/// assert_eq!(best.text(), "aaaaa");
/// assert!((worst_case - 1.0).abs() < f64::EPSILON);
/// ```
pub fn select_best_guess<S: Strategy + ?Sized>(
    strategy: &S,
    guess_pool: &[Word],
    answers: &[Word],
) -> Option<(Word, f64)> {
    let direction = strategy.direction();
    let mut best: Option<(Word, f64)> = None;

    for guess in guess_pool {
        let score = strategy.score(&Partition::of(guess, answers));
        let improves = best.is_none_or(|(_, incumbent)| direction.prefers(score, incumbent));
        if improves {
            best = Some((*guess, score));
        }
    }

    if let Some((guess, score)) = best {
        log::debug!(
            "selected {guess} (score {score:.3}) from {} guesses against {} answers",
            guess_pool.len(),
            answers.len()
        );
    }
    best
}

/// Minimise the expected number of remaining answers
///
/// With one or two answers left, plays the first one: a coin flip cannot be
/// improved by searching.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedSizeStrategy;

impl Strategy for ExpectedSizeStrategy {
    fn score(&self, partition: &Partition) -> f64 {
        partition.expected_remaining()
    }

    fn direction(&self) -> Direction {
        Direction::Minimize
    }

    fn shortcut(&self, answers: &[Word]) -> Option<Word> {
        if answers.len() <= 2 {
            answers.first().copied()
        } else {
            None
        }
    }
}

/// Minimise the largest bucket an adversary can pick
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn score(&self, partition: &Partition) -> f64 {
        partition.largest_bucket() as f64
    }

    fn direction(&self) -> Direction {
        Direction::Minimize
    }

    fn shortcut(&self, answers: &[Word]) -> Option<Word> {
        match answers {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// Maximise the expected number of remaining answers
///
/// Keeps the pool alive for as long as possible; never short-circuits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurvivalStrategy;

impl Strategy for SurvivalStrategy {
    fn score(&self, partition: &Partition) -> f64 {
        partition.expected_remaining()
    }

    fn direction(&self) -> Direction {
        Direction::Maximize
    }
}

/// Game variant being solved, each backed by one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Classic game: find the answer in as few guesses as possible
    #[default]
    Wordle,
    /// The answer is chosen adversarially after every guess
    Absurdle,
    /// Keep as many answers alive as possible
    Survivle,
}

impl Mode {
    pub const ALL: [Self; 3] = [Self::Wordle, Self::Absurdle, Self::Survivle];

    /// Parse a mode from its name or menu number
    ///
    /// Supported names: "wordle"/"1", "absurdle"/"2", "survivle"/"3".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "wordle" | "1" => Some(Self::Wordle),
            "absurdle" | "2" => Some(Self::Absurdle),
            "survivle" | "3" => Some(Self::Survivle),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wordle => "wordle",
            Self::Absurdle => "absurdle",
            Self::Survivle => "survivle",
        }
    }

    /// Precomputed first guess for the standard word lists
    #[must_use]
    pub const fn opening(self) -> &'static str {
        match self {
            Self::Wordle => "roate",
            Self::Absurdle => "raise",
            Self::Survivle => "immix",
        }
    }

    /// Survivle only makes sense when guesses must respect earlier clues
    #[must_use]
    pub const fn forces_hard_mode(self) -> bool {
        matches!(self, Self::Survivle)
    }

    /// Whether a game with these pool sizes is over
    #[must_use]
    pub const fn is_finished(self, answers: usize, guesses: usize) -> bool {
        match self {
            Self::Wordle | Self::Absurdle => answers <= 1,
            Self::Survivle => answers <= 1 && guesses <= 1,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!("Unknown mode '{s}' (expected wordle, absurdle or survivle)")
        })
    }
}

impl Strategy for Mode {
    fn score(&self, partition: &Partition) -> f64 {
        match self {
            Self::Wordle => ExpectedSizeStrategy.score(partition),
            Self::Absurdle => MinimaxStrategy.score(partition),
            Self::Survivle => SurvivalStrategy.score(partition),
        }
    }

    fn direction(&self) -> Direction {
        match self {
            Self::Wordle => ExpectedSizeStrategy.direction(),
            Self::Absurdle => MinimaxStrategy.direction(),
            Self::Survivle => SurvivalStrategy.direction(),
        }
    }

    fn shortcut(&self, answers: &[Word]) -> Option<Word> {
        match self {
            Self::Wordle => ExpectedSizeStrategy.shortcut(answers),
            Self::Absurdle => MinimaxStrategy.shortcut(answers),
            Self::Survivle => SurvivalStrategy.shortcut(answers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn wordle_returns_single_answer_without_scoring() {
        // The guess pool is empty, so any answer must come from the shortcut
        let answers = words(&["pearl"]);
        assert_eq!(
            ExpectedSizeStrategy.select_guess(&[], &answers),
            Some(answers[0])
        );
    }

    #[test]
    fn wordle_plays_first_of_two_answers() {
        let answers = words(&["pearl", "algae"]);
        let guesses = words(&["zzzzz", "algae"]);
        assert_eq!(
            ExpectedSizeStrategy.select_guess(&guesses, &answers),
            Some(answers[0])
        );
    }

    #[test]
    fn wordle_minimises_expected_remaining() {
        let guesses = words(&["zzzzz", "aaaaa", "abcde"]);
        let answers = words(&["aaaaa", "bbbbb", "ccccc", "ddddd"]);

        // zzzzz: one bucket of 4 -> 4.0; aaaaa: 1 + 3 -> 2.5; abcde separates all -> 1.0
        let (best, score) = select_best_guess(&ExpectedSizeStrategy, &guesses, &answers).unwrap();
        assert_eq!(best.text(), "abcde");
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn absurdle_has_no_two_answer_shortcut() {
        let answers = words(&["aaaaa", "bbbbb"]);
        let guesses = words(&["zzzzz", "bbbbb"]);
        assert!(MinimaxStrategy.shortcut(&answers).is_none());
        // zzzzz keeps both alive, bbbbb splits them
        assert_eq!(
            MinimaxStrategy.select_guess(&guesses, &answers),
            Some(guesses[1])
        );
        assert_eq!(
            MinimaxStrategy.select_guess(&guesses, &answers[..1]),
            Some(answers[0])
        );
    }

    #[test]
    fn minimax_minimises_largest_bucket() {
        let guesses = words(&["zzzzz", "aaaaa", "abzzz"]);
        let answers = words(&["aaaaa", "bbbbb", "ccccc", "ddddd"]);

        let (best, worst) = select_best_guess(&MinimaxStrategy, &guesses, &answers).unwrap();
        // abzzz: aaaaa, bbbbb each alone, ccccc + ddddd together
        assert_eq!(best.text(), "abzzz");
        assert!((worst - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn survival_maximises_expected_remaining() {
        let guesses = words(&["abcde", "aaaaa", "zzzzz"]);
        let answers = words(&["aaaaa", "bbbbb", "ccccc", "ddddd"]);

        let (best, score) = select_best_guess(&SurvivalStrategy, &guesses, &answers).unwrap();
        assert_eq!(best.text(), "zzzzz");
        assert!((score - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn survival_never_short_circuits() {
        let answers = words(&["aaaaa"]);
        let guesses = words(&["zzzzz", "aaaaa"]);
        assert!(SurvivalStrategy.shortcut(&answers).is_none());
        // Both guesses leave the single answer alive; the first wins the tie
        assert_eq!(
            SurvivalStrategy.select_guess(&guesses, &answers),
            Some(guesses[0])
        );
    }

    #[test]
    fn ties_go_to_first_encountered() {
        let guesses = words(&["yyyyy", "zzzzz"]);
        let answers = words(&["aaaaa", "bbbbb", "ccccc"]);
        for mode in Mode::ALL {
            let (best, _) = select_best_guess(&mode, &guesses, &answers).unwrap();
            assert_eq!(best.text(), "yyyyy", "{mode}");
        }
    }

    #[test]
    fn empty_guess_pool_returns_none() {
        let answers = words(&["aaaaa", "bbbbb", "ccccc"]);
        for mode in Mode::ALL {
            assert!(mode.select_guess(&[], &answers).is_none());
        }
    }

    #[test]
    fn mode_dispatches_to_strategies() {
        assert_eq!(Mode::Wordle.direction(), Direction::Minimize);
        assert_eq!(Mode::Absurdle.direction(), Direction::Minimize);
        assert_eq!(Mode::Survivle.direction(), Direction::Maximize);

        let two = words(&["aaaaa", "bbbbb"]);
        assert!(Mode::Wordle.shortcut(&two).is_some());
        assert!(Mode::Absurdle.shortcut(&two).is_none());
        assert!(Mode::Survivle.shortcut(&two).is_none());
    }

    #[test]
    fn mode_names() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_name(mode.name()), Some(mode));
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
        assert_eq!(Mode::from_name("2"), Some(Mode::Absurdle));
        assert_eq!(Mode::from_name(" Survivle "), Some(Mode::Survivle));
        assert!(Mode::from_name("quordle").is_none());
        assert!("quordle".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_termination() {
        assert!(Mode::Wordle.is_finished(1, 100));
        assert!(!Mode::Absurdle.is_finished(2, 100));
        assert!(!Mode::Survivle.is_finished(1, 2));
        assert!(Mode::Survivle.is_finished(1, 1));
        assert!(Mode::Survivle.forces_hard_mode());
        assert!(!Mode::Wordle.forces_hard_mode());
    }
}
