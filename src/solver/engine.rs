//! Session engine
//!
//! A [`Session`] is the whole state of one game: the answer and guess pools,
//! their knowledge, and the turns played. Each observation consumes the
//! session and returns the next one, so callers that keep an earlier value
//! (for undo) can always go back to it.

use super::pruner::CandidatePool;
use super::strategy::{Mode, Strategy};
use crate::core::{Clue, Word};
use crate::wordlists::merge_guesses;
use std::fmt;

/// Options fixed for the duration of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub mode: Mode,
    /// Guesses must stay consistent with every clue seen so far
    pub hard_mode: bool,
}

impl SessionConfig {
    /// Survivle is always played in hard mode
    #[must_use]
    pub const fn new(mode: Mode, hard_mode: bool) -> Self {
        Self {
            mode,
            hard_mode: hard_mode || mode.forces_hard_mode(),
        }
    }
}

/// Error type for sessions that cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyAnswers,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAnswers => write!(f, "The answer list is empty"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One observed guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub clue: Clue,
    pub answers_before: usize,
    pub answers_after: usize,
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Solved(Word),
    /// No answer fits the clues entered so far
    Contradiction,
}

/// State of one game
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    answers: CandidatePool,
    guesses: CandidatePool,
    history: Vec<Turn>,
}

impl Session {
    /// Start a game
    ///
    /// The guess pool is the sorted union of `answers` and `guess_only`, so
    /// every answer can also be played.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if `answers` is empty.
    pub fn new(
        config: SessionConfig,
        answers: Vec<Word>,
        guess_only: &[Word],
    ) -> Result<Self, SessionError> {
        if answers.is_empty() {
            return Err(SessionError::EmptyAnswers);
        }
        let guesses = merge_guesses(&answers, guess_only);

        log::info!(
            "starting {} session ({} answers, {} guesses, hard mode {})",
            config.mode,
            answers.len(),
            guesses.len(),
            if config.hard_mode { "on" } else { "off" }
        );

        Ok(Self {
            config,
            answers: CandidatePool::new(answers),
            guesses: CandidatePool::new(guesses),
            history: Vec::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    /// Answers still consistent with every clue
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        self.answers.words()
    }

    /// Words that may be played next
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        self.guesses.words()
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Number of guesses played so far
    #[must_use]
    pub fn turns_played(&self) -> usize {
        self.history.len()
    }

    /// Whether `word` may be played now
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        self.guesses.words().binary_search(word).is_ok()
    }

    /// Best next guess for the current mode
    ///
    /// The first turn plays the mode's precomputed opening when it is in the
    /// guess list. Returns `None` when there is nothing left to play.
    #[must_use]
    pub fn suggest(&self) -> Option<Word> {
        if self.history.is_empty()
            && let Ok(opening) = Word::new(self.config.mode.opening())
            && self.accepts(&opening)
        {
            return Some(opening);
        }
        if self.answers.is_empty() {
            return None;
        }
        self.config
            .mode
            .select_guess(self.guesses.words(), self.answers.words())
    }

    /// Apply an observation and return the next state
    #[must_use]
    pub fn apply(mut self, guess: Word, clue: Clue) -> Self {
        let answers_before = self.answers.len();
        self.answers = self.answers.prune(&guess, &clue);
        if self.config.hard_mode {
            self.guesses = self.guesses.prune(&guess, &clue);
        }

        log::debug!(
            "{guess} {clue}: answers {answers_before} -> {}, guesses {}",
            self.answers.len(),
            self.guesses.len()
        );

        self.history.push(Turn {
            guess,
            clue,
            answers_before,
            answers_after: self.answers.len(),
        });
        self
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self.answers.words() {
            [] => SessionStatus::Contradiction,
            [first, ..]
                if self
                    .config
                    .mode
                    .is_finished(self.answers.len(), self.guesses.len()) =>
            {
                SessionStatus::Solved(*first)
            }
            _ => SessionStatus::InProgress,
        }
    }
}
