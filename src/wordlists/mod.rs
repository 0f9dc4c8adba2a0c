//! Word lists
//!
//! Loading the answer and guess-only lists and merging them into the list of
//! playable words.

pub mod loader;

pub use loader::{load_from_file, merge_guesses, parse_words, words_from_slice};

use anyhow::Result;
use std::path::Path;

/// The two lists a game is played over
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    pub answers: Vec<crate::core::Word>,
    pub guess_only: Vec<crate::core::Word>,
}

impl WordLists {
    /// Load both lists from disk
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read.
    pub fn load(answers: &Path, guesses: &Path) -> Result<Self> {
        Ok(Self {
            answers: load_from_file(answers)?,
            guess_only: load_from_file(guesses)?,
        })
    }
}
