//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod clue;
mod knowledge;
mod word;

pub use clue::{CLUE_COUNT, Clue, ClueError, Status};
pub use knowledge::{Knowledge, LetterBound, PositionSet};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError, letter_index};
