//! Word list loading utilities
//!
//! Provides functions to load word lists from files or string slices.

use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Surrounding whitespace is trimmed; blank lines and
/// entries that are not valid words are skipped.
///
/// # Errors
///
/// Returns an error naming the path if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_variants::wordlists::loader::load_from_file;
///
/// let words = load_from_file("answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    let words = parse_words(&content);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated words, skipping blanks and invalid entries
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::debug!("skipping '{trimmed}': {e}");
                    None
                }
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_variants::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Sorted, de-duplicated union of the answers and the guess-only words
///
/// This is the list of words that may be played.
#[must_use]
pub fn merge_guesses(answers: &[Word], guess_only: &[Word]) -> Vec<Word> {
    let mut guesses: Vec<Word> = answers.iter().chain(guess_only).copied().collect();
    guesses.sort_unstable();
    guesses.dedup();
    guesses
}
