//! Wordle word representation
//!
//! A Word stores a 5-letter lower-case word as a fixed byte array. Letter lookups
//! go through 26-entry tables indexed by `letter - b'a'`.

use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Size of the lower-case alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A 5-letter word
///
/// Ordering is lexicographic, which matches the ordering of the underlying text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Index of a lower-case ASCII letter in a 26-entry table
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Upper-case input is normalised to lower case.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::core::Word;
    ///
    /// let word = Word::new("roate").unwrap();
    /// assert_eq!(word.text(), "roate");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.to_lowercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(text.as_bytes());
        Ok(Self(letters))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction only admits ASCII lower-case bytes
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Occurrence count of every letter, indexed by `letter - b'a'`
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in &self.0 {
            counts[letter_index(letter)] += 1;
        }
        counts
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("roate").unwrap();
        assert_eq!(word.text(), "roate");
        assert_eq!(word.letters(), b"roate");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("RAISE").unwrap();
        assert_eq!(word.text(), "raise");

        let word2 = Word::new("RaIsE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("immix").unwrap();
        assert_eq!(word.letter_at(0), b'i');
        assert_eq!(word.letter_at(1), b'm');
        assert_eq!(word.letter_at(4), b'x');
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("abbey").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b'a')], 1);
        assert_eq!(counts[letter_index(b'b')], 2);
        assert_eq!(counts[letter_index(b'e')], 1);
        assert_eq!(counts[letter_index(b'y')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("pearl").unwrap();
        assert!(word.has_letter(b'p'));
        assert!(word.has_letter(b'l'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_ordering_matches_text() {
        let mut words = vec![
            Word::new("raise").unwrap(),
            Word::new("abbey").unwrap(),
            Word::new("pearl").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["abbey", "pearl", "raise"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "algae".parse().unwrap();
        assert_eq!(format!("{word}"), "algae");
    }
}
