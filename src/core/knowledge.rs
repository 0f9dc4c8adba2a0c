//! Accumulated constraint model
//!
//! Knowledge condenses every clue seen so far into:
//! - one [`PositionSet`] per position: the letters still possible there
//! - one [`LetterBound`] per letter: how many times it may occur
//!
//! Testing a word against these tables is equivalent to recomputing the clue
//! for every past guess, but costs O(word length) instead of O(history).
//! Both structures only ever narrow.

use super::clue::{Clue, Status};
use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use std::fmt;

/// Set of letters still possible at one position, as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSet(u32);

impl PositionSet {
    /// Every letter allowed
    pub const FULL: Self = Self((1 << ALPHABET_SIZE) - 1);

    /// No letter allowed
    pub const EMPTY: Self = Self(0);

    /// Set containing a single letter
    #[must_use]
    pub const fn only(letter: u8) -> Self {
        Self(1 << letter_index(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | (1 << letter_index(letter)))
    }

    #[must_use]
    pub const fn without(self, letter: u8) -> Self {
        Self(self.0 & !(1 << letter_index(letter)))
    }

    /// Restrict to a single letter, which may leave the set empty
    #[must_use]
    pub const fn collapse_to(self, letter: u8) -> Self {
        Self(self.0 & (1 << letter_index(letter)))
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Inclusive bounds on how many times a letter occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterBound {
    pub min: u8,
    pub max: u8,
}

impl LetterBound {
    /// Bound that admits any count
    pub const UNCONSTRAINED: Self = Self {
        min: 0,
        max: WORD_LENGTH as u8,
    };

    #[inline]
    #[must_use]
    pub const fn admits(self, count: u8) -> bool {
        self.min <= count && count <= self.max
    }

    #[must_use]
    pub const fn is_feasible(self) -> bool {
        self.min <= self.max
    }

    /// Whether `self` is at least as tight as `previous`
    #[must_use]
    pub const fn narrows(self, previous: Self) -> bool {
        self.min >= previous.min && self.max <= previous.max
    }
}

impl Default for LetterBound {
    fn default() -> Self {
        Self::UNCONSTRAINED
    }
}

/// Position sets and letter bounds consistent with every clue seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Knowledge {
    positions: [PositionSet; WORD_LENGTH],
    bounds: [LetterBound; ALPHABET_SIZE],
}

impl Default for Knowledge {
    /// Knowledge admitting every word
    fn default() -> Self {
        Self {
            positions: [PositionSet::FULL; WORD_LENGTH],
            bounds: [LetterBound::UNCONSTRAINED; ALPHABET_SIZE],
        }
    }
}

impl Knowledge {
    /// Seed knowledge from a word list
    ///
    /// Each position allows exactly the letters some word has there, and each
    /// letter is bounded by its smallest and largest count across the list.
    /// An empty list yields unconstrained knowledge.
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        if words.is_empty() {
            return Self::default();
        }

        let mut positions = [PositionSet::EMPTY; WORD_LENGTH];
        let mut bounds = [LetterBound {
            min: WORD_LENGTH as u8,
            max: 0,
        }; ALPHABET_SIZE];

        for word in words {
            for (set, &letter) in positions.iter_mut().zip(word.letters()) {
                *set = set.with(letter);
            }
            for (bound, count) in bounds.iter_mut().zip(word.letter_counts()) {
                bound.min = bound.min.min(count);
                bound.max = bound.max.max(count);
            }
        }

        Self { positions, bounds }
    }

    /// Letters still possible at `position`
    #[must_use]
    pub const fn position(&self, position: usize) -> PositionSet {
        self.positions[position]
    }

    /// Occurrence bounds for `letter`
    #[must_use]
    pub const fn bound(&self, letter: u8) -> LetterBound {
        self.bounds[letter_index(letter)]
    }

    /// Fold one observation into the knowledge, returning the new state
    ///
    /// Gray and yellow squares rule the guessed letter out at that position;
    /// green squares pin it. For every guessed letter, the non-gray squares
    /// give a new minimum, and any gray square caps the total at exactly the
    /// non-gray count.
    ///
    /// The result may be infeasible; see [`Knowledge::is_feasible`].
    #[must_use]
    pub fn update(&self, guess: &Word, clue: &Clue) -> Self {
        let mut next = *self;

        let mut yes = [0u8; ALPHABET_SIZE];
        let mut no = [0u8; ALPHABET_SIZE];

        for (i, (&letter, &status)) in guess.letters().iter().zip(clue.statuses()).enumerate() {
            let idx = letter_index(letter);
            match status {
                Status::Correct => {
                    next.positions[i] = next.positions[i].collapse_to(letter);
                    yes[idx] += 1;
                }
                Status::Present => {
                    next.positions[i] = next.positions[i].without(letter);
                    yes[idx] += 1;
                }
                Status::Absent => {
                    next.positions[i] = next.positions[i].without(letter);
                    no[idx] += 1;
                }
            }
        }

        for idx in 0..ALPHABET_SIZE {
            if yes[idx] == 0 && no[idx] == 0 {
                continue;
            }
            let bound = &mut next.bounds[idx];
            bound.min = bound.min.max(yes[idx]);
            if no[idx] > 0 {
                bound.max = yes[idx];
            }
        }

        next
    }

    /// No position is empty and every letter has `min <= max`
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.positions.iter().all(|set| !set.is_empty())
            && self.bounds.iter().all(|bound| bound.is_feasible())
    }

    /// Every position set and letter bound is at least as tight as in `previous`
    #[must_use]
    pub fn narrows(&self, previous: &Self) -> bool {
        self.positions
            .iter()
            .zip(&previous.positions)
            .all(|(now, before)| now.is_subset_of(*before))
            && self
                .bounds
                .iter()
                .zip(&previous.bounds)
                .all(|(now, before)| now.narrows(*before))
    }

    /// Whether `word` satisfies every position set and letter bound
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let letters = word.letters();
        if !self
            .positions
            .iter()
            .zip(letters)
            .all(|(set, &letter)| set.contains(letter))
        {
            return false;
        }

        self.bounds
            .iter()
            .zip(word.letter_counts())
            .all(|(bound, count)| bound.admits(count))
    }
}
