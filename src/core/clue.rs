//! Clue computation and representation
//!
//! A clue is the per-position feedback for a guess:
//! - Absent (gray): letter not in the answer, or all its occurrences already credited
//! - Present (yellow): letter in the answer at another position
//! - Correct (green): letter in the correct position
//!
//! Every clue maps bijectively to an integer in `0..243` by base-3 positional
//! encoding, first position most significant. That integer is the clue's
//! identity when answers are bucketed by clue.

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use std::fmt;

/// Number of distinct clues (3^5)
pub const CLUE_COUNT: usize = 243;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Status {
    #[default]
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Status {
    /// Base-3 digit of this status
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Status for a base-3 digit, `None` for digits above 2
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Next status in the Absent → Present → Correct cycle
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }

    /// Previous status in the Absent → Present → Correct cycle
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Absent => Self::Correct,
            Self::Present => Self::Absent,
            Self::Correct => Self::Present,
        }
    }

    /// Single square emoji for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Error type for clue text that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for ClueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Clue must have exactly {WORD_LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid clue symbol '{ch}' (use G, Y or -)")
            }
        }
    }
}

impl std::error::Error for ClueError {}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Clue([Status; WORD_LENGTH]);

impl Clue {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Status::Correct; WORD_LENGTH]);

    /// Create a clue from its statuses
    #[must_use]
    pub const fn new(statuses: [Status; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Calculate the clue when `guess` is played against `answer`
    ///
    /// Exact matches are resolved before misplaced letters so that duplicate
    /// letters are never credited more often than they occur in the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::core::{Clue, Word};
    ///
    /// let guess = Word::new("abbey").unwrap();
    /// let answer = Word::new("algae").unwrap();
    ///
    /// // A(green) B(gray) B(gray) E(yellow) Y(gray)
    /// assert_eq!(Clue::compute(&guess, &answer), "G--Y-".parse().unwrap());
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, answer: &Word) -> Self {
        let mut statuses = [Status::Absent; WORD_LENGTH];
        let mut remaining = answer.letter_counts();
        let guess_letters = guess.letters();
        let answer_letters = answer.letters();

        for i in 0..WORD_LENGTH {
            if guess_letters[i] == answer_letters[i] {
                statuses[i] = Status::Correct;
                remaining[letter_index(guess_letters[i])] -= 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if statuses[i] == Status::Correct {
                continue;
            }
            let slot = &mut remaining[letter_index(guess_letters[i])];
            if *slot > 0 {
                statuses[i] = Status::Present;
                *slot -= 1;
            }
        }

        Self(statuses)
    }

    /// Statuses in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[Status; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position (0-4)
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> Status {
        self.0[position]
    }

    /// Replace the status at a specific position
    pub fn set(&mut self, position: usize, status: Status) {
        self.0[position] = status;
    }

    /// Base-3 identity of this clue, in `0..243`
    #[inline]
    #[must_use]
    pub fn index(&self) -> u8 {
        self.0
            .iter()
            .fold(0u8, |acc, status| acc * 3 + status.digit())
    }

    /// Clue for a base-3 identity, `None` outside `0..243`
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        if usize::from(index) >= CLUE_COUNT {
            return None;
        }
        let mut statuses = [Status::Absent; WORD_LENGTH];
        let mut rest = index;
        for slot in statuses.iter_mut().rev() {
            *slot = Status::from_digit(rest % 3)?;
            rest /= 3;
        }
        Some(Self(statuses))
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Whether the game could ever produce this clue for `guess`
    ///
    /// Misplaced credit goes to the leftmost non-green occurrences of a letter,
    /// so a gray occurrence may never precede a yellow one of the same letter.
    #[must_use]
    pub fn is_realizable_for(&self, guess: &Word) -> bool {
        let mut gray_seen = [false; ALPHABET_SIZE];
        for (&letter, &status) in guess.letters().iter().zip(&self.0) {
            let idx = letter_index(letter);
            match status {
                Status::Absent => gray_seen[idx] = true,
                Status::Present if gray_seen[idx] => return false,
                _ => {}
            }
        }
        true
    }

    /// Convert the clue to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|status| status.emoji()).collect()
    }
}

impl std::str::FromStr for Clue {
    type Err = ClueError;

    /// Parse a clue from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'x'/'X'/⬜ for gray
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(ClueError::InvalidLength(symbols.len()));
        }

        let mut statuses = [Status::Absent; WORD_LENGTH];
        for (slot, ch) in statuses.iter_mut().zip(symbols) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Status::Correct,
                'Y' | 'y' | '🟨' => Status::Present,
                '-' | '_' | 'x' | 'X' | '⬜' => Status::Absent,
                other => return Err(ClueError::InvalidSymbol(other)),
            };
        }
        Ok(Self(statuses))
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            let ch = match status {
                Status::Absent => '-',
                Status::Present => 'Y',
                Status::Correct => 'G',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Status::{Absent, Correct, Present};

    fn clue(guess: &str, answer: &str) -> Clue {
        Clue::compute(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn raise_against_pearl() {
        // r and a are in pearl elsewhere; i and s are not; pearl's single e is
        // still unclaimed when the final e is checked, so it is yellow.
        assert_eq!(
            clue("raise", "pearl"),
            Clue::new([Present, Present, Absent, Absent, Present])
        );
    }

    #[test]
    fn abbey_against_algae() {
        // The leading a is green and consumes one of algae's two a's; abbey has
        // no second a, both b's are absent, e is misplaced, y is absent.
        assert_eq!(
            clue("abbey", "algae"),
            Clue::new([Correct, Absent, Absent, Present, Absent])
        );
    }

    #[test]
    fn duplicate_letters_yellow_limited_by_answer() {
        // SPEED vs ERASE: both e's are yellow because erase has two
        assert_eq!(
            clue("speed", "erase"),
            Clue::new([Present, Absent, Present, Present, Absent])
        );
    }

    #[test]
    fn green_resolved_before_yellow() {
        // ROBOT vs FLOOR: the second o is green, so the first only gets the
        // remaining o
        assert_eq!(
            clue("robot", "floor"),
            Clue::new([Present, Present, Absent, Correct, Absent])
        );
        // Without green-first resolution the leading e's would steal the credit
        assert_eq!(
            clue("eerie", "thyme"),
            Clue::new([Absent, Absent, Absent, Absent, Correct])
        );
    }

    #[test]
    fn identical_words_are_perfect() {
        for word in ["roate", "raise", "immix", "aaaaa"] {
            assert!(clue(word, word).is_perfect());
        }
    }

    #[test]
    fn credited_letters_never_exceed_answer_counts() {
        let words = ["abbey", "algae", "eerie", "geese", "llama", "mamma", "pearl"];
        for guess in words {
            for answer in words {
                let g = Word::new(guess).unwrap();
                let a = Word::new(answer).unwrap();
                let c = Clue::compute(&g, &a);
                let mut credited = [0u8; ALPHABET_SIZE];
                for (i, &status) in c.statuses().iter().enumerate() {
                    assert_eq!(
                        status == Correct,
                        g.letter_at(i) == a.letter_at(i),
                        "{guess} vs {answer} at {i}"
                    );
                    if status != Absent {
                        credited[letter_index(g.letter_at(i))] += 1;
                    }
                }
                let counts = a.letter_counts();
                for idx in 0..ALPHABET_SIZE {
                    assert!(credited[idx] <= counts[idx], "{guess} vs {answer}");
                }
                assert!(c.is_realizable_for(&g));
            }
        }
    }

    #[test]
    fn index_is_most_significant_first() {
        assert_eq!(Clue::default().index(), 0);
        assert_eq!(Clue::PERFECT.index(), 242);
        assert_eq!(Clue::new([Correct, Absent, Absent, Absent, Absent]).index(), 162);
        assert_eq!(Clue::new([Absent, Absent, Absent, Absent, Present]).index(), 1);
        // G--Y- = 2*81 + 1*3
        assert_eq!(clue("abbey", "algae").index(), 165);
    }

    #[test]
    fn index_round_trips_and_never_collides() {
        let mut seen = [false; CLUE_COUNT];
        for index in 0..=242u8 {
            let c = Clue::from_index(index).unwrap();
            assert_eq!(c.index(), index);
            assert!(!seen[usize::from(c.index())]);
            seen[usize::from(c.index())] = true;
        }
        assert!(Clue::from_index(243).is_none());
    }

    #[test]
    fn parse_accepts_letters_and_emoji() {
        let p1: Clue = "GY-GY".parse().unwrap();
        let p2: Clue = "🟩🟨⬜🟩🟨".parse().unwrap();
        let p3: Clue = "gyxgy".parse().unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_string(), "GY-GY");
        assert_eq!(p1.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!("GYG".parse::<Clue>(), Err(ClueError::InvalidLength(3)));
        assert_eq!("GYGGYY".parse::<Clue>(), Err(ClueError::InvalidLength(6)));
        assert_eq!("GQGGY".parse::<Clue>(), Err(ClueError::InvalidSymbol('Q')));
        assert_eq!("".parse::<Clue>(), Err(ClueError::InvalidLength(0)));
    }

    #[test]
    fn gray_before_yellow_of_same_letter_is_unrealizable() {
        let guess = Word::new("eerie").unwrap();
        let realizable = Clue::new([Present, Absent, Absent, Absent, Absent]);
        let unrealizable = Clue::new([Absent, Present, Absent, Absent, Absent]);
        assert!(realizable.is_realizable_for(&guess));
        assert!(!unrealizable.is_realizable_for(&guess));
        // A green in between does not matter
        let with_green = Clue::new([Present, Absent, Absent, Absent, Correct]);
        assert!(with_green.is_realizable_for(&guess));
    }

    #[test]
    fn status_cycle() {
        assert_eq!(Absent.next(), Present);
        assert_eq!(Correct.next(), Absent);
        assert_eq!(Absent.previous(), Correct);
        for s in [Absent, Present, Correct] {
            assert_eq!(s.next().previous(), s);
            assert_eq!(Status::from_digit(s.digit()), Some(s));
        }
    }
}
