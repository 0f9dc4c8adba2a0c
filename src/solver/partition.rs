//! Clue partitioning of the answer pool
//!
//! Every strategy evaluates a guess the same way: bucket the remaining answers
//! by the clue the guess would produce against each of them, then reduce the
//! bucket sizes to a score.

use crate::core::{CLUE_COUNT, Clue, Word};

/// Bucket sizes for one guess against a set of answers
///
/// Buckets are indexed by [`Clue::index`]; sizes of non-empty buckets sum to
/// the number of answers.
#[derive(Debug, Clone)]
pub struct Partition {
    buckets: [u32; CLUE_COUNT],
    total: usize,
}

impl Partition {
    /// Bucket `answers` by the clue `guess` produces against each of them
    ///
    /// # Examples
    /// ```
    /// use wordle_variants::core::Word;
    /// use wordle_variants::solver::Partition;
    ///
    /// let guess = Word::new("raise").unwrap();
    /// let answers = [Word::new("raise").unwrap(), Word::new("pearl").unwrap()];
    ///
    /// let partition = Partition::of(&guess, &answers);
    /// assert_eq!(partition.total(), 2);
    /// assert_eq!(partition.largest_bucket(), 1);
    /// ```
    #[must_use]
    pub fn of(guess: &Word, answers: &[Word]) -> Self {
        let mut buckets = [0u32; CLUE_COUNT];
        for answer in answers {
            buckets[usize::from(Clue::compute(guess, answer).index())] += 1;
        }
        Self {
            buckets,
            total: answers.len(),
        }
    }

    /// Number of answers partitioned
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Size of the bucket for `clue`
    #[must_use]
    pub fn bucket(&self, clue: &Clue) -> usize {
        self.buckets[usize::from(clue.index())] as usize
    }

    /// Sizes of the non-empty buckets, in clue order
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets
            .iter()
            .filter(|&&size| size > 0)
            .map(|&size| size as usize)
    }

    /// Number of distinct clues the guess can produce
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.sizes().count()
    }

    /// Expected number of answers left after the clue is revealed
    ///
    /// Σ size² / n, assuming the answer is drawn uniformly. Zero for an empty
    /// partition.
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let sum_of_squares: u64 = self.sizes().map(|size| (size * size) as u64).sum();
        sum_of_squares as f64 / self.total as f64
    }

    /// Largest bucket: the most answers an adversary can keep alive
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.sizes().max().unwrap_or(0)
    }

    /// Shannon entropy of the clue distribution in bits
    ///
    /// H = -Σ p * log₂(p)
    #[must_use]
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.sizes()
            .map(|size| {
                let p = size as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct clues
    pub buckets: usize,
}

impl GuessMetrics {
    /// Metrics for `guess` against `answers`
    #[must_use]
    pub fn calculate(guess: &Word, answers: &[Word]) -> Self {
        Self::from(&Partition::of(guess, answers))
    }
}

impl From<&Partition> for GuessMetrics {
    fn from(partition: &Partition) -> Self {
        Self {
            entropy: partition.entropy(),
            expected_remaining: partition.expected_remaining(),
            max_partition: partition.largest_bucket(),
            buckets: partition.bucket_count(),
        }
    }
}
