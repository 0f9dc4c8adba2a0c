//! Candidate pruning
//!
//! Applies one (guess, clue) observation to a word list through the knowledge
//! model. Keeping a word is equivalent to checking that every clue seen so far
//! is the clue that word would have produced.

use crate::core::{Clue, Knowledge, Word};

/// Fold an observation into `knowledge` and keep the words that still fit
///
/// On a contradiction (the clue cannot be produced for this guess, a position
/// runs out of letters, a letter bound inverts, or a bound widens past what was
/// already known) the incoming knowledge is returned with an empty list.
#[must_use]
pub fn prune(
    knowledge: &Knowledge,
    words: &[Word],
    guess: &Word,
    clue: &Clue,
) -> (Knowledge, Vec<Word>) {
    if !clue.is_realizable_for(guess) {
        log::warn!("clue {clue} can never be produced by {guess}");
        return (*knowledge, Vec::new());
    }

    let next = knowledge.update(guess, clue);
    if !next.is_feasible() || !next.narrows(knowledge) {
        log::warn!("no word is consistent with {guess} {clue}");
        return (*knowledge, Vec::new());
    }

    let kept: Vec<Word> = words.iter().filter(|w| next.admits(w)).copied().collect();
    log::trace!("{guess} {clue}: kept {} of {} words", kept.len(), words.len());
    (next, kept)
}

/// A word list together with the knowledge that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    knowledge: Knowledge,
    words: Vec<Word>,
}

impl CandidatePool {
    /// Start a pool, seeding its knowledge from the words themselves
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            knowledge: Knowledge::from_words(&words),
            words,
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pool left after observing `clue` for `guess`
    #[must_use]
    pub fn prune(&self, guess: &Word, clue: &Clue) -> Self {
        let (knowledge, words) = prune(&self.knowledge, &self.words, guess, clue);
        Self { knowledge, words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::{Rng, SeedableRng};

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    const LIST: &[&str] = &[
        "abbey", "aback", "algae", "arise", "bleed", "eerie", "geese", "greet", "llama",
        "mamma", "melee", "pearl", "raise", "roate", "robot", "floor", "speed", "erase",
        "those", "thyme", "immix", "array", "radar", "error", "sassy", "pizza", "fuzzy",
    ];

    /// Words consistent with every observation, by recomputing clues
    fn brute_force(initial: &[Word], history: &[(Word, Clue)]) -> Vec<Word> {
        initial
            .iter()
            .filter(|candidate| {
                history
                    .iter()
                    .all(|(guess, clue)| Clue::compute(guess, candidate) == *clue)
            })
            .copied()
            .collect()
    }

    #[test]
    fn keeps_words_matching_the_clue() {
        let list = words(&["pearl", "algae", "abbey", "raise"]);
        let guess = Word::new("raise").unwrap();
        let answer = Word::new("pearl").unwrap();
        let clue = Clue::compute(&guess, &answer);

        let (_, kept) = prune(&Knowledge::from_words(&list), &list, &guess, &clue);
        assert_eq!(kept, vec![answer]);
    }

    #[test]
    fn pruning_preserves_order() {
        let list = words(&["pearl", "algae", "abbey", "arise", "raise"]);
        let guess = Word::new("zzzzz").unwrap();
        let clue: Clue = "-----".parse().unwrap();

        let pool = CandidatePool::new(list.clone()).prune(&guess, &clue);
        assert_eq!(pool.words(), list.as_slice());
    }

    #[test]
    fn impossible_green_empties_the_list_for_good() {
        let pool = CandidatePool::new(words(&["pearl", "algae", "abbey"]));
        let before = *pool.knowledge();

        let pool = pool.prune(&Word::new("zzzzz").unwrap(), &Clue::PERFECT);
        assert!(pool.is_empty());
        // The earlier knowledge is kept on contradiction
        assert_eq!(*pool.knowledge(), before);

        let guess = Word::new("pearl").unwrap();
        for clue in ["GGGGG", "-----", "YYYYY"] {
            let next = pool.prune(&guess, &clue.parse().unwrap());
            assert!(next.is_empty());
        }
    }

    #[test]
    fn unrealizable_clue_is_a_contradiction() {
        // Gray e before yellow e: never produced by the game
        let list = words(LIST);
        let pool = CandidatePool::new(list);
        let pool = pool.prune(&Word::new("eerie").unwrap(), &"-Y---".parse().unwrap());
        assert!(pool.is_empty());
    }

    #[test]
    fn bound_widening_past_seed_is_a_contradiction() {
        // No word in the list contains a b; the clue claims exactly one
        let pool = CandidatePool::new(words(&["pearl", "algae"]));
        let pool = pool.prune(&Word::new("abbey").unwrap(), &"-Y---".parse().unwrap());
        assert!(pool.is_empty());
    }

    #[test]
    fn matches_brute_force_for_every_single_observation() {
        let list = words(LIST);
        let pool = CandidatePool::new(list.clone());
        for guess in &list {
            for answer in &list {
                let clue = Clue::compute(guess, answer);
                let expected = brute_force(&list, &[(*guess, clue)]);
                assert_eq!(pool.prune(guess, &clue).words(), expected, "{guess} vs {answer}");
            }
        }
    }

    #[test]
    fn matches_brute_force_for_arbitrary_clues() {
        // Including clues no answer produces and clues the game never emits
        let list = words(LIST);
        let pool = CandidatePool::new(list.clone());
        for guess in words(&["eerie", "abbey", "geese", "radar"]) {
            for index in 0..=242u8 {
                let clue = Clue::from_index(index).unwrap();
                let expected = brute_force(&list, &[(guess, clue)]);
                assert_eq!(pool.prune(&guess, &clue).words(), expected, "{guess} {clue}");
            }
        }
    }

    #[test]
    fn incremental_pruning_matches_brute_force() {
        let list = words(LIST);
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let answer = *list.choose(&mut rng).unwrap();
            let mut pool = CandidatePool::new(list.clone());
            let mut history = Vec::new();

            for _ in 0..rng.random_range(1..=4) {
                let guess = *list.choose(&mut rng).unwrap();
                let clue = Clue::compute(&guess, &answer);
                history.push((guess, clue));
                pool = pool.prune(&guess, &clue);
                assert_eq!(pool.words(), brute_force(&list, &history));
                assert!(pool.words().contains(&answer));
            }
        }
    }

    #[test]
    fn repeated_observation_changes_nothing() {
        let list = words(LIST);
        let guess = Word::new("speed").unwrap();
        let clue = Clue::compute(&guess, &Word::new("erase").unwrap());

        let once = CandidatePool::new(list).prune(&guess, &clue);
        let twice = once.prune(&guess, &clue);
        assert_eq!(once, twice);
    }
}
