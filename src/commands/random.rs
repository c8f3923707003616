//! Random puzzle generation
//!
//! Picks the letters of a random pangram from the dictionary and a random center.

use crate::core::{Alphabet, Puzzle};
use crate::dictionary::Dictionary;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create a generator, reproducible when a seed is given
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Build a random puzzle that has at least one pangram
///
/// Returns `None` if the dictionary has no word with exactly seven distinct letters.
pub fn random_puzzle<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R) -> Option<Puzzle> {
    let sets = dictionary.pangram_sets();
    let set = *sets.choose(rng)?;

    let letters: Vec<char> = set.letters().collect();
    let center = *letters.choose(rng)?;
    let alphabet = Alphabet::from_set(set, center).ok()?;

    Some(dictionary.puzzle(alphabet, "random"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{is_pangram, pangrams};
    use crate::dictionary::is_valid_word;

    #[test]
    fn random_puzzle_has_pangram() {
        let dictionary = Dictionary::bundled();
        for seed in 0..20 {
            let puzzle = random_puzzle(dictionary, &mut seeded_rng(Some(seed))).unwrap();
            assert!(
                !pangrams(puzzle.words(), puzzle.alphabet()).is_empty(),
                "seed {seed}: {} has no pangram",
                puzzle.alphabet()
            );
        }
    }

    #[test]
    fn random_puzzle_words_are_valid() {
        let dictionary = Dictionary::bundled();
        let puzzle = random_puzzle(dictionary, &mut seeded_rng(Some(42))).unwrap();

        assert_eq!(puzzle.source(), Some("random"));
        assert!(puzzle.alphabet().contains(puzzle.alphabet().center()));
        for word in puzzle.words() {
            assert!(is_valid_word(word, puzzle.alphabet()), "{word}");
        }
        assert!(puzzle.words().iter().any(|w| is_pangram(w, puzzle.alphabet())));
    }

    #[test]
    fn same_seed_same_puzzle() {
        let dictionary = Dictionary::bundled();
        let first = random_puzzle(dictionary, &mut seeded_rng(Some(7))).unwrap();
        let second = random_puzzle(dictionary, &mut seeded_rng(Some(7))).unwrap();

        assert_eq!(first.alphabet(), second.alphabet());
        assert_eq!(first.words(), second.words());
    }

    #[test]
    fn empty_dictionary_has_no_random_puzzle() {
        assert!(random_puzzle(&Dictionary::default(), &mut seeded_rng(Some(1))).is_none());
    }
}
