//! Word check command
//!
//! Explains whether a single word is playable for a puzzle alphabet.

use crate::classifier::{is_compound, is_pangram};
use crate::core::{Alphabet, LetterSet, MIN_WORD_LEN, char_len, normalize};
use crate::dictionary::Dictionary;
use serde::Serialize;

/// Result of checking a word
#[allow(clippy::struct_excessive_bools)] // One flag per rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCheck {
    pub word: String,
    pub in_dictionary: bool,
    pub long_enough: bool,
    pub uses_only_letters: bool,
    pub has_center: bool,
    /// Length, letters and center all fit the alphabet
    pub valid: bool,
    /// Valid and known to the dictionary
    pub playable: bool,
    pub pangram: bool,
    pub compound: bool,
}

/// Check a word against an alphabet and dictionary
#[must_use]
pub fn check_word(word: &str, alphabet: &Alphabet, dictionary: &Dictionary) -> WordCheck {
    let word = normalize(word);
    let in_dictionary = dictionary.contains(&word);
    let long_enough = char_len(&word) >= MIN_WORD_LEN;
    let uses_only_letters = LetterSet::from_word(&word)
        .is_some_and(|letters| letters.is_subset(alphabet.letter_set()));
    let has_center = word.contains(alphabet.center());
    let valid = long_enough && uses_only_letters && has_center;

    WordCheck {
        in_dictionary,
        long_enough,
        uses_only_letters,
        has_center,
        valid,
        playable: valid && in_dictionary,
        pangram: is_pangram(&word, alphabet),
        compound: is_compound(&word),
        word,
    }
}
