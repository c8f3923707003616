//! Pangram detection
//!
//! A pangram uses every letter of the puzzle. Letters may repeat, but the set of
//! distinct letters must equal the alphabet exactly.

use crate::core::{Alphabet, LetterSet};

/// Check if a word's distinct letters are exactly the puzzle alphabet
///
/// Case-insensitive. A word with any character outside A-Z is never a pangram, and a
/// word shorter than seven characters cannot cover seven distinct letters.
///
/// # Examples
/// ```
/// use bee_helper::core::Alphabet;
/// use bee_helper::classifier::is_pangram;
///
/// let alphabet = Alphabet::new("AEGLNOY", 'E').unwrap();
/// assert!(is_pangram("GENEALOGY", &alphabet));
/// assert!(!is_pangram("ANGEL", &alphabet));
/// ```
#[must_use]
pub fn is_pangram(word: &str, alphabet: &Alphabet) -> bool {
    LetterSet::from_word(word) == Some(alphabet.letter_set())
}

/// All pangrams in a word list, in list order
pub fn pangrams<'a, S: AsRef<str>>(words: &'a [S], alphabet: &Alphabet) -> Vec<&'a str> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| is_pangram(word, alphabet))
        .collect()
}
