//! Candidate generation: filtering a corpus against a puzzle alphabet

use crate::core::{Alphabet, LetterSet, MIN_WORD_LEN, char_len, normalize};

/// Check if a word is playable for an alphabet
///
/// A playable word is at least four letters long, uses only alphabet letters
/// (repeats allowed) and contains the center letter. Case-insensitive.
#[must_use]
pub fn is_valid_word(word: &str, alphabet: &Alphabet) -> bool {
    char_len(word) >= MIN_WORD_LEN
        && LetterSet::from_word(word).is_some_and(|letters| fits(letters, alphabet))
}

/// Letter-set part of the validity check
#[inline]
pub(crate) fn fits(letters: LetterSet, alphabet: &Alphabet) -> bool {
    letters.is_subset(alphabet.letter_set()) && letters.contains(alphabet.center())
}

/// Generate the sorted list of valid words for an alphabet from a corpus
///
/// Every corpus entry is normalized to uppercase, then kept only if
/// [`is_valid_word`] accepts it. The result is deduplicated and sorted ascending.
/// An empty corpus, or one with no matches, yields an empty list.
///
/// # Examples
/// ```
/// use bee_helper::core::Alphabet;
/// use bee_helper::dictionary::generate_words;
///
/// let alphabet = Alphabet::new("AEILNOT", 'E').unwrap();
/// let words = generate_words(&alphabet, ["tone", "NAIL", "inlet", "TOE", "TONE", "PLANET"]);
/// assert_eq!(words, vec!["INLET", "TONE"]);
/// ```
pub fn generate_words<I, S>(alphabet: &Alphabet, corpus: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut accepted: Vec<String> = corpus
        .into_iter()
        .map(|word| normalize(word.as_ref()))
        .filter(|word| is_valid_word(word, alphabet))
        .collect();

    accepted.sort_unstable();
    accepted.dedup();
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{CORPUS, FALLBACK_WORDS};

    fn alphabet() -> Alphabet {
        Alphabet::new("AEILNOT", 'E').unwrap()
    }

    #[test]
    fn rejects_short_words() {
        assert!(!is_valid_word("TOE", &alphabet()));
        assert!(!is_valid_word("", &alphabet()));
        assert!(is_valid_word("TONE", &alphabet()));
    }

    #[test]
    fn rejects_foreign_letters() {
        assert!(!is_valid_word("PLANET", &alphabet()));
        assert!(!is_valid_word("TOE-NAIL", &alphabet()));
    }

    #[test]
    fn rejects_missing_center() {
        assert!(!is_valid_word("NAIL", &alphabet()));
        assert!(!is_valid_word("TALON", &alphabet()));
    }

    #[test]
    fn accepts_repeated_letters() {
        assert!(is_valid_word("ENTENTE", &alphabet()));
        assert!(is_valid_word("little", &alphabet()));
    }

    #[test]
    fn generate_sorts_and_dedups() {
        let words = generate_words(&alphabet(), ["TONE", "alien", "Tone", "INLET", "ALIEN"]);
        assert_eq!(words, vec!["ALIEN", "INLET", "TONE"]);
    }

    #[test]
    fn generate_empty_corpus() {
        let corpus: [&str; 0] = [];
        assert!(generate_words(&alphabet(), corpus).is_empty());
    }

    #[test]
    fn generate_no_matches() {
        let words = generate_words(&alphabet(), ["PLANT", "HONEY", "NAIL"]);
        assert!(words.is_empty());
    }

    #[test]
    fn generate_fallback_corpus() {
        let words = generate_words(&alphabet(), FALLBACK_WORDS);
        assert_eq!(words.len(), 24);
        assert_eq!(words.first().map(String::as_str), Some("ALIEN"));
        assert_eq!(words.last().map(String::as_str), Some("TONE"));
        assert!(words.contains(&"LITTLE".to_string()));
    }

    #[test]
    fn generated_words_respect_alphabet_for_every_center() {
        let base = alphabet();
        for &center in base.letters() {
            let alphabet = base.with_center(center).unwrap();
            for word in generate_words(&alphabet, CORPUS) {
                let letters = LetterSet::from_word(&word).unwrap();
                assert!(letters.is_subset(alphabet.letter_set()), "{word}");
                assert!(letters.contains(center), "{word} lacks {center}");
                assert!(word.chars().count() >= MIN_WORD_LEN, "{word}");
            }
        }
    }

    #[test]
    fn short_words_never_generated() {
        let alphabet = Alphabet::new("ABCDEFG", 'A').unwrap();
        let corpus = ["A", "AB", "ABC", "BAD", "CAB", "FACE", "FADE"];
        assert_eq!(generate_words(&alphabet, corpus), vec!["FACE", "FADE"]);
    }
}
