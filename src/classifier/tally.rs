//! Word tallies by first letter and by prefix

use crate::core::Alphabet;
use std::collections::BTreeMap;

/// Count words by their uppercase first letter
///
/// Reports every first letter actually found; letters with no words are absent.
/// Empty strings are skipped. Each word lands in exactly one bucket.
///
/// # Examples
/// ```
/// use bee_helper::classifier::word_count_by_first_letter;
///
/// let counts = word_count_by_first_letter(&["ALIEN", "ALINE", "tone"]);
/// assert_eq!(counts.get(&'A'), Some(&2));
/// assert_eq!(counts.get(&'T'), Some(&1));
/// assert_eq!(counts.get(&'E'), None);
/// ```
#[must_use]
pub fn word_count_by_first_letter<S: AsRef<str>>(words: &[S]) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for word in words {
        if let Some(first) = word.as_ref().chars().next() {
            let upper = first.to_uppercase().next().unwrap_or(first);
            *counts.entry(upper).or_insert(0) += 1;
        }
    }
    counts
}

/// First-letter counts for all seven alphabet letters, in alphabet order
///
/// Letters with no words are present with a count of zero.
#[must_use]
pub fn letter_table(counts: &BTreeMap<char, usize>, alphabet: &Alphabet) -> Vec<(char, usize)> {
    alphabet
        .letters()
        .iter()
        .map(|&letter| (letter, counts.get(&letter).copied().unwrap_or(0)))
        .collect()
}

/// Count words by their uppercase prefix of `n` characters
///
/// Only prefixes actually observed are reported. Words shorter than `n` count toward
/// no prefix; a word of exactly `n` characters counts toward itself.
///
/// # Examples
/// ```
/// use bee_helper::classifier::word_count_by_prefix;
///
/// let counts = word_count_by_prefix(&["ALIEN", "ALINE", "INLET"], 2);
/// assert_eq!(counts.get("AL"), Some(&2));
/// assert_eq!(counts.get("IN"), Some(&1));
/// assert_eq!(counts.len(), 2);
/// ```
#[must_use]
pub fn word_count_by_prefix<S: AsRef<str>>(words: &[S], n: usize) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for word in words {
        let prefix: String = word.as_ref().chars().take(n).collect();
        if prefix.chars().count() < n {
            continue;
        }
        *counts.entry(prefix.to_uppercase()).or_insert(0) += 1;
    }
    counts
}
