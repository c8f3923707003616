//! Dictionary of candidate words
//!
//! An immutable, sorted set of uppercase words of at least four letters. The bundled
//! corpus is compiled into the binary and built lazily on first use; a corpus file
//! that cannot be read falls back to a small built-in list.

mod embedded;
mod fallback;
mod generate;
pub mod loader;

pub use embedded::{CORPUS, CORPUS_COUNT};
pub use fallback::FALLBACK_WORDS;
pub use generate::{generate_words, is_valid_word};

use crate::core::{Alphabet, LetterSet, MIN_WORD_LEN, Puzzle, PuzzleDate, char_len, normalize};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

static BUNDLED: LazyLock<Dictionary> = LazyLock::new(|| Dictionary::from_words(CORPUS));

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    text: String,
    /// `None` for words with characters outside A-Z
    letters: Option<LetterSet>,
}

/// Immutable word set
///
/// Safe to share between threads; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
}

impl Dictionary {
    /// Build a dictionary from raw words
    ///
    /// Words are normalized to uppercase; words shorter than four characters are
    /// dropped, duplicates are removed.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut texts: Vec<String> = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| char_len(word) >= MIN_WORD_LEN)
            .collect();
        texts.sort_unstable();
        texts.dedup();

        let entries = texts
            .into_iter()
            .map(|text| Entry {
                letters: LetterSet::from_word(&text),
                text,
            })
            .collect();

        Self { entries }
    }

    /// The corpus bundled with the binary
    pub fn bundled() -> &'static Self {
        &BUNDLED
    }

    /// The small built-in list used when no corpus can be loaded
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK_WORDS)
    }

    /// Load a dictionary from a corpus file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let words = loader::load_from_file(path)?;
        Ok(Self::from_words(words))
    }

    /// Load a dictionary from a corpus file, falling back to the built-in list
    ///
    /// A missing or unreadable file is logged and never reported to the caller.
    pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(dictionary) => {
                debug!(path = %path.display(), words = dictionary.len(), "loaded corpus");
                dictionary
            }
            Err(e) => {
                let dictionary = Self::fallback();
                warn!(
                    path = %path.display(),
                    error = %e,
                    words = dictionary.len(),
                    "corpus unavailable, using built-in word list"
                );
                dictionary
            }
        }
    }

    /// Check if a word is in the dictionary, case-insensitive
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        self.entries
            .binary_search_by(|entry| entry.text.as_str().cmp(&word))
            .is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All words in ascending order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.text.as_str())
    }

    /// Valid words for an alphabet, sorted ascending
    ///
    /// Same result as [`generate_words`] over [`Dictionary::words`], without
    /// recomputing letter sets.
    #[must_use]
    pub fn generate(&self, alphabet: &Alphabet) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| {
                entry
                    .letters
                    .is_some_and(|letters| generate::fits(letters, alphabet))
            })
            .map(|entry| entry.text.clone())
            .collect()
    }

    /// Build a puzzle for manually entered letters
    ///
    /// The puzzle is dated today and tagged with `source`.
    #[must_use]
    pub fn puzzle(&self, alphabet: Alphabet, source: &str) -> Puzzle {
        let words = self.generate(&alphabet);
        debug!(%alphabet, center = %alphabet.center(), words = words.len(), "generated puzzle words");
        Puzzle::new(PuzzleDate::today(), alphabet, words).with_source(source)
    }

    /// Distinct seven-letter sets of the dictionary's words, in alphabetical order
    ///
    /// Each set is an alphabet with at least one pangram.
    #[must_use]
    pub fn pangram_sets(&self) -> Vec<LetterSet> {
        let unique: FxHashSet<LetterSet> = self
            .entries
            .iter()
            .filter_map(|entry| entry.letters)
            .filter(|letters| letters.len() == crate::core::ALPHABET_SIZE)
            .collect();

        let mut sets: Vec<LetterSet> = unique.into_iter().collect();
        sets.sort_by_cached_key(ToString::to_string);
        sets
    }
}
