//! Word normalization and distinct-letter sets
//!
//! Words are plain uppercase strings. The only structure the classifier needs is the
//! set of distinct letters a word uses, stored as a 26-bit mask.

use std::fmt;

/// Minimum length of a playable word
pub const MIN_WORD_LEN: usize = 4;

/// Normalize a word for comparison: trim surrounding whitespace and uppercase
///
/// # Examples
/// ```
/// use bee_helper::core::normalize;
///
/// assert_eq!(normalize("  Genealogy\n"), "GENEALOGY");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

/// Length of a word in characters (not bytes)
#[inline]
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Set of distinct letters A-Z
///
/// Bit `i` is set when the letter `'A' + i` is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Distinct letters of a word, case-insensitive
    ///
    /// Returns `None` if the word contains anything other than ASCII letters
    /// (hyphens, spaces, digits, accented letters). Such a word can never be
    /// spelled from a puzzle alphabet.
    ///
    /// # Examples
    /// ```
    /// use bee_helper::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("Genealogy").unwrap();
    /// assert_eq!(set.len(), 7);
    /// assert!(LetterSet::from_word("ALL-IN").is_none());
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let mut set = Self::EMPTY;
        for ch in word.chars() {
            if !set.insert(ch) {
                return None;
            }
        }
        Some(set)
    }

    /// Add a letter, case-insensitive
    ///
    /// Returns `false` (leaving the set unchanged) if `letter` is not an ASCII letter.
    pub fn insert(&mut self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) => {
                self.0 |= bit;
                true
            }
            None => false,
        }
    }

    /// Check whether a letter is in the set, case-insensitive
    #[inline]
    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        Self::bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    /// Every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = char> {
        (b'A'..=b'Z')
            .filter(move |&b| self.0 & (1 << (b - b'A')) != 0)
            .map(char::from)
    }

    fn bit(letter: char) -> Option<u32> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| 1 << (upper as u32 - u32::from(b'A')))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
