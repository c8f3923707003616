//! Puzzle alphabet: seven distinct letters with one center letter

use super::word::LetterSet;
use std::fmt;

/// Number of letters in a puzzle
pub const ALPHABET_SIZE: usize = 7;

/// Seven distinct uppercase letters, one of which is the mandatory center letter
///
/// Letters keep the order they were given in; the center is always one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    letters: [char; ALPHABET_SIZE],
    center: char,
    set: LetterSet,
}

/// Error type for malformed alphabets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// Not exactly seven letters
    InvalidLength(usize),
    /// A character that is not an ASCII letter
    InvalidLetter(char),
    /// A list entry that is not a single character
    InvalidEntry(String),
    /// The same letter given twice
    DuplicateLetter(char),
    /// The center letter is not one of the seven letters
    CenterNotInAlphabet(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Puzzle must have exactly {ALPHABET_SIZE} letters, got {len}")
            }
            Self::InvalidLetter(ch) => write!(f, "'{ch}' is not a letter A-Z"),
            Self::InvalidEntry(entry) => {
                write!(f, "Expected a single letter, got {entry:?}")
            }
            Self::DuplicateLetter(ch) => write!(f, "Letter '{ch}' appears more than once"),
            Self::CenterNotInAlphabet(ch) => {
                write!(f, "Center letter '{ch}' is not one of the puzzle letters")
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

impl Alphabet {
    /// Create an alphabet from a string of seven letters and a center letter
    ///
    /// Letters are case-insensitive and normalized to uppercase. Surrounding
    /// whitespace is ignored.
    ///
    /// # Errors
    /// Returns `AlphabetError` if:
    /// - There are not exactly 7 letters
    /// - Any letter (or the center) is not an ASCII letter
    /// - A letter repeats
    /// - The center is not one of the letters
    ///
    /// # Examples
    /// ```
    /// use bee_helper::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("aeilnot", 'e').unwrap();
    /// assert_eq!(alphabet.center(), 'E');
    /// assert_eq!(alphabet.to_string(), "AEILNOT");
    ///
    /// assert!(Alphabet::new("AEILNO", 'E').is_err());
    /// assert!(Alphabet::new("AEILNOT", 'Z').is_err());
    /// ```
    pub fn new(letters: &str, center: char) -> Result<Self, AlphabetError> {
        let chars: Vec<char> = letters.trim().chars().collect();
        if chars.len() != ALPHABET_SIZE {
            return Err(AlphabetError::InvalidLength(chars.len()));
        }

        let mut normalized = [' '; ALPHABET_SIZE];
        let mut set = LetterSet::EMPTY;
        for (slot, &ch) in normalized.iter_mut().zip(&chars) {
            let upper = ch.to_ascii_uppercase();
            if !upper.is_ascii_uppercase() {
                return Err(AlphabetError::InvalidLetter(ch));
            }
            if set.contains(upper) {
                return Err(AlphabetError::DuplicateLetter(upper));
            }
            set.insert(upper);
            *slot = upper;
        }

        let center_upper = center.to_ascii_uppercase();
        if !center_upper.is_ascii_uppercase() {
            return Err(AlphabetError::InvalidLetter(center));
        }
        if !set.contains(center_upper) {
            return Err(AlphabetError::CenterNotInAlphabet(center_upper));
        }

        Ok(Self {
            letters: normalized,
            center: center_upper,
            set,
        })
    }

    /// Create an alphabet from a list of single-letter strings, as puzzle records carry them
    ///
    /// # Errors
    /// Returns `AlphabetError::InvalidEntry` if any entry (or the center) is not exactly
    /// one character, otherwise the same errors as [`Alphabet::new`].
    pub fn from_letters<S: AsRef<str>>(letters: &[S], center: &str) -> Result<Self, AlphabetError> {
        let mut joined = String::with_capacity(ALPHABET_SIZE);
        for entry in letters {
            joined.push(single_char(entry.as_ref())?);
        }
        Self::new(&joined, single_char(center)?)
    }

    /// Create an alphabet from a set of exactly seven letters (alphabetical order)
    ///
    /// # Errors
    /// Returns `AlphabetError` if the set does not hold 7 letters or lacks the center.
    pub fn from_set(set: LetterSet, center: char) -> Result<Self, AlphabetError> {
        Self::new(&set.to_string(), center)
    }

    /// The seven letters in their original order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; ALPHABET_SIZE] {
        &self.letters
    }

    /// The mandatory center letter
    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.center
    }

    /// The seven letters as a set
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.set
    }

    /// Check if a letter belongs to the alphabet, case-insensitive
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.set.contains(letter)
    }

    /// The six letters other than the center, in original order
    pub fn outer_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied().filter(|&ch| ch != self.center)
    }

    /// Same letters with a different center
    ///
    /// # Errors
    /// Returns `AlphabetError::CenterNotInAlphabet` if `center` is not one of the letters.
    pub fn with_center(&self, center: char) -> Result<Self, AlphabetError> {
        let upper = center.to_ascii_uppercase();
        if !self.set.contains(upper) {
            return Err(AlphabetError::CenterNotInAlphabet(upper));
        }
        Ok(Self {
            center: upper,
            ..*self
        })
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

fn single_char(entry: &str) -> Result<char, AlphabetError> {
    let mut chars = entry.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(AlphabetError::InvalidEntry(entry.to_string())),
    }
}
