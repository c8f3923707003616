//! Puzzle record and calendar date

use super::alphabet::{Alphabet, AlphabetError};
use super::word::normalize;
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Format of puzzle dates on the wire and on disk
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of a puzzle (`YYYY-MM-DD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleDate(NaiveDate);

/// Error type for puzzle construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The letters or center letter are malformed
    Alphabet(AlphabetError),
    /// A date that is not a valid `YYYY-MM-DD` calendar date
    InvalidDate(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphabet(e) => write!(f, "Invalid puzzle letters: {e}"),
            Self::InvalidDate(date) => write!(f, "Invalid date format {date:?}, expected YYYY-MM-DD"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Alphabet(e) => Some(e),
            Self::InvalidDate(_) => None,
        }
    }
}

impl From<AlphabetError> for PuzzleError {
    fn from(e: AlphabetError) -> Self {
        Self::Alphabet(e)
    }
}

impl PuzzleDate {
    /// Create a date from its calendar parts
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidDate` for an impossible date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, PuzzleError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| PuzzleError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Today's date in local time
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The day before today in local time
    #[must_use]
    pub fn yesterday() -> Self {
        let today = Self::today();
        today.previous_day().unwrap_or(today)
    }

    /// The preceding calendar day, `None` before the earliest representable date
    #[must_use]
    pub fn previous_day(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl FromStr for PuzzleDate {
    type Err = PuzzleError;

    /// Parse a zero-padded `YYYY-MM-DD` date
    ///
    /// The shape is checked first since `%Y` and `%m` also accept unpadded digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PuzzleError::InvalidDate(s.to_string());
        let text = s.trim();
        let padded = text.len() == 10
            && text.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !padded {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// A daily puzzle: alphabet, center letter and the list of valid words
///
/// Puzzles are immutable. Changing the letters or the word source means building a
/// new `Puzzle`; statistics are always recomputed from the word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    date: PuzzleDate,
    alphabet: Alphabet,
    words: Vec<String>,
    source: Option<String>,
}

impl Puzzle {
    /// Create a puzzle from an externally supplied word list
    ///
    /// Words are taken verbatim apart from normalization (trimmed, uppercased);
    /// blank entries are dropped.
    pub fn new<I, S>(date: PuzzleDate, alphabet: Alphabet, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            date,
            alphabet,
            words,
            source: None,
        }
    }

    /// Tag the puzzle with where it came from
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> PuzzleDate {
        self.date
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Optional origin tag ("offline", "manual", ...); ignored by the classifier
    #[inline]
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.words.len()
    }
}
