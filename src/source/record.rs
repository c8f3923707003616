//! Puzzle records as exchanged with the puzzle-data service
//!
//! Accepts every key convention seen in the wild:
//! - `centerLetter` or `center_letter`
//! - `letters` as a list of one-letter strings or as one string
//! - `outerLetters` + `centerLetter` with `answers` instead of `letters` + `words`
//!
//! A record carrying both spellings of the same key is rejected as a duplicate field.

use crate::classifier::PuzzleStats;
use crate::core::{Alphabet, Puzzle, PuzzleDate, PuzzleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Read};
use tracing::warn;

/// Error type for reading puzzle records
#[derive(Debug)]
pub enum SourceError {
    Io(io::Error),
    Json(serde_json::Error),
    Puzzle(PuzzleError),
    /// An archived record dated differently from the date it was looked up by
    DateMismatch { expected: PuzzleDate, found: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read puzzle: {e}"),
            Self::Json(e) => write!(f, "Malformed puzzle record: {e}"),
            Self::Puzzle(e) => write!(f, "{e}"),
            Self::DateMismatch { expected, found } => {
                write!(f, "Archived puzzle is dated {found}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Puzzle(e) => Some(e),
            Self::DateMismatch { .. } => None,
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<PuzzleError> for SourceError {
    fn from(e: PuzzleError) -> Self {
        Self::Puzzle(e)
    }
}

/// Letters given either as `["A", "E", ...]` or as `"AE..."`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum LettersField {
    List(Vec<String>),
    Joined(String),
}

impl Default for LettersField {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl LettersField {
    fn into_list(self) -> Vec<String> {
        match self {
            Self::List(list) => list,
            Self::Joined(joined) => joined
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(String::from)
                .collect(),
        }
    }
}

/// Raw puzzle record as deserialized from JSON
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    letters: LettersField,
    #[serde(default, alias = "outer_letters")]
    outer_letters: LettersField,
    #[serde(alias = "center_letter")]
    center_letter: String,
    #[serde(default, alias = "answers")]
    words: Vec<String>,
    #[serde(default)]
    source: Option<String>,
}

/// Canonical puzzle record
///
/// Serializes with camelCase keys; deserializes from any supported convention.
/// A `stats` block on input is ignored, statistics are always recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawRecord")]
pub struct PuzzleRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub letters: Vec<String>,
    pub center_letter: String,
    pub words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl From<RawRecord> for PuzzleRecord {
    fn from(raw: RawRecord) -> Self {
        let mut letters = raw.letters.into_list();
        if letters.is_empty() {
            // Outer letters only: the center completes the alphabet
            let outer = raw.outer_letters.into_list();
            if !outer.is_empty() {
                letters.push(raw.center_letter.clone());
                letters.extend(outer);
            }
        }

        Self {
            date: raw.date,
            letters,
            center_letter: raw.center_letter,
            words: raw.words,
            source: raw.source,
        }
    }
}

impl PuzzleRecord {
    /// Parse a record from JSON text
    ///
    /// # Errors
    /// Returns `SourceError::Json` for malformed JSON or missing required fields.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a record from any reader (file, stdin)
    ///
    /// # Errors
    /// Returns `SourceError::Io` on read failure, `SourceError::Json` on bad content.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, SourceError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Describe an existing puzzle as a record
    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        Self {
            date: Some(puzzle.date().to_string()),
            letters: puzzle
                .alphabet()
                .letters()
                .iter()
                .map(char::to_string)
                .collect(),
            center_letter: puzzle.alphabet().center().to_string(),
            words: puzzle.words().to_vec(),
            source: puzzle.source().map(str::to_string),
        }
    }

    /// Validate the record and build the canonical puzzle
    ///
    /// A missing or unparsable date falls back to today's date.
    ///
    /// # Errors
    /// Returns `SourceError::Puzzle` if the letters or center letter are malformed.
    pub fn into_puzzle(self) -> Result<Puzzle, SourceError> {
        let alphabet = Alphabet::from_letters(&self.letters, &self.center_letter)
            .map_err(PuzzleError::from)?;

        let date = match self.date.as_deref().map(str::parse::<PuzzleDate>) {
            Some(Ok(date)) => date,
            Some(Err(e)) => {
                warn!(error = %e, "using today's date");
                PuzzleDate::today()
            }
            None => PuzzleDate::today(),
        };

        let puzzle = Puzzle::new(date, alphabet, self.words);
        Ok(match self.source {
            Some(source) => puzzle.with_source(source),
            None => puzzle,
        })
    }
}

/// A puzzle record together with its computed statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleReport {
    #[serde(flatten)]
    pub record: PuzzleRecord,
    pub stats: PuzzleStats,
}
