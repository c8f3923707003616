//! Date-keyed puzzle archive
//!
//! An archive is a directory of puzzle records named `<YYYY-MM-DD>.json`.

use super::record::{PuzzleRecord, SourceError};
use crate::core::{Puzzle, PuzzleDate};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Archive directory used when none is given
pub const DEFAULT_ARCHIVE_DIR: &str = "archive";

/// Path of the record for `date` inside `dir`
#[must_use]
pub fn archive_path(dir: &Path, date: PuzzleDate) -> PathBuf {
    dir.join(format!("{date}.json"))
}

/// Load the archived puzzle for `date`
///
/// A record without a date takes the requested one.
///
/// # Errors
/// Returns `SourceError::Io` if there is no record for the date, `SourceError::Json`
/// or `SourceError::Puzzle` for a malformed record, and `SourceError::DateMismatch`
/// if the record is dated differently from its file name.
pub fn read_archive(dir: &Path, date: PuzzleDate) -> Result<Puzzle, SourceError> {
    let mut record = PuzzleRecord::read_from(File::open(archive_path(dir, date))?)?;

    match record.date.as_deref() {
        None => record.date = Some(date.to_string()),
        Some(found) if found.parse::<PuzzleDate>().ok() != Some(date) => {
            return Err(SourceError::DateMismatch {
                expected: date,
                found: found.to_string(),
            });
        }
        Some(_) => {}
    }

    record.into_puzzle()
}
