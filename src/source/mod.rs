//! Puzzle sources
//!
//! Turns external puzzle data into canonical [`Puzzle`](crate::core::Puzzle) values and
//! provides the built-in puzzles used when no data is available.

mod archive;
mod record;
mod samples;

pub use archive::{DEFAULT_ARCHIVE_DIR, archive_path, read_archive};
pub use record::{PuzzleRecord, PuzzleReport, SourceError};
pub use samples::{
    BUILTIN_CENTER, OFFLINE_LETTERS, SAMPLE_LETTERS, SAMPLE_WORDS, offline_puzzle, sample_puzzle,
};
