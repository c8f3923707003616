//! Corpus loading utilities
//!
//! Reads word lists from files: one word per line, blank lines and `#` comments skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Load raw corpus lines from a file
///
/// Words are trimmed but otherwise returned as written; normalization happens when
/// the dictionary is built.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bee_helper::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/corpus.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Split corpus text into words
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
