//! Settings and puzzle source resolution
//!
//! The app-level toggles (which source to use, whether to reveal words, falling back
//! to the sample puzzle) live in an explicit `Settings` value. The classifier never
//! sees them.

use super::random::{random_puzzle, seeded_rng};
use crate::classifier::{CompoundRuleType, DEFAULT_PREFIX_LENGTHS};
use crate::core::{Alphabet, Puzzle, PuzzleDate};
use crate::dictionary::Dictionary;
use crate::source::{
    PuzzleRecord, SourceError, archive_path, offline_puzzle, read_archive, sample_puzzle,
};
use std::fs::File;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where a puzzle comes from
#[derive(Debug, Clone)]
pub enum DataSource {
    /// JSON puzzle record in a file; `-` reads stdin
    Record(PathBuf),
    /// Archived puzzle record for a date, `<dir>/<YYYY-MM-DD>.json`
    Archive { dir: PathBuf, date: PuzzleDate },
    /// Built-in sample puzzle
    Sample,
    /// Built-in letters, words generated from the dictionary
    Offline,
    /// Manually entered letters, words generated from the dictionary
    Manual(Alphabet),
    /// Random pangram-backed letters, words generated from the dictionary
    Random { seed: Option<u64> },
}

impl DataSource {
    /// Archive lookup for a `YYYY-MM-DD` date string
    ///
    /// # Errors
    ///
    /// Returns an error if the date is malformed or not a calendar date.
    pub fn archive(dir: impl Into<PathBuf>, date: &str) -> Result<Self, String> {
        let date = date.parse::<PuzzleDate>().map_err(|e| e.to_string())?;
        Ok(Self::Archive {
            dir: dir.into(),
            date,
        })
    }

    /// Archive lookup for yesterday's puzzle
    pub fn yesterday(dir: impl Into<PathBuf>) -> Self {
        Self::Archive {
            dir: dir.into(),
            date: PuzzleDate::yesterday(),
        }
    }
}

/// Report and source settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub compound_rule: CompoundRuleType,
    pub prefix_lengths: RangeInclusive<usize>,
    /// Reveal word lists (pangrams, compounds, all words) in reports
    pub show_words: bool,
    /// Use the sample puzzle when a puzzle record cannot be loaded
    pub fallback_to_sample: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            compound_rule: CompoundRuleType::default(),
            prefix_lengths: DEFAULT_PREFIX_LENGTHS,
            show_words: false,
            fallback_to_sample: true,
        }
    }
}

impl Settings {
    /// Set the inclusive range of prefix lengths to tabulate
    ///
    /// # Errors
    ///
    /// Returns an error if `min` is zero or greater than `max`.
    pub fn with_prefix_lengths(mut self, min: usize, max: usize) -> Result<Self, String> {
        if min == 0 {
            return Err("Prefix length must be at least 1".to_string());
        }
        if min > max {
            return Err(format!("Empty prefix length range {min}..={max}"));
        }
        self.prefix_lengths = min..=max;
        Ok(self)
    }
}

/// Resolve a data source into a puzzle
///
/// # Errors
///
/// Returns an error if a puzzle record (or archived record) cannot be read or is
/// malformed and `fallback_to_sample` is off, or if a random puzzle is requested
/// from a dictionary without pangrams.
pub fn load_puzzle(
    source: &DataSource,
    settings: &Settings,
    dictionary: &Dictionary,
) -> Result<Puzzle, String> {
    match source {
        DataSource::Record(path) => or_sample(read_record(path), settings, &path.display()),
        DataSource::Archive { dir, date } => or_sample(
            read_archive(dir, *date),
            settings,
            &archive_path(dir, *date).display(),
        ),
        DataSource::Sample => Ok(sample_puzzle()),
        DataSource::Offline => Ok(offline_puzzle(dictionary)),
        DataSource::Manual(alphabet) => Ok(dictionary.puzzle(*alphabet, "manual")),
        DataSource::Random { seed } => {
            let mut rng = seeded_rng(*seed);
            random_puzzle(dictionary, &mut rng)
                .ok_or_else(|| "Dictionary contains no pangrams to build a puzzle from".to_string())
        }
    }
}

/// Fall back to the sample puzzle on a failed load if the settings allow it
fn or_sample(
    loaded: Result<Puzzle, SourceError>,
    settings: &Settings,
    origin: &dyn std::fmt::Display,
) -> Result<Puzzle, String> {
    match loaded {
        Ok(puzzle) => {
            info!(%origin, words = puzzle.total_words(), "loaded puzzle record");
            Ok(puzzle)
        }
        Err(e) if settings.fallback_to_sample => {
            warn!(%origin, error = %e, "falling back to sample puzzle");
            Ok(sample_puzzle())
        }
        Err(e) => Err(format!("{origin}: {e}")),
    }
}

fn read_record(path: &Path) -> Result<Puzzle, SourceError> {
    let record = if path.as_os_str() == "-" {
        PuzzleRecord::read_from(io::stdin().lock())?
    } else {
        PuzzleRecord::read_from(File::open(path)?)?
    };
    record.into_puzzle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bee_helper_{name}_{}.json", std::process::id()))
    }

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.prefix_lengths, 2..=6);
        assert_eq!(settings.compound_rule.name(), "separator");
        assert!(!settings.show_words);
        assert!(settings.fallback_to_sample);
    }

    #[test]
    fn prefix_lengths_validated() {
        assert!(Settings::default().with_prefix_lengths(0, 3).is_err());
        assert!(Settings::default().with_prefix_lengths(4, 3).is_err());
        let settings = Settings::default().with_prefix_lengths(1, 1).unwrap();
        assert_eq!(settings.prefix_lengths, 1..=1);
    }

    #[test]
    fn load_record_file() {
        let path = temp_path("record");
        fs::write(
            &path,
            r#"{"date": "2025-06-01", "letters": "AEILNOT", "center_letter": "E", "words": ["TONE"]}"#,
        )
        .unwrap();

        let result = load_puzzle(
            &DataSource::Record(path.clone()),
            &Settings::default(),
            &Dictionary::fallback(),
        );
        fs::remove_file(&path).unwrap();

        let puzzle = result.unwrap();
        assert_eq!(puzzle.words(), &["TONE"]);
        assert_eq!(puzzle.date().to_string(), "2025-06-01");
    }

    #[test]
    fn missing_record_falls_back_to_sample() {
        let source = DataSource::Record(PathBuf::from("/nonexistent/bee_helper/puzzle.json"));
        let puzzle = load_puzzle(&source, &Settings::default(), &Dictionary::fallback()).unwrap();
        assert_eq!(puzzle.source(), Some("sample"));
    }

    #[test]
    fn missing_record_without_fallback_is_error() {
        let source = DataSource::Record(PathBuf::from("/nonexistent/bee_helper/puzzle.json"));
        let settings = Settings {
            fallback_to_sample: false,
            ..Settings::default()
        };
        assert!(load_puzzle(&source, &settings, &Dictionary::fallback()).is_err());
    }

    #[test]
    fn malformed_record_without_fallback_is_error() {
        let path = temp_path("malformed");
        fs::write(&path, r#"{"letters": "AEILNO", "centerLetter": "E"}"#).unwrap();

        let settings = Settings {
            fallback_to_sample: false,
            ..Settings::default()
        };
        let result = load_puzzle(
            &DataSource::Record(path.clone()),
            &settings,
            &Dictionary::fallback(),
        );
        fs::remove_file(&path).unwrap();

        let message = result.unwrap_err();
        assert!(message.contains("exactly 7 letters"), "{message}");
    }

    fn archive_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "bee_helper_settings_{name}_{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn archive_source_finds_dated_record() {
        let dir = archive_dir("hit");
        fs::write(
            dir.join("2025-06-01.json"),
            r#"{"date": "2025-06-01", "letters": "AEGLNOY", "centerLetter": "E", "words": ["GENEALOGY"]}"#,
        )
        .unwrap();

        let source = DataSource::archive(&dir, "2025-06-01").unwrap();
        let result = load_puzzle(&source, &Settings::default(), &Dictionary::fallback());
        fs::remove_dir_all(&dir).unwrap();

        let puzzle = result.unwrap();
        assert_eq!(puzzle.date().to_string(), "2025-06-01");
        assert_eq!(puzzle.words(), &["GENEALOGY"]);
    }

    #[test]
    fn archive_miss_falls_back_to_sample() {
        let dir = archive_dir("miss");
        let source = DataSource::archive(&dir, "1999-12-31").unwrap();
        let result = load_puzzle(&source, &Settings::default(), &Dictionary::fallback());
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(result.unwrap().source(), Some("sample"));
    }

    #[test]
    fn archive_miss_without_fallback_is_error() {
        let dir = archive_dir("miss_strict");
        let source = DataSource::archive(&dir, "1999-12-31").unwrap();
        let settings = Settings {
            fallback_to_sample: false,
            ..Settings::default()
        };
        let result = load_puzzle(&source, &settings, &Dictionary::fallback());
        fs::remove_dir_all(&dir).unwrap();

        let message = result.unwrap_err();
        assert!(message.contains("1999-12-31.json"), "{message}");
    }

    #[test]
    fn archive_rejects_bad_date() {
        for bad in ["2025-13-01", "2025-02-30", "06/01/2025", "yesterday"] {
            let message = DataSource::archive("archive", bad).unwrap_err();
            assert!(message.contains("Invalid date format"), "{bad}: {message}");
        }
    }

    #[test]
    fn yesterday_source_is_day_before_today() {
        let DataSource::Archive { dir, date } = DataSource::yesterday("archive") else {
            panic!("expected an archive source");
        };
        assert_eq!(dir, PathBuf::from("archive"));
        assert!(date < PuzzleDate::today());
    }

    #[test]
    fn manual_source_generates_words() {
        let alphabet = Alphabet::new("AEILNOT", 'E').unwrap();
        let puzzle = load_puzzle(
            &DataSource::Manual(alphabet),
            &Settings::default(),
            &Dictionary::fallback(),
        )
        .unwrap();
        assert_eq!(puzzle.source(), Some("manual"));
        assert_eq!(puzzle.total_words(), 24);
    }

    #[test]
    fn offline_and_sample_sources() {
        let dictionary = Dictionary::fallback();
        let settings = Settings::default();
        let offline = load_puzzle(&DataSource::Offline, &settings, &dictionary).unwrap();
        let sample = load_puzzle(&DataSource::Sample, &settings, &dictionary).unwrap();
        assert_eq!(offline.source(), Some("offline"));
        assert_eq!(sample.source(), Some("sample"));
    }

    #[test]
    fn random_source_needs_pangrams() {
        let settings = Settings::default();
        let source = DataSource::Random { seed: Some(1) };
        assert!(load_puzzle(&source, &settings, &Dictionary::default()).is_err());
        assert!(load_puzzle(&source, &settings, Dictionary::bundled()).is_ok());
    }
}
