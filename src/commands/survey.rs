//! Survey command
//!
//! Classifies every alphabet that has a pangram in the dictionary, once for each of
//! its seven possible center letters, and ranks the resulting puzzles.

use crate::classifier::pangrams;
use crate::core::Alphabet;
use crate::dictionary::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Survey options
#[derive(Debug, Clone, Copy)]
pub struct SurveyConfig {
    /// Number of entries to keep
    pub top: usize,
    /// Minimum word count for a puzzle to be listed
    pub min_words: usize,
    pub show_progress: bool,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            top: 10,
            min_words: 0,
            show_progress: true,
        }
    }
}

/// One alphabet/center pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyEntry {
    pub letters: String,
    pub center: char,
    pub total_words: usize,
    pub total_pangrams: usize,
}

/// Result of a survey
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResult {
    /// Distinct pangram alphabets found
    pub alphabets: usize,
    /// Alphabet/center pairs classified
    pub puzzles: usize,
    /// Pairs with at least `min_words` words
    pub qualifying: usize,
    /// Best pairs, richest first
    pub entries: Vec<SurveyEntry>,
    #[serde(skip)]
    pub duration: Duration,
}

/// Run the survey over a dictionary
#[must_use]
pub fn run_survey(dictionary: &Dictionary, config: &SurveyConfig) -> SurveyResult {
    let start = Instant::now();

    let alphabets: Vec<Alphabet> = dictionary
        .pangram_sets()
        .into_iter()
        .flat_map(|set| set.letters().filter_map(move |c| Alphabet::from_set(set, c).ok()))
        .collect();
    let alphabet_count = alphabets.len() / crate::core::ALPHABET_SIZE;

    let pb = if config.show_progress {
        ProgressBar::new(alphabets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{alphabet_count} alphabets"));

    let mut entries: Vec<SurveyEntry> = alphabets
        .par_iter()
        .map(|alphabet| {
            let words = dictionary.generate(alphabet);
            let entry = SurveyEntry {
                letters: alphabet.to_string(),
                center: alphabet.center(),
                total_words: words.len(),
                total_pangrams: pangrams(&words, alphabet).len(),
            };
            pb.inc(1);
            entry
        })
        .collect();

    pb.finish_with_message("Complete!");

    let puzzles = entries.len();
    entries.retain(|entry| entry.total_words >= config.min_words);
    let qualifying = entries.len();

    entries.sort_by(|a, b| {
        b.total_words
            .cmp(&a.total_words)
            .then_with(|| a.letters.cmp(&b.letters))
            .then_with(|| a.center.cmp(&b.center))
    });
    entries.truncate(config.top);

    let duration = start.elapsed();
    debug!(
        alphabets = alphabet_count,
        puzzles,
        qualifying,
        elapsed_ms = duration.as_millis(),
        "survey complete"
    );

    SurveyResult {
        alphabets: alphabet_count,
        puzzles,
        qualifying,
        entries,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(top: usize, min_words: usize) -> SurveyConfig {
        SurveyConfig {
            top,
            min_words,
            show_progress: false,
        }
    }

    #[test]
    fn survey_bundled_dictionary() {
        let result = run_survey(Dictionary::bundled(), &quiet(3, 0));

        assert_eq!(result.alphabets, 6);
        assert_eq!(result.puzzles, 42);
        assert_eq!(result.qualifying, 42);
        assert_eq!(result.entries.len(), 3);

        let best = &result.entries[0];
        assert_eq!(best.letters, "AEILNOT");
        assert_eq!(best.center, 'N');
        assert_eq!(best.total_words, 72);
        assert_eq!(best.total_pangrams, 2);
    }

    #[test]
    fn survey_orders_by_words_then_letters() {
        let result = run_survey(Dictionary::bundled(), &quiet(7, 0));
        let ranked: Vec<(&str, char, usize)> = result
            .entries
            .iter()
            .map(|e| (e.letters.as_str(), e.center, e.total_words))
            .collect();

        assert_eq!(
            ranked,
            vec![
                ("AEILNOT", 'N', 72),
                ("AEILNOT", 'E', 70),
                ("AEILNOT", 'L', 68),
                ("AEILNOT", 'T', 65),
                ("AEGLNOY", 'E', 55),
                ("AEGINRT", 'E', 52),
                ("AEILNOT", 'A', 52),
            ]
        );
        assert_eq!(result.entries[5].total_pangrams, 4);
    }

    #[test]
    fn survey_min_words_filters() {
        let result = run_survey(Dictionary::bundled(), &quiet(10, 60));
        assert_eq!(result.puzzles, 42);
        assert_eq!(result.qualifying, 4);
        assert_eq!(result.entries.len(), 4);
        assert!(result.entries.iter().all(|e| e.total_words >= 60));
    }

    #[test]
    fn survey_entries_always_have_pangrams() {
        let result = run_survey(Dictionary::bundled(), &quiet(usize::MAX, 0));
        assert_eq!(result.entries.len(), 42);
        assert!(result.entries.iter().all(|e| e.total_pangrams > 0));
    }

    #[test]
    fn survey_empty_dictionary() {
        let result = run_survey(&Dictionary::default(), &quiet(10, 0));
        assert_eq!(result.alphabets, 0);
        assert_eq!(result.puzzles, 0);
        assert!(result.entries.is_empty());
    }
}
