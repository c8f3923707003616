//! Aggregate puzzle statistics
//!
//! Every statistic is an independent pure function of the puzzle, so computing them
//! twice on the same puzzle always yields identical results.

use super::compound::CompoundRule;
use super::pangram::pangrams;
use super::tally::{letter_table, word_count_by_first_letter, word_count_by_prefix};
use crate::core::{Alphabet, Puzzle};
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Prefix lengths tabulated when none are configured
pub const DEFAULT_PREFIX_LENGTHS: RangeInclusive<usize> = 2..=6;

/// Full statistical decomposition of a puzzle's word list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleStats {
    pub total_words: usize,
    pub total_pangrams: usize,
    pub total_compound_words: usize,
    pub pangrams: Vec<String>,
    pub compound_words: Vec<String>,
    pub word_count_by_first_letter: BTreeMap<char, usize>,
    /// Prefix tallies keyed by prefix length
    pub word_count_by_prefix: BTreeMap<usize, BTreeMap<String, usize>>,
}

impl PuzzleStats {
    /// Compute all statistics for a puzzle
    ///
    /// # Parameters
    /// - `puzzle`: The puzzle to classify
    /// - `rule`: Which definition of compound word to apply
    /// - `prefix_lengths`: Prefix lengths to tabulate (2..=6 in the usual report)
    ///
    /// # Examples
    /// ```
    /// use bee_helper::classifier::{PuzzleStats, SeparatorRule};
    /// use bee_helper::core::{Alphabet, Puzzle, PuzzleDate};
    ///
    /// let alphabet = Alphabet::new("AEILNOT", 'E').unwrap();
    /// let puzzle = Puzzle::new(
    ///     PuzzleDate::today(),
    ///     alphabet,
    ///     ["ALIEN", "ALINE", "INLET", "NAIL", "TONE"],
    /// );
    ///
    /// let stats = PuzzleStats::compute(&puzzle, &SeparatorRule, 2..=2);
    /// assert_eq!(stats.total_words, 5);
    /// assert_eq!(stats.total_pangrams, 0);
    /// assert_eq!(stats.word_count_by_first_letter[&'A'], 2);
    /// assert_eq!(stats.prefix_counts(2).unwrap()["AL"], 2);
    /// ```
    pub fn compute<R, L>(puzzle: &Puzzle, rule: &R, prefix_lengths: L) -> Self
    where
        R: CompoundRule + ?Sized,
        L: IntoIterator<Item = usize>,
    {
        let words = puzzle.words();

        let pangrams: Vec<String> = pangrams(words, puzzle.alphabet())
            .into_iter()
            .map(str::to_string)
            .collect();
        let compound_words: Vec<String> = rule
            .select(words)
            .into_iter()
            .map(str::to_string)
            .collect();

        let word_count_by_prefix = prefix_lengths
            .into_iter()
            .map(|n| (n, word_count_by_prefix(words, n)))
            .collect();

        Self {
            total_words: words.len(),
            total_pangrams: pangrams.len(),
            total_compound_words: compound_words.len(),
            pangrams,
            compound_words,
            word_count_by_first_letter: word_count_by_first_letter(words),
            word_count_by_prefix,
        }
    }

    /// First-letter counts for all seven letters (zeros included), in alphabet order
    #[must_use]
    pub fn letter_table(&self, alphabet: &Alphabet) -> Vec<(char, usize)> {
        letter_table(&self.word_count_by_first_letter, alphabet)
    }

    /// Prefix tally for one prefix length, if it was computed
    #[must_use]
    pub fn prefix_counts(&self, n: usize) -> Option<&BTreeMap<String, usize>> {
        self.word_count_by_prefix.get(&n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{CompoundRuleType, SeparatorRule, SplitRule};
    use crate::core::PuzzleDate;

    fn puzzle(letters: &str, center: char, words: &[&str]) -> Puzzle {
        let date = PuzzleDate::new(2025, 6, 1).unwrap();
        Puzzle::new(date, Alphabet::new(letters, center).unwrap(), words)
    }

    #[test]
    fn scenario_alien_puzzle() {
        let puzzle = puzzle("AEILNOT", 'E', &["ALIEN", "ALINE", "INLET", "NAIL", "TONE"]);
        let stats = PuzzleStats::compute(&puzzle, &SeparatorRule, DEFAULT_PREFIX_LENGTHS);

        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.total_pangrams, 0);
        assert!(stats.pangrams.is_empty());
        assert_eq!(stats.total_compound_words, 0);

        let first: Vec<(char, usize)> = stats
            .word_count_by_first_letter
            .iter()
            .map(|(&letter, &count)| (letter, count))
            .collect();
        assert_eq!(first, vec![('A', 2), ('I', 1), ('N', 1), ('T', 1)]);

        let two: Vec<(&str, usize)> = stats
            .prefix_counts(2)
            .unwrap()
            .iter()
            .map(|(prefix, &count)| (prefix.as_str(), count))
            .collect();
        assert_eq!(two, vec![("AL", 2), ("IN", 1), ("NA", 1), ("TO", 1)]);
    }

    #[test]
    fn scenario_genealogy_pangram() {
        let puzzle = puzzle("AEGLNOY", 'E', &["GENEALOGY"]);
        let stats = PuzzleStats::compute(&puzzle, &SeparatorRule, DEFAULT_PREFIX_LENGTHS);

        assert_eq!(stats.total_pangrams, 1);
        assert_eq!(stats.pangrams, vec!["GENEALOGY"]);
    }

    #[test]
    fn scenario_empty_word_list() {
        let puzzle = puzzle("AEILNOT", 'E', &[]);
        let stats = PuzzleStats::compute(&puzzle, &SeparatorRule, DEFAULT_PREFIX_LENGTHS);

        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.total_pangrams, 0);
        assert_eq!(stats.total_compound_words, 0);
        assert!(stats.word_count_by_first_letter.is_empty());
        for n in DEFAULT_PREFIX_LENGTHS {
            assert!(stats.prefix_counts(n).unwrap().is_empty());
        }
        assert!(stats
            .letter_table(puzzle.alphabet())
            .iter()
            .all(|&(_, count)| count == 0));
    }

    #[test]
    fn computation_is_idempotent() {
        let puzzle = puzzle(
            "AEILNOT",
            'E',
            &["ALIEN", "ELATION", "TOENAIL", "TOE-NAIL", "INLET", "TONE"],
        );
        let rule = CompoundRuleType::default();
        let first = PuzzleStats::compute(&puzzle, &rule, DEFAULT_PREFIX_LENGTHS);
        let second = PuzzleStats::compute(&puzzle, &rule, DEFAULT_PREFIX_LENGTHS);
        assert_eq!(first, second);
    }

    #[test]
    fn totals_match_lists() {
        let puzzle = puzzle(
            "AEILNOT",
            'E',
            &["ALIEN", "ELATION", "TOENAIL", "TOE-NAIL", "INLET", "TONE"],
        );
        let stats = PuzzleStats::compute(&puzzle, &SeparatorRule, DEFAULT_PREFIX_LENGTHS);

        assert_eq!(stats.total_pangrams, stats.pangrams.len());
        assert_eq!(stats.pangrams, vec!["ELATION", "TOENAIL"]);
        assert_eq!(stats.total_compound_words, stats.compound_words.len());
        assert_eq!(stats.compound_words, vec!["TOE-NAIL"]);
        assert_eq!(
            stats.word_count_by_first_letter.values().sum::<usize>(),
            stats.total_words
        );
    }

    #[test]
    fn prefix_sums_match_eligible_words() {
        let puzzle = puzzle("AEILNOT", 'E', &["ALIEN", "ELATION", "INLET", "TONE", "NEAT"]);
        let stats = PuzzleStats::compute(&puzzle, &SeparatorRule, 1..=8);

        for (&n, counts) in &stats.word_count_by_prefix {
            let eligible = puzzle
                .words()
                .iter()
                .filter(|w| w.chars().count() >= n)
                .count();
            assert_eq!(counts.values().sum::<usize>(), eligible, "n = {n}");
        }
    }

    #[test]
    fn split_rule_changes_compounds_only() {
        let puzzle = puzzle("AEILNOT", 'E', &["TOIL", "TONE", "TOILTONE", "TOE-NAIL"]);
        let separator = PuzzleStats::compute(&puzzle, &SeparatorRule, 2..=2);
        let split = PuzzleStats::compute(&puzzle, &SplitRule::default(), 2..=2);

        assert_eq!(separator.compound_words, vec!["TOE-NAIL"]);
        assert_eq!(split.compound_words, vec!["TOILTONE"]);
        assert_eq!(separator.total_words, split.total_words);
        assert_eq!(separator.word_count_by_prefix, split.word_count_by_prefix);
    }

    #[test]
    fn letter_table_includes_zero_letters() {
        let puzzle = puzzle("AEILNOT", 'E', &["ALIEN", "ALINE", "INLET", "NAIL", "TONE"]);
        let stats = PuzzleStats::compute(&puzzle, &SeparatorRule, 2..=2);
        let table = stats.letter_table(puzzle.alphabet());

        assert_eq!(table.len(), 7);
        assert_eq!(table[1], ('E', 0));
        assert_eq!(table.iter().map(|&(_, c)| c).sum::<usize>(), 5);
    }

    #[test]
    fn missing_prefix_length_is_none() {
        let puzzle = puzzle("AEILNOT", 'E', &["ALIEN"]);
        let stats = PuzzleStats::compute(&puzzle, &SeparatorRule, 2..=3);
        assert!(stats.prefix_counts(2).is_some());
        assert!(stats.prefix_counts(6).is_none());
    }

    #[test]
    fn stats_serialize_camel_case() {
        let puzzle = puzzle("AEILNOT", 'E', &["ALIEN", "ALINE", "INLET", "NAIL", "TONE"]);
        let stats = PuzzleStats::compute(&puzzle, &SeparatorRule, 2..=2);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["totalWords"], 5);
        assert_eq!(json["totalPangrams"], 0);
        assert_eq!(json["totalCompoundWords"], 0);
        assert_eq!(json["wordCountByFirstLetter"]["A"], 2);
        assert_eq!(json["wordCountByPrefix"]["2"]["AL"], 2);
    }
}
