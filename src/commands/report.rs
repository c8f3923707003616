//! Puzzle report command
//!
//! Classifies a puzzle and pairs it with its record for display or export.

use super::settings::Settings;
use crate::classifier::PuzzleStats;
use crate::core::Puzzle;
use crate::source::{PuzzleRecord, PuzzleReport};
use tracing::debug;

/// Classify a puzzle using the configured compound rule and prefix lengths
#[must_use]
pub fn build_report(puzzle: &Puzzle, settings: &Settings) -> PuzzleReport {
    let stats = PuzzleStats::compute(
        puzzle,
        &settings.compound_rule,
        settings.prefix_lengths.clone(),
    );
    debug!(
        letters = %puzzle.alphabet(),
        words = stats.total_words,
        pangrams = stats.total_pangrams,
        compounds = stats.total_compound_words,
        rule = settings.compound_rule.name(),
        "classified puzzle"
    );

    PuzzleReport {
        record: PuzzleRecord::from_puzzle(puzzle),
        stats,
    }
}
