//! Built-in puzzles for when no puzzle data is available

use crate::core::{Alphabet, Puzzle, PuzzleDate};
use crate::dictionary::Dictionary;

/// Letters of the sample puzzle
pub const SAMPLE_LETTERS: &str = "AEGLNOY";

/// Word list of the sample puzzle
pub const SAMPLE_WORDS: &[&str] = &[
    "AEON", "AGELONG", "ALGAE", "ALLEGE", "ALLELE", "ALLEY", "ALOE", "ALONE", "ANGEL", "ANGLE",
    "ANNEAL", "ANYONE", "EAGLE", "EELY", "EGGNOG", "EGGY", "ELAN", "ELEGY", "ENGAGE", "GAGE",
    "GAGGLE", "GALE", "GALLEON", "GALLEY", "GELEE", "GENE", "GEOLOGY", "GLEAN", "GLEE", "GLEN",
    "GOGGLE", "GONE", "GOOEY", "GOOGLE", "LANE", "LEAN", "LEANLY", "LEGAL", "LEGALLY", "LEGGY",
    "LOGE", "LONE", "LONELY", "NENE", "NEON", "NOEL", "NONE", "OENOLOGY", "OGEE", "OGLE", "OLEO",
    "YELL", "GENEALOGY",
];

/// Letters of the dictionary-derived offline puzzle
pub const OFFLINE_LETTERS: &str = "AEILNOT";

/// Center letter shared by both built-in puzzles
pub const BUILTIN_CENTER: char = 'E';

/// Sample puzzle with a fixed word list, dated today
///
/// # Panics
/// Will not panic - the built-in letters are seven distinct letters including the center.
#[must_use]
pub fn sample_puzzle() -> Puzzle {
    let alphabet =
        Alphabet::new(SAMPLE_LETTERS, BUILTIN_CENTER).expect("sample letters are valid");
    Puzzle::new(PuzzleDate::today(), alphabet, SAMPLE_WORDS).with_source("sample")
}

/// Offline puzzle whose words are generated from `dictionary`
///
/// # Panics
/// Will not panic - the built-in letters are seven distinct letters including the center.
#[must_use]
pub fn offline_puzzle(dictionary: &Dictionary) -> Puzzle {
    let alphabet =
        Alphabet::new(OFFLINE_LETTERS, BUILTIN_CENTER).expect("offline letters are valid");
    dictionary.puzzle(alphabet, "offline")
}
