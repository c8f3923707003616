//! Puzzle classification
//!
//! Pure functions deriving every statistic from `(alphabet, words)`. Nothing here
//! holds state, so results may be computed on any thread and memoized freely.

mod compound;
mod pangram;
mod stats;
mod tally;

pub use compound::{
    CompoundRule, CompoundRuleType, DEFAULT_MIN_PART, SeparatorRule, SplitRule, is_compound,
};
pub use pangram::{is_pangram, pangrams};
pub use stats::{DEFAULT_PREFIX_LENGTHS, PuzzleStats};
pub use tally::{letter_table, word_count_by_first_letter, word_count_by_prefix};
