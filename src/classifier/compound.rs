//! Compound word detection
//!
//! Two definitions of "compound" exist for puzzle word lists:
//! - [`SeparatorRule`] (default): the word contains a hyphen or a space.
//! - [`SplitRule`]: the word splits into two halves that are both words of the
//!   same puzzle, each at least `min_part` characters long.

use rustc_hash::FxHashSet;

/// Minimum half length used by the split rule unless configured otherwise
pub const DEFAULT_MIN_PART: usize = 3;

/// A rule for selecting compound words from a puzzle word list
pub trait CompoundRule {
    /// Select the compound words, in list order
    fn select<'a>(&self, words: &'a [String]) -> Vec<&'a str>;
}

/// Check if a word contains a hyphen or space separator
///
/// # Examples
/// ```
/// use bee_helper::classifier::is_compound;
///
/// assert!(is_compound("ALL-IN"));
/// assert!(is_compound("ICE CREAM"));
/// assert!(!is_compound("TOENAIL"));
/// ```
#[must_use]
pub fn is_compound(word: &str) -> bool {
    word.contains(['-', ' '])
}

/// Hyphen/space rule
#[derive(Debug, Clone, Copy, Default)]
pub struct SeparatorRule;

impl CompoundRule for SeparatorRule {
    fn select<'a>(&self, words: &'a [String]) -> Vec<&'a str> {
        words
            .iter()
            .map(String::as_str)
            .filter(|word| is_compound(word))
            .collect()
    }
}

/// Split-into-two-puzzle-words rule
#[derive(Debug, Clone, Copy)]
pub struct SplitRule {
    min_part: usize,
}

impl Default for SplitRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PART)
    }
}

impl SplitRule {
    /// Create a split rule; a `min_part` of zero is treated as one
    #[must_use]
    pub fn new(min_part: usize) -> Self {
        Self {
            min_part: min_part.max(1),
        }
    }

    #[must_use]
    pub const fn min_part(&self) -> usize {
        self.min_part
    }

    /// Check every split point that leaves both halves at least `min_part` long
    fn splits(&self, word: &str, vocabulary: &FxHashSet<&str>) -> bool {
        let boundaries: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
        let len = boundaries.len();
        if len < 2 * self.min_part {
            return false;
        }

        (self.min_part..=len - self.min_part).any(|k| {
            let (head, tail) = word.split_at(boundaries[k]);
            vocabulary.contains(head) && vocabulary.contains(tail)
        })
    }
}

impl CompoundRule for SplitRule {
    fn select<'a>(&self, words: &'a [String]) -> Vec<&'a str> {
        let vocabulary: FxHashSet<&str> = words.iter().map(String::as_str).collect();

        words
            .iter()
            .map(String::as_str)
            .filter(|word| self.splits(word, &vocabulary))
            .collect()
    }
}

/// Enum wrapper for the compound rules
///
/// Allows runtime selection of the rule while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum CompoundRuleType {
    /// Hyphen or space (default)
    Separator(SeparatorRule),
    /// Two puzzle words joined together
    Split(SplitRule),
}

impl Default for CompoundRuleType {
    fn default() -> Self {
        Self::Separator(SeparatorRule)
    }
}

impl CompoundRule for CompoundRuleType {
    fn select<'a>(&self, words: &'a [String]) -> Vec<&'a str> {
        match self {
            Self::Separator(rule) => rule.select(words),
            Self::Split(rule) => rule.select(words),
        }
    }
}

impl CompoundRuleType {
    /// Create a rule from its name
    ///
    /// Supported names: "separator", "hyphen", "split".
    /// Defaults to the separator rule if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "split" => Self::Split(SplitRule::default()),
            _ => Self::Separator(SeparatorRule),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Separator(_) => "separator",
            Self::Split(_) => "split",
        }
    }
}
