//! Bee Helper
//!
//! A Spelling Bee companion: derives a puzzle's word list from a dictionary and
//! classifies it into pangrams, compound words and per-letter and per-prefix tallies.
//!
//! # Quick Start
//!
//! ```rust
//! use bee_helper::classifier::{CompoundRuleType, PuzzleStats};
//! use bee_helper::core::Alphabet;
//! use bee_helper::dictionary::Dictionary;
//!
//! // Seven letters, center E
//! let alphabet = Alphabet::new("AEGLNOY", 'E').unwrap();
//!
//! // Words from the bundled corpus
//! let puzzle = Dictionary::bundled().puzzle(alphabet, "manual");
//!
//! let stats = PuzzleStats::compute(&puzzle, &CompoundRuleType::default(), 2..=6);
//! assert!(stats.pangrams.contains(&"GENEALOGY".to_string()));
//! println!("{} words, {} pangrams", stats.total_words, stats.total_pangrams);
//! ```

// Core domain types
pub mod core;

// Puzzle classification
pub mod classifier;

// Word corpus and candidate generation
pub mod dictionary;

// Puzzle records and built-in puzzles
pub mod source;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
