//! Core domain types for Spelling Bee puzzles
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are immutable values with validated construction.

mod alphabet;
mod puzzle;
mod word;

pub use alphabet::{ALPHABET_SIZE, Alphabet, AlphabetError};
pub use puzzle::{Puzzle, PuzzleDate, PuzzleError};
pub use word::{LetterSet, MIN_WORD_LEN, char_len, normalize};
