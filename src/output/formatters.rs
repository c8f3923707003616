//! Formatting utilities for terminal output

use crate::core::Alphabet;
use colored::Colorize;

/// Create a bar of `width` cells filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width) / max
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the alphabet with the center letter highlighted and bracketed
#[must_use]
pub fn format_letters(alphabet: &Alphabet) -> String {
    alphabet
        .letters()
        .iter()
        .map(|&letter| {
            if letter == alphabet.center() {
                format!("[{letter}]").bright_yellow().bold().to_string()
            } else {
                letter.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay out items in rows of `columns`, each cell padded to the widest item
#[must_use]
pub fn columns<S: AsRef<str>>(items: &[S], columns: usize) -> Vec<String> {
    let width = items
        .iter()
        .map(|item| item.as_ref().chars().count())
        .max()
        .unwrap_or(0);

    items
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|item| format!("{:<width$}", item.as_ref()))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Check or cross mark
#[must_use]
pub fn mark(ok: bool) -> String {
    if ok {
        "✔".green().to_string()
    } else {
        "✘".red().to_string()
    }
}
