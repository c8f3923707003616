//! Display functions for command results

use super::formatters::{columns, create_progress_bar, format_letters, mark};
use crate::classifier::PuzzleStats;
use crate::commands::{Settings, SurveyResult, WordCheck};
use crate::core::{Alphabet, Puzzle};
use colored::Colorize;
use serde::Serialize;

const BAR_WIDTH: usize = 30;
const WORD_COLUMNS: usize = 6;
const PREFIX_COLUMNS: usize = 8;

/// Print any serializable result as pretty JSON
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the full statistics report for a puzzle
pub fn print_report(puzzle: &Puzzle, stats: &PuzzleStats, settings: &Settings) {
    let alphabet = puzzle.alphabet();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "SPELLING BEE".bright_cyan().bold(),
        puzzle.date().to_string().bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Letters:   {}", format_letters(alphabet));
    if let Some(source) = puzzle.source() {
        println!("   Source:    {}", source.bright_black());
    }

    println!("\n📊 {}", "Totals:".bright_cyan().bold());
    println!(
        "   Words:           {}",
        stats.total_words.to_string().bright_yellow().bold()
    );
    println!(
        "   Pangrams:        {}",
        stats.total_pangrams.to_string().green().bold()
    );
    println!(
        "   Compound words:  {} ({})",
        stats.total_compound_words,
        settings.compound_rule.name().bright_black()
    );

    print_letter_table(alphabet, stats);
    print_prefix_tables(stats);

    if settings.show_words {
        print_word_lists(puzzle, stats);
    }
}

fn print_letter_table(alphabet: &Alphabet, stats: &PuzzleStats) {
    let table = stats.letter_table(alphabet);
    let max = table.iter().map(|&(_, count)| count).max().unwrap_or(0);

    println!("\n🔤 {}", "Words by first letter:".bright_cyan().bold());
    for (letter, count) in table {
        let label = if letter == alphabet.center() {
            letter.to_string().bright_yellow().bold()
        } else {
            letter.to_string().normal()
        };
        println!(
            "   {label}: {} {count:3}",
            create_progress_bar(count, max, BAR_WIDTH).green()
        );
    }
}

fn print_prefix_tables(stats: &PuzzleStats) {
    for (n, counts) in &stats.word_count_by_prefix {
        println!(
            "\n🔎 {}",
            format!("Words by {n}-letter prefix:").bright_cyan().bold()
        );
        if counts.is_empty() {
            println!("   {}", "(none)".bright_black());
            continue;
        }

        let cells: Vec<String> = counts
            .iter()
            .map(|(prefix, count)| format!("{prefix} {count}"))
            .collect();
        for row in columns(&cells, PREFIX_COLUMNS) {
            println!("   {row}");
        }
    }
}

fn print_word_lists(puzzle: &Puzzle, stats: &PuzzleStats) {
    println!("\n⭐ {}", "Pangrams:".bright_cyan().bold());
    if stats.pangrams.is_empty() {
        println!("   {}", "(none)".bright_black());
    }
    for pangram in &stats.pangrams {
        println!("   {}", pangram.green().bold());
    }

    if !stats.compound_words.is_empty() {
        println!("\n🔗 {}", "Compound words:".bright_cyan().bold());
        for word in &stats.compound_words {
            println!("   {word}");
        }
    }

    println!("\n📖 {}", "All words:".bright_cyan().bold());
    for row in columns(puzzle.words(), WORD_COLUMNS) {
        println!("   {row}");
    }
}

/// Print the result of a word check
pub fn print_check_result(check: &WordCheck, alphabet: &Alphabet) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking: {}  against  {}",
        check.word.bright_yellow().bold(),
        format_letters(alphabet)
    );
    println!("{}", "─".repeat(60).cyan());

    println!("   {} In dictionary", mark(check.in_dictionary));
    println!("   {} At least 4 letters", mark(check.long_enough));
    println!("   {} Only puzzle letters", mark(check.uses_only_letters));
    println!(
        "   {} Contains center letter {}",
        mark(check.has_center),
        alphabet.center()
    );

    println!();
    if check.playable {
        let verdict = if check.pangram {
            "✅ Playable pangram!"
        } else {
            "✅ Playable"
        };
        println!("{}", verdict.green().bold());
    } else if check.valid {
        println!("{}", "⚠️  Valid letters but not in the dictionary".yellow().bold());
    } else {
        println!("{}", "❌ Not playable".red().bold());
    }
    if check.compound {
        println!("   {}", "Compound word".bright_black());
    }
}

/// Print the result of a survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Pangram alphabets:  {}", result.alphabets);
    println!("   Puzzles classified: {}", result.puzzles);
    println!("   Qualifying:         {}", result.qualifying);
    println!("   Time taken:         {:.2}s", result.duration.as_secs_f64());

    if result.entries.is_empty() {
        println!("\n   {}", "No puzzles found".bright_black());
        return;
    }

    let max = result.entries.first().map_or(0, |e| e.total_words);
    println!("\n🏆 {}", "Richest puzzles:".bright_cyan().bold());
    for (rank, entry) in result.entries.iter().enumerate() {
        println!(
            "   {:2}. {} / {}  {} {:4} words, {} pangram(s)",
            rank + 1,
            entry.letters,
            entry.center.to_string().bright_yellow().bold(),
            create_progress_bar(entry.total_words, max, 20).green(),
            entry.total_words,
            entry.total_pangrams
        );
    }
}
