//! Bee Helper - CLI
//!
//! Spelling Bee companion: loads or derives a puzzle, classifies its word list and
//! prints pangrams, compound words and per-letter and per-prefix tallies.

use anyhow::Result;
use bee_helper::{
    classifier::CompoundRuleType,
    commands::{
        DataSource, Settings, SurveyConfig, build_report, check_word, load_puzzle, run_survey,
    },
    core::Alphabet,
    dictionary::Dictionary,
    output::{print_check_result, print_json, print_report, print_survey_result},
    source::DEFAULT_ARCHIVE_DIR,
};
use clap::{Parser, Subcommand};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "bee_helper",
    about = "Spelling Bee helper: puzzle statistics, word generation and word checks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus file, one word per line (default: bundled corpus)
    #[arg(short = 'c', long, global = true)]
    corpus: Option<PathBuf>,

    /// Compound rule: separator (default, hyphen or space) or split (two puzzle words)
    #[arg(long, global = true, default_value = "separator")]
    compound: String,

    /// Emit JSON instead of the formatted report
    #[arg(long, global = true)]
    json: bool,

    /// Reveal word lists (pangrams, compound words, all words)
    #[arg(short = 's', long, global = true)]
    show_words: bool,

    /// Smallest prefix length to tabulate
    #[arg(long, global = true, default_value = "2")]
    prefix_min: usize,

    /// Largest prefix length to tabulate
    #[arg(long, global = true, default_value = "6")]
    prefix_max: usize,

    /// Fail instead of using the sample puzzle when a puzzle file cannot be loaded
    #[arg(long, global = true)]
    no_fallback: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Statistics for a puzzle record (default: the sample puzzle)
    Stats {
        /// JSON puzzle record; `-` reads stdin
        #[arg(short, long, conflicts_with_all = ["date", "yesterday"])]
        puzzle: Option<PathBuf>,

        /// Archived puzzle for a date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "yesterday")]
        date: Option<String>,

        /// Archived puzzle for yesterday
        #[arg(short, long)]
        yesterday: bool,

        /// Archive directory of <YYYY-MM-DD>.json records
        #[arg(short, long, default_value = DEFAULT_ARCHIVE_DIR)]
        archive: PathBuf,
    },

    /// Generate a puzzle from manually entered letters
    Generate {
        /// The seven puzzle letters
        letters: String,

        /// The center letter
        #[arg(short = 'C', long)]
        center: char,
    },

    /// The built-in offline puzzle, words derived from the dictionary
    Offline,

    /// Check whether a word is playable for a set of letters
    Check {
        /// Word to check
        word: String,

        /// The seven puzzle letters
        letters: String,

        /// The center letter
        #[arg(short = 'C', long)]
        center: char,
    },

    /// A random puzzle built around a pangram from the dictionary
    Random {
        /// Seed for a reproducible puzzle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Classify every pangram alphabet with each center and rank the results
    Survey {
        /// Number of puzzles to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Only list puzzles with at least this many words
        #[arg(short, long, default_value = "0")]
        min_words: usize,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the corpus named by `--corpus`, or borrow the bundled one
fn load_dictionary(corpus: Option<&Path>) -> Cow<'static, Dictionary> {
    match corpus {
        Some(path) => Cow::Owned(Dictionary::load_or_fallback(path)),
        None => Cow::Borrowed(Dictionary::bundled()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let settings = Settings {
        compound_rule: CompoundRuleType::from_name(&cli.compound),
        show_words: cli.show_words,
        fallback_to_sample: !cli.no_fallback,
        ..Settings::default()
    }
    .with_prefix_lengths(cli.prefix_min, cli.prefix_max)
    .map_err(|e| anyhow::anyhow!(e))?;

    let dictionary = load_dictionary(cli.corpus.as_deref());

    // Default to the sample puzzle report if no command given
    let command = cli.command.unwrap_or(Commands::Stats {
        puzzle: None,
        date: None,
        yesterday: false,
        archive: PathBuf::from(DEFAULT_ARCHIVE_DIR),
    });

    match command {
        Commands::Stats {
            puzzle,
            date,
            yesterday,
            archive,
        } => {
            let source = stats_source(puzzle, date.as_deref(), yesterday, archive)?;
            run_report_command(&source, &settings, &dictionary, cli.json)
        }
        Commands::Generate { letters, center } => {
            let source = DataSource::Manual(Alphabet::new(&letters, center)?);
            run_report_command(&source, &settings, &dictionary, cli.json)
        }
        Commands::Offline => {
            run_report_command(&DataSource::Offline, &settings, &dictionary, cli.json)
        }
        Commands::Random { seed } => {
            let source = DataSource::Random { seed };
            run_report_command(&source, &settings, &dictionary, cli.json)
        }
        Commands::Check {
            word,
            letters,
            center,
        } => run_check_command(&word, &letters, center, &dictionary, cli.json),
        Commands::Survey { top, min_words } => {
            run_survey_command(top, min_words, &dictionary, cli.json)
        }
    }
}

/// Pick the puzzle source for `stats`: archive by date, a record file, or the sample
fn stats_source(
    puzzle: Option<PathBuf>,
    date: Option<&str>,
    yesterday: bool,
    archive: PathBuf,
) -> Result<DataSource> {
    if yesterday {
        return Ok(DataSource::yesterday(archive));
    }
    if let Some(date) = date {
        return DataSource::archive(archive, date).map_err(|e| anyhow::anyhow!(e));
    }
    Ok(puzzle.map_or(DataSource::Sample, DataSource::Record))
}

fn run_report_command(
    source: &DataSource,
    settings: &Settings,
    dictionary: &Dictionary,
    json: bool,
) -> Result<()> {
    let puzzle = load_puzzle(source, settings, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    let report = build_report(&puzzle, settings);

    if json {
        print_json(&report)?;
    } else {
        print_report(&puzzle, &report.stats, settings);
    }
    Ok(())
}

fn run_check_command(
    word: &str,
    letters: &str,
    center: char,
    dictionary: &Dictionary,
    json: bool,
) -> Result<()> {
    let alphabet = Alphabet::new(letters, center)?;
    let check = check_word(word, &alphabet, dictionary);

    if json {
        print_json(&check)?;
    } else {
        print_check_result(&check, &alphabet);
    }
    Ok(())
}

fn run_survey_command(
    top: usize,
    min_words: usize,
    dictionary: &Dictionary,
    json: bool,
) -> Result<()> {
    let config = SurveyConfig {
        top,
        min_words,
        show_progress: !json,
    };
    let result = run_survey(dictionary, &config);

    if json {
        print_json(&result)?;
    } else {
        print_survey_result(&result);
    }
    Ok(())
}
