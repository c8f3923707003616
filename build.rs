//! Build script to generate the embedded corpus
//!
//! Reads `data/corpus.txt` (one word per line, `#` comments) and writes a const array
//! of uppercase words. Malformed entries fail the build with their line number; words
//! with more than seven distinct letters are dropped since no puzzle can spell them.

use std::collections::BTreeSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const CORPUS_PATH: &str = "data/corpus.txt";

/// Most distinct letters a playable word can have
const MAX_DISTINCT_LETTERS: usize = 7;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let content = fs::read_to_string(CORPUS_PATH)
        .unwrap_or_else(|e| panic!("Failed to read {CORPUS_PATH}: {e}"));

    let words = parse_corpus(&content);
    let source = render_const("CORPUS", "Bundled Spelling Bee candidate corpus", &words);

    let output_path = Path::new(&out_dir).join("corpus.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={CORPUS_PATH}");
}

/// Uppercased words, blank lines, comments and unspellable words skipped
fn parse_corpus(content: &str) -> Vec<String> {
    let mut words = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        assert!(
            word.chars().all(|c| c.is_ascii_alphabetic()),
            "{CORPUS_PATH}:{}: {word:?} is not a plain A-Z word",
            index + 1
        );
        let word = word.to_ascii_uppercase();
        if word.chars().collect::<BTreeSet<_>>().len() > MAX_DISTINCT_LETTERS {
            continue;
        }
        words.push(word);
    }
    words
}

fn render_const(name: &str, doc: &str, words: &[String]) -> String {
    let count = words.len();
    let mut out = String::new();

    writeln!(out, "// Generated from {CORPUS_PATH}, do not edit").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// {doc} ({count} words)").unwrap();
    writeln!(out, "pub const {name}: &[&str] = &[").unwrap();
    for word in words {
        writeln!(out, "    {word:?},").unwrap();
    }
    writeln!(out, "];").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Number of words in {name}").unwrap();
    writeln!(out, "pub const {name}_COUNT: usize = {count};").unwrap();
    out
}
