//! Shared helpers for driving the `flashcards` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub fn flashcards() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("flashcards").unwrap()
}

/// Render `(term, definition)` pairs as card records.
pub fn records(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(term, definition)| {
            serde_json::json!({ "card": term, "definition": definition }).to_string() + "\n"
        })
        .collect()
}

/// Write a card file into `dir` and return its path.
pub fn card_file(dir: &TempDir, name: &str, pairs: &[(&str, &str)]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, records(pairs)).unwrap();
    path
}

/// Join dialogue replies into stdin content.
pub fn script(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

pub fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
