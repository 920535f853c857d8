//! Command vocabulary and handlers for the interactive loop.

use crate::console::Terminal;
use crate::error::{CliError, Result};
use flashcard_core::{hardest, record, Card, CardSet, ErrorStatistics, QuizSession};
use std::io::ErrorKind;
use std::path::Path;

/// Actions the user can type at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Command {
    /// Prompt listing every action.
    pub const PROMPT: &'static str =
        "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Import => "import",
            Self::Export => "export",
            Self::Ask => "ask",
            Self::Exit => "exit",
            Self::Log => "log",
            Self::HardestCard => "hardest card",
            Self::ResetStats => "reset stats",
        }
    }

    /// Parse from the text typed at the prompt.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "import" => Some(Self::Import),
            "export" => Some(Self::Export),
            "ask" => Some(Self::Ask),
            "exit" => Some(Self::Exit),
            "log" => Some(Self::Log),
            "hardest card" => Some(Self::HardestCard),
            "reset stats" => Some(Self::ResetStats),
            _ => None,
        }
    }
}

/// Interactively create a card with a new term and a new definition.
///
/// Returns `None` if input ends before the card is complete.
pub fn add<T: Terminal + ?Sized>(cards: &mut CardSet, term: &mut T) -> Option<Card> {
    let mut name = term.next_line("The card:")?;
    while cards.contains_term(&name) {
        name = term.next_line(&format!("The term \"{}\" already exists. Try again:", name))?;
    }

    let mut definition = term.next_line("The definition of the card:")?;
    while cards.contains_definition(&definition) {
        definition = term.next_line(&format!(
            "The definition \"{}\" already exists. Try again:",
            definition
        ))?;
    }

    let card = Card::new(name, definition);
    cards.insert(card.clone());
    tracing::info!(term = %card.term, "card added");
    term.emit(&format!(
        "The pair (\"{}\":\"{}\") has been added.",
        card.term, card.definition
    ));
    term.emit("");
    Some(card)
}

pub fn remove<T: Terminal + ?Sized>(cards: &mut CardSet, term: &mut T) {
    let Some(name) = term.next_line("Which card?") else {
        return;
    };

    match cards.remove(&name) {
        Some(_) => {
            tracing::info!(term = %name, "card removed");
            term.emit("The card has been removed.");
        }
        None => term.emit(&format!("Can't remove \"{}\": there is no such card.", name)),
    }
    term.emit("");
}

/// Read cards from a record file and merge them into `cards`.
///
/// Nothing is merged unless every record parses.
pub fn import_file(cards: &mut CardSet, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let imported = record::parse(&content)?;
    let count = imported.len();
    cards.extend(imported);
    tracing::info!(path = %path.display(), count, "cards imported");
    Ok(count)
}

/// Write every card to a record file, replacing its contents.
pub fn export_file(cards: &CardSet, path: &Path) -> Result<usize> {
    let content = record::render(cards.iter())?;
    std::fs::write(path, content).map_err(|e| CliError::io(path, e))?;
    tracing::info!(path = %path.display(), count = cards.len(), "cards exported");
    Ok(cards.len())
}

/// Import from `path` and report the outcome to the user.
pub fn import_and_report<T: Terminal + ?Sized>(cards: &mut CardSet, path: &Path, term: &mut T) {
    match import_file(cards, path) {
        Ok(count) => term.emit(&format!("{} cards have been loaded.", count)),
        Err(CliError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            term.emit("File not found.")
        }
        Err(CliError::Record(err)) => {
            tracing::warn!(path = %path.display(), error = %err, "import rejected");
            term.emit(&format!("Import failed: {}.", err));
        }
        Err(err) => {
            tracing::warn!(error = %err, "import failed");
            term.emit("File not found.");
        }
    }
}

/// Export to `path` and report the outcome to the user.
pub fn export_and_report<T: Terminal + ?Sized>(cards: &CardSet, path: &Path, term: &mut T) {
    match export_file(cards, path) {
        Ok(count) => term.emit(&format!("{} cards have been saved.", count)),
        Err(err) => {
            tracing::warn!(error = %err, "export failed");
            term.emit("File not found.");
        }
    }
    term.emit("");
}

pub fn import<T: Terminal + ?Sized>(cards: &mut CardSet, term: &mut T) {
    if let Some(name) = term.next_line("File name:") {
        import_and_report(cards, Path::new(&name), term);
    }
}

pub fn export<T: Terminal + ?Sized>(cards: &CardSet, term: &mut T) {
    if let Some(name) = term.next_line("File name:") {
        export_and_report(cards, Path::new(&name), term);
    }
}

pub fn ask<T: Terminal + ?Sized>(cards: &CardSet, stats: &mut ErrorStatistics, term: &mut T) {
    let mut session = QuizSession::new(cards, stats);
    // Aborted sessions have already told the user why.
    if let Err(err) = session.run(term) {
        tracing::debug!(error = %err, "quiz ended early");
    }
}

const LOG_SAVED: &str = "The log has been saved.";

/// Append the transcript, including the confirmation line, to a file.
///
/// The confirmation is written before the save so that it lands in the
/// file; if the save fails it is taken back out of the transcript.
pub fn log<T: Terminal + ?Sized>(term: &mut T) {
    let Some(name) = term.next_line("File name:") else {
        return;
    };

    term.emit(LOG_SAVED);
    let transcript = term.transcript_mut();
    if let Err(err) = transcript.save(Path::new(&name)) {
        tracing::warn!(error = %err, "log failed");
        transcript.retract(LOG_SAVED);
        term.emit(&format!("The log was not saved after all: {}.", err));
    }
}

pub fn hardest_card<T: Terminal + ?Sized>(stats: &ErrorStatistics, term: &mut T) {
    match hardest(stats) {
        Some(report) => term.emit(&report.to_string()),
        None => term.emit("There are no cards with errors."),
    }
    term.emit("");
}

pub fn reset_stats<T: Terminal + ?Sized>(stats: &mut ErrorStatistics, term: &mut T) {
    stats.reset();
    tracing::info!("statistics reset");
    term.emit("Card statistics have been reset.");
    term.emit("");
}
