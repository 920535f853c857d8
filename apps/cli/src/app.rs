//! Application state and the command loop.

use crate::commands::{self, Command};
use crate::config::Config;
use crate::console::Terminal;
use flashcard_core::{CardSet, ErrorStatistics};
use std::path::PathBuf;

/// Everything one process owns: the cards, the mistakes made on them, and
/// where to export on exit.
#[derive(Debug, Default)]
pub struct App {
    cards: CardSet,
    stats: ErrorStatistics,
    import_from: Option<PathBuf>,
    export_to: Option<PathBuf>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            cards: CardSet::new(),
            stats: ErrorStatistics::new(),
            import_from: config.import_from,
            export_to: config.export_to,
        }
    }

    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    pub fn stats(&self) -> &ErrorStatistics {
        &self.stats
    }

    /// Run until the user exits or input ends.
    pub fn run<T: Terminal + ?Sized>(&mut self, term: &mut T) {
        if let Some(path) = self.import_from.take() {
            commands::import_and_report(&mut self.cards, &path, term);
        }

        loop {
            let Some(action) = term.next_line(Command::PROMPT) else {
                tracing::debug!("input closed at command prompt");
                self.exit(term);
                return;
            };

            match Command::parse(&action) {
                Some(Command::Exit) => {
                    self.exit(term);
                    return;
                }
                Some(command) => self.dispatch(command, term),
                None => {
                    term.emit(&format!("Unknown action \"{}\".", action));
                    term.emit("");
                }
            }
        }
    }

    fn dispatch<T: Terminal + ?Sized>(&mut self, command: Command, term: &mut T) {
        tracing::debug!(command = command.as_str(), "dispatch");
        match command {
            Command::Add => {
                commands::add(&mut self.cards, term);
            }
            Command::Remove => commands::remove(&mut self.cards, term),
            Command::Import => commands::import(&mut self.cards, term),
            Command::Export => commands::export(&self.cards, term),
            Command::Ask => commands::ask(&self.cards, &mut self.stats, term),
            Command::Log => commands::log(term),
            Command::HardestCard => commands::hardest_card(&self.stats, term),
            Command::ResetStats => commands::reset_stats(&mut self.stats, term),
            Command::Exit => {}
        }
    }

    fn exit<T: Terminal + ?Sized>(&mut self, term: &mut T) {
        if let Some(path) = &self.export_to {
            commands::export_and_report(&self.cards, path, term);
        }
        term.emit("Bye bye!");
    }
}
