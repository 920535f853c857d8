//! Command-line configuration.

use clap::Parser;
use std::path::PathBuf;

/// Interactive flashcard trainer.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "flashcards", version, about = "Interactive flashcard trainer")]
pub struct Config {
    /// Card file to load before the first prompt
    #[arg(long = "import_from", alias = "import-from", value_name = "FILE")]
    pub import_from: Option<PathBuf>,

    /// Card file to write when the session exits
    #[arg(long = "export_to", alias = "export-to", value_name = "FILE")]
    pub export_to: Option<PathBuf>,
}
