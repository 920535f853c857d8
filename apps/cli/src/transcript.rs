//! In-memory record of the dialogue, saved on demand.

use crate::error::{CliError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Every prompt, reply and message since the last save, in order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop the last line if it equals `line`.
    pub fn retract(&mut self, line: &str) -> bool {
        if self.lines.last().map(String::as_str) == Some(line) {
            self.lines.pop();
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Append the transcript to `path`, creating the file if needed, then
    /// clear it. Each save ends with a blank separator line.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| CliError::io(path, e))?;

        let mut text = self.lines.join("\n");
        text.push_str("\n\n");
        file.write_all(text.as_bytes())
            .map_err(|e| CliError::io(path, e))?;

        tracing::info!(path = %path.display(), lines = self.lines.len(), "transcript saved");
        self.clear();
        Ok(())
    }
}
