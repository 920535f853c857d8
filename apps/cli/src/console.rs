//! Line-oriented terminal I/O with transcript capture.

use crate::transcript::Transcript;
use flashcard_core::{InputProvider, OutputSink};
use std::io::{BufRead, Write};

/// Input and output for the command loop, with access to the dialogue
/// transcript for the `log` command.
pub trait Terminal: InputProvider + OutputSink {
    fn transcript_mut(&mut self) -> &mut Transcript;
}

/// Reads replies from `R` and writes prompts and messages to `W`.
///
/// Every line shown or read is mirrored into the transcript.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            transcript: Transcript::new(),
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn write_line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.writer, "{}", text).and_then(|_| self.writer.flush()) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
        self.transcript.record(text);
    }
}

impl<R: BufRead, W: Write> InputProvider for Console<R, W> {
    fn next_line(&mut self, prompt: &str) -> Option<String> {
        self.write_line(prompt);

        // Invalid UTF-8 is a reply like any other, not end of input.
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                tracing::debug!("input closed");
                None
            }
            Ok(_) => {
                let reply = String::from_utf8_lossy(&line).trim().to_string();
                self.transcript.record(&reply);
                Some(reply)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read from terminal");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> OutputSink for Console<R, W> {
    fn emit(&mut self, text: &str) {
        self.write_line(text);
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }
}
