//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Reasons a quiz session ends without asking every requested question.
///
/// The session has already reported these to the user through its output
/// sink by the time they are returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("invalid question count: {0:?}")]
    InvalidCount(String),

    #[error("no cards to ask")]
    EmptyCardSet,

    #[error("input closed after {asked} question(s)")]
    InputClosed { asked: usize },
}

/// Errors produced by the card record codec.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid card record at line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode card record: {0}")]
    Encode(#[from] serde_json::Error),
}
