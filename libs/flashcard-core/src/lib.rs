//! Core flashcard library for the interactive quiz tool.
//!
//! Provides:
//! - Card set and line-delimited record codec
//! - Answer matching with cross-match detection
//! - Quiz sessions over a card set
//! - Error statistics and the hardest-card report

pub mod error;
pub mod matching;
pub mod record;
pub mod session;
pub mod stats;
pub mod types;

pub use error::{QuizError, RecordError, Result};
pub use matching::{match_answer, AnswerOutcome};
pub use session::{parse_question_count, InputProvider, OutputSink, QuizSession, QuizSummary, Round};
pub use stats::{hardest, ErrorStatistics, HardestCards};
pub use types::{Card, CardSet};
