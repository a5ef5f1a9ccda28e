//! Quiz error types.
//!
//! Everything here is surfaced to the operator before a quiz starts, except
//! `SessionAborted`, which signals a broken runner rather than bad input.
//! The CLI downcasts to this type to choose a process exit status.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing or running a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The configured time limit is zero or not a number.
    #[error("invalid time limit '{0}': must be a positive number of seconds")]
    InvalidTimeLimit(String),

    /// The question file could not be opened or read.
    #[error("the file at path {} could not be opened", .path.display())]
    QuestionFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record in the question file is not a `prompt,answer` pair.
    #[error("malformed question record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The scorekeeper stopped without publishing an outcome.
    #[error("quiz session ended without a score")]
    SessionAborted,
}

impl QuizError {
    /// Returns `true` for failures caused by the question source.
    pub fn is_question_source(&self) -> bool {
        matches!(
            self,
            QuizError::QuestionFile { .. } | QuizError::MalformedRecord { .. }
        )
    }
}
