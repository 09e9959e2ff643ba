//! Shared error types for the services crate.
//!
//! `QuizError` display strings double as user-facing replies; the
//! controller renders them verbatim into the transcript.

use std::path::PathBuf;

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by the quiz session controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// The topic string did not resolve to a known exam topic. Presented
    /// the same way as a missing bank so the user's fix is identical:
    /// check the name, add questions.
    #[error(
        "Topic '{topic}' not found in the question bank. Please add questions to the question bank first."
    )]
    TopicUnknown { topic: String },

    /// The topic is known but no bank file exists for it.
    #[error(
        "Topic '{topic}' not found in the question bank. Please add questions to the question bank first."
    )]
    BankMissing { topic: String },

    #[error("Invalid JSON in {}.", .path.display())]
    BankCorrupt { path: PathBuf },

    #[error("Invalid question record in {}: {message}", .path.display())]
    BankInvalid { path: PathBuf, message: String },

    #[error(
        "Not enough questions for topic '{topic}'. Only {available} available. Please add more questions to the question bank."
    )]
    InsufficientQuestions { topic: String, available: usize },

    #[error("No active quiz. Please start a quiz first with /quizme topic=<topic_name>")]
    NoActiveSession,

    #[error(
        "Invalid state. Please start a quiz with /quizme topic=\"<topic_name>\" or provide an answer to the current question."
    )]
    InvalidState,

    #[error("{} file not found.", .path.display())]
    TopologyMissing { path: PathBuf },

    #[error("Invalid JSON in {}.", .path.display())]
    TopologyCorrupt { path: PathBuf },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by search providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error("search request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
