use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── ERRORS ────────────────────────────────────────────────────────────────────

/// Errors that can occur while validating a question record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question has no options")]
    NoOptions,

    #[error("answer key '{answer}' is not among the options")]
    AnswerNotAnOption { answer: String },
}

// ─── QUESTION RECORD ───────────────────────────────────────────────────────────

/// A single multiple-choice question as stored in a bank file.
///
/// `options` maps answer letters to option text; `BTreeMap` keeps the
/// rendered option order stable regardless of key order in the document.
/// Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: BTreeMap<String, String>,
    pub answer: String,
}

impl QuestionRecord {
    /// Check that the stored answer letter names one of the options.
    ///
    /// Bank files are hand-maintained; a record violating this would be
    /// unanswerable, so stores reject it at load time.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoOptions` for an empty option map, or
    /// `QuestionError::AnswerNotAnOption` if `answer` matches no option key.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        let known = self
            .options
            .keys()
            .any(|key| key.eq_ignore_ascii_case(&self.answer));
        if !known {
            return Err(QuestionError::AnswerNotAnOption {
                answer: self.answer.clone(),
            });
        }
        Ok(())
    }

    /// Whether `candidate` names the correct option, ignoring case.
    #[must_use]
    pub fn is_correct(&self, candidate: &str) -> bool {
        candidate.eq_ignore_ascii_case(&self.answer)
    }
}

// ─── TESTS ─────────────────────────────────────────────────────────────────────
