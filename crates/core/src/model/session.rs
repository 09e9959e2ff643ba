use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::question::QuestionRecord;
use crate::model::topic::Topic;

// ─── ERRORS ────────────────────────────────────────────────────────────────────

/// Errors that can occur during session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session has no questions")]
    Empty,

    #[error("session already completed")]
    Completed,
}

// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────

/// Outcome of grading a single submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The letter that would have been correct, for feedback rendering.
    pub correct_answer: String,
    /// True when this submission answered the final question.
    pub was_last: bool,
}

// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────

/// Mutable record of a single quiz attempt.
///
/// `current_question_index` climbs monotonically from 0 to `questions.len()`
/// inclusive; the inclusive value is the terminal marker. The persisted shape
/// is exactly these four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    topic: Topic,
    questions: Vec<QuestionRecord>,
    score: u32,
    current_question_index: usize,
}

impl QuizSession {
    /// Start a session over an already-sampled, ordered question list.
    ///
    /// The list order is fixed for the lifetime of the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty.
    pub fn new(topic: Topic, questions: Vec<QuestionRecord>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        Ok(Self {
            topic,
            questions,
            score: 0,
            current_question_index: 0,
        })
    }

    /// Re-check the constructor invariant on a session that arrived by
    /// deserialization instead of through `new`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the question list is empty.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.questions.is_empty() {
            return Err(SessionError::Empty);
        }
        Ok(())
    }

    #[must_use]
    pub fn topic(&self) -> Topic {
        self.topic
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions not answered correctly. Mid-session this
    /// includes every question still unanswered.
    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.questions.len().saturating_sub(self.score as usize)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_question_index >= self.questions.len()
    }

    /// The question awaiting an answer, or `None` once the session is done.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_question_index)
    }

    /// Grade `answer` against the current question and advance.
    ///
    /// Comparison is a case-insensitive exact match on the answer letter.
    /// Whether this was the last question is decided by comparing
    /// `current_question_index + 1` against the question count before the
    /// increment; the increment applies on both branches.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if no question is awaiting an
    /// answer.
    pub fn submit_answer(&mut self, answer: &str) -> Result<AnswerOutcome, SessionError> {
        let Some(question) = self.questions.get(self.current_question_index) else {
            return Err(SessionError::Completed);
        };

        let correct = question.is_correct(answer);
        let correct_answer = question.answer.clone();
        if correct {
            self.score += 1;
        }

        let was_last = self.current_question_index + 1 >= self.questions.len();
        self.current_question_index += 1;

        Ok(AnswerOutcome {
            correct,
            correct_answer,
            was_last,
        })
    }

    /// Percentage score on the 0-100 scale.
    #[must_use]
    pub fn final_score(&self) -> f64 {
        (f64::from(self.score) / self.questions.len() as f64) * 100.0
    }
}

// ─── SESSION STATE ─────────────────────────────────────────────────────────────

/// Explicit state tag for a stored session slot.
///
/// Stores hand this to callers instead of a "state file exists" signal, so
/// control flow branches on data rather than on filesystem checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NoSession,
    InProgress(QuizSession),
    Completed(QuizSession),
}

impl SessionState {
    /// Tag a loaded session by its own completion marker.
    #[must_use]
    pub fn from_session(session: QuizSession) -> Self {
        if session.is_complete() {
            SessionState::Completed(session)
        } else {
            SessionState::InProgress(session)
        }
    }
}

// ─── TESTS ─────────────────────────────────────────────────────────────────────
