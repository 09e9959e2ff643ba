//! Quiz command dispatch.
//!
//! The controller is the only writer of session state. Every command is
//! dispatched against the stored state of the addressed session slot, and
//! every path, including failures, renders to reply text.

use std::sync::Arc;

use rand::rng;
use tracing::{debug, info, warn};

use storage::repository::{QuestionBankRepository, SessionRepository, StorageError, Stores};
use trainer_core::model::{QuizSession, SessionId, SessionState, Topic};

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::quiz::{sampler, view};
use crate::remediation::RemediationGenerator;

/// Wrong answers at or above this count append a remediation lab to the
/// final report. Absolute count, not a percentage.
const REMEDIATION_THRESHOLD: usize = 5;

// ─── REQUEST ──────────────────────────────────────────────────────────────────

/// One parsed quiz command addressed at a session slot.
#[derive(Debug, Clone, Default)]
pub struct QuizRequest {
    pub topic: Option<String>,
    pub answer: Option<String>,
    pub reset: bool,
}

// ─── CONTROLLER ───────────────────────────────────────────────────────────────

/// Drives quiz sessions against the configured stores.
pub struct SessionController {
    stores: Stores,
    config: QuizConfig,
    remediation: RemediationGenerator,
}

impl SessionController {
    #[must_use]
    pub fn new(stores: Stores, config: QuizConfig) -> Self {
        let remediation =
            RemediationGenerator::new(Arc::clone(&stores.topology), config.output_dir.clone());
        Self {
            stores,
            config,
            remediation,
        }
    }

    /// Handle one command against the session slot `id` and return the
    /// reply text. Failures render as their display strings, so the caller
    /// always has something to show.
    pub fn handle(&self, id: &SessionId, request: &QuizRequest) -> String {
        match self.dispatch(id, request) {
            Ok(reply) => reply,
            Err(err) => {
                warn!(session = %id, error = %err, "quiz command failed");
                err.to_string()
            }
        }
    }

    /// Re-render the question the addressed session is waiting on.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveSession` when the slot is empty and
    /// `QuizError::InvalidState` when the session already finished.
    pub fn current_question(&self, id: &SessionId) -> Result<String, QuizError> {
        match self.stores.sessions.load(id)? {
            SessionState::NoSession => Err(QuizError::NoActiveSession),
            SessionState::InProgress(session) => Ok(render_position(&session)),
            SessionState::Completed(_) => Err(QuizError::InvalidState),
        }
    }

    /// Score line for the addressed session, finished or not. Appends the
    /// remediation block when the wrong count already crosses the
    /// threshold.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveSession` when the slot is empty.
    pub fn report(&self, id: &SessionId) -> Result<String, QuizError> {
        match self.stores.sessions.load(id)? {
            SessionState::NoSession => Err(QuizError::NoActiveSession),
            SessionState::InProgress(session) | SessionState::Completed(session) => {
                Ok(self.final_report(&session))
            }
        }
    }

    fn dispatch(&self, id: &SessionId, request: &QuizRequest) -> Result<String, QuizError> {
        if request.reset {
            self.stores.sessions.clear(id)?;
            info!(session = %id, "quiz session cleared");
            return Ok(
                "Quiz session reset. Start a new quiz with /quizme topic=\"<topic_name>\"."
                    .to_string(),
            );
        }

        // An empty topic or answer value reads as absent.
        match self.stores.sessions.load(id)? {
            SessionState::NoSession => match request.topic.as_deref().filter(|t| !t.is_empty()) {
                Some(topic) => self.start(id, topic),
                None => Ok(view::welcome()),
            },
            // A stray topic while a quiz is running is ignored; the answer
            // decides.
            SessionState::InProgress(mut session) => {
                match request.answer.as_deref().filter(|a| !a.is_empty()) {
                    Some(answer) => self.submit(id, &mut session, answer),
                    None => Ok(render_position(&session)),
                }
            }
            SessionState::Completed(_) => Err(QuizError::InvalidState),
        }
    }

    fn start(&self, id: &SessionId, raw_topic: &str) -> Result<String, QuizError> {
        let topic = Topic::resolve(raw_topic).map_err(|_| QuizError::TopicUnknown {
            topic: raw_topic.to_string(),
        })?;

        let bank = match self.stores.banks.load_bank(topic) {
            Ok(bank) => bank,
            Err(StorageError::Missing(_)) => {
                return Err(QuizError::BankMissing {
                    topic: raw_topic.to_string(),
                });
            }
            Err(StorageError::Corrupt { path, .. }) => {
                return Err(QuizError::BankCorrupt { path });
            }
            Err(StorageError::Invalid { path, message }) => {
                return Err(QuizError::BankInvalid { path, message });
            }
            Err(err) => return Err(err.into()),
        };

        let mut rng = rng();
        let questions = sampler::sample_questions(&mut rng, &bank, self.config.num_questions)
            .ok_or_else(|| QuizError::InsufficientQuestions {
                topic: raw_topic.to_string(),
                available: bank.len(),
            })?;

        let session =
            QuizSession::new(topic, questions).map_err(|_| QuizError::InsufficientQuestions {
                topic: raw_topic.to_string(),
                available: bank.len(),
            })?;

        self.stores.sessions.save(id, &session)?;
        info!(
            session = %id,
            topic = %topic,
            questions = session.total(),
            "quiz started"
        );
        Ok(render_position(&session))
    }

    fn submit(
        &self,
        id: &SessionId,
        session: &mut QuizSession,
        answer: &str,
    ) -> Result<String, QuizError> {
        let outcome = session
            .submit_answer(answer)
            .map_err(|_| QuizError::InvalidState)?;

        // Persist before rendering so a render hiccup can never lose the
        // graded answer.
        self.stores.sessions.save(id, session)?;
        debug!(
            session = %id,
            correct = outcome.correct,
            index = session.current_question_index(),
            "answer graded"
        );

        let follow_up = if outcome.was_last {
            self.final_report(session)
        } else {
            render_position(session)
        };
        Ok(format!("{}\n\n{follow_up}", view::feedback(&outcome)))
    }

    fn final_report(&self, session: &QuizSession) -> String {
        let mut report = view::report(session);
        if session.wrong_count() >= REMEDIATION_THRESHOLD {
            let note = match self.remediation.generate(session.topic()) {
                Ok(note) => note,
                Err(err) => {
                    warn!(error = %err, "remediation generation failed");
                    err.to_string()
                }
            };
            report.push('\n');
            report.push_str(&note);
        }
        report
    }
}

fn render_position(session: &QuizSession) -> String {
    match session.current_question() {
        Some(record) => view::question(session.current_question_index(), record),
        None => view::report(session),
    }
}

// ─── TESTS ─────────────────────────────────────────────────────────────────────
