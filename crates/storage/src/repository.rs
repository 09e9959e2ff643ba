use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use trainer_core::model::{QuestionRecord, QuizSession, SessionId, SessionState, Topic, Topology};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("{} not found", .0.display())]
    Missing(PathBuf),

    #[error("invalid JSON in {}: {message}", .path.display())]
    Corrupt { path: PathBuf, message: String },

    #[error("invalid record in {}: {message}", .path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage lock poisoned: {0}")]
    Lock(String),
}

/// Read-only lookup of per-topic question banks.
pub trait QuestionBankRepository: Send + Sync {
    /// Load every record in the bank for `topic`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Missing` if no bank exists for the topic,
    /// `StorageError::Corrupt` if the bank document cannot be parsed, or
    /// `StorageError::Invalid` if a record fails validation.
    fn load_bank(&self, topic: Topic) -> Result<Vec<QuestionRecord>, StorageError>;
}

/// Keyed store of quiz sessions.
pub trait SessionRepository: Send + Sync {
    /// Load the state tag for a session slot.
    ///
    /// An absent slot is `SessionState::NoSession`, not an error; errors are
    /// reserved for slots that exist but cannot be read.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` for an unreadable session document,
    /// or other storage errors.
    fn load(&self, id: &SessionId) -> Result<SessionState, StorageError>;

    /// Persist the whole session under `id`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be stored.
    fn save(&self, id: &SessionId, session: &QuizSession) -> Result<(), StorageError>;

    /// Remove the session under `id`. Clearing an absent slot is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if an existing session cannot be removed.
    fn clear(&self, id: &SessionId) -> Result<(), StorageError>;
}

/// Access to the lab topology description.
pub trait TopologyRepository: Send + Sync {
    /// Load the topology document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Missing` if the description is absent, or
    /// `StorageError::Corrupt` if it cannot be parsed.
    fn load(&self) -> Result<Topology, StorageError>;
}

/// Simple in-memory repositories for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    banks: Arc<Mutex<HashMap<Topic, Vec<QuestionRecord>>>>,
    sessions: Arc<Mutex<HashMap<SessionId, QuizSession>>>,
    topology: Arc<Mutex<Option<Topology>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the bank for a topic, replacing any previous records.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Invalid` if a record fails validation, so the
    /// in-memory store enforces the same load-time contract as the file
    /// backend.
    pub fn put_bank(
        &self,
        topic: Topic,
        records: Vec<QuestionRecord>,
    ) -> Result<(), StorageError> {
        for record in &records {
            record.validate().map_err(|err| StorageError::Invalid {
                path: topic.bank_path(),
                message: err.to_string(),
            })?;
        }
        let mut guard = self
            .banks
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        guard.insert(topic, records);
        Ok(())
    }

    /// Seed the topology description.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Lock` if the store mutex is poisoned.
    pub fn put_topology(&self, topology: Topology) -> Result<(), StorageError> {
        let mut guard = self
            .topology
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        *guard = Some(topology);
        Ok(())
    }
}

impl QuestionBankRepository for InMemoryStore {
    fn load_bank(&self, topic: Topic) -> Result<Vec<QuestionRecord>, StorageError> {
        let guard = self
            .banks
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        guard
            .get(&topic)
            .cloned()
            .ok_or_else(|| StorageError::Missing(topic.bank_path()))
    }
}

impl SessionRepository for InMemoryStore {
    fn load(&self, id: &SessionId) -> Result<SessionState, StorageError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(guard
            .get(id)
            .cloned()
            .map_or(SessionState::NoSession, SessionState::from_session))
    }

    fn save(&self, id: &SessionId, session: &QuizSession) -> Result<(), StorageError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        guard.insert(id.clone(), session.clone());
        Ok(())
    }

    fn clear(&self, id: &SessionId) -> Result<(), StorageError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        guard.remove(id);
        Ok(())
    }
}

impl TopologyRepository for InMemoryStore {
    fn load(&self) -> Result<Topology, StorageError> {
        let guard = self
            .topology
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        guard
            .clone()
            .ok_or_else(|| StorageError::Missing(PathBuf::from("gns3_topology.json")))
    }
}

/// Aggregates the three repositories behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Stores {
    pub banks: Arc<dyn QuestionBankRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub topology: Arc<dyn TopologyRepository>,
}

impl Stores {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_in_memory(InMemoryStore::new())
    }

    /// Wrap one `InMemoryStore` as all three repositories, keeping the
    /// handle usable for seeding.
    #[must_use]
    pub fn from_in_memory(store: InMemoryStore) -> Self {
        let banks: Arc<dyn QuestionBankRepository> = Arc::new(store.clone());
        let sessions: Arc<dyn SessionRepository> = Arc::new(store.clone());
        let topology: Arc<dyn TopologyRepository> = Arc::new(store);
        Self {
            banks,
            sessions,
            topology,
        }
    }
}
