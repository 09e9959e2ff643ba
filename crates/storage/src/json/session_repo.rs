use std::path::PathBuf;

use trainer_core::model::{QuizSession, SessionId, SessionState};

use crate::repository::{SessionRepository, StorageError};

/// Sessions as one JSON document per id under a state directory.
///
/// The id doubles as the file stem, which is safe because `SessionId`
/// rejects path separators at construction.
pub struct JsonSessionStore {
    dir: PathBuf,
}

impl JsonSessionStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn session_file(&self, id: &SessionId) -> PathBuf {
        self.dir.join(format!("{}.json", id.value()))
    }
}

impl SessionRepository for JsonSessionStore {
    fn load(&self, id: &SessionId) -> Result<SessionState, StorageError> {
        let path = self.session_file(id);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SessionState::NoSession);
            }
            Err(err) => {
                return Err(StorageError::Io { path, source: err });
            }
        };

        let session: QuizSession =
            serde_json::from_str(&raw).map_err(|err| StorageError::Corrupt {
                path: path.clone(),
                message: err.to_string(),
            })?;

        // Deserialization bypasses the constructor guard; re-check it here.
        session.validate().map_err(|err| StorageError::Invalid {
            path,
            message: err.to_string(),
        })?;

        Ok(SessionState::from_session(session))
    }

    fn save(&self, id: &SessionId, session: &QuizSession) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|err| StorageError::Io {
            path: self.dir.clone(),
            source: err,
        })?;

        let raw = serde_json::to_string(session)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let path = self.session_file(id);
        std::fs::write(&path, raw).map_err(|err| StorageError::Io { path, source: err })
    }

    fn clear(&self, id: &SessionId) -> Result<(), StorageError> {
        let path = self.session_file(id);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io { path, source: err }),
        }
    }
}
