use std::path::PathBuf;

use trainer_core::model::{QuestionRecord, Topic};

use crate::repository::{QuestionBankRepository, StorageError};

/// Question banks as one JSON array per topic under a root directory.
pub struct JsonBankStore {
    root: PathBuf,
}

impl JsonBankStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn bank_file(&self, topic: Topic) -> PathBuf {
        self.root.join(topic.bank_path())
    }
}

impl QuestionBankRepository for JsonBankStore {
    fn load_bank(&self, topic: Topic) -> Result<Vec<QuestionRecord>, StorageError> {
        let path = self.bank_file(topic);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::Missing(path));
            }
            Err(err) => {
                return Err(StorageError::Io { path, source: err });
            }
        };

        let records: Vec<QuestionRecord> =
            serde_json::from_str(&raw).map_err(|err| StorageError::Corrupt {
                path: path.clone(),
                message: err.to_string(),
            })?;

        for record in &records {
            record.validate().map_err(|err| StorageError::Invalid {
                path: path.clone(),
                message: err.to_string(),
            })?;
        }

        Ok(records)
    }
}
