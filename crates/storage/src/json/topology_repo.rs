use std::path::PathBuf;

use trainer_core::model::Topology;

use crate::repository::{StorageError, TopologyRepository};

/// Lab topology as a single JSON document.
pub struct JsonTopologyStore {
    path: PathBuf,
}

impl JsonTopologyStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TopologyRepository for JsonTopologyStore {
    fn load(&self) -> Result<Topology, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::Missing(self.path.clone()));
            }
            Err(err) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|err| StorageError::Corrupt {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }
}
