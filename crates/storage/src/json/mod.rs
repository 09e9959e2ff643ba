//! Flat-file JSON backend.
//!
//! Question banks live under `<bank_dir>/<domain>/<topic>.json`, sessions
//! under `<state_dir>/<id>.json`, and the topology in a single document.
//! Every adapter reads the whole file per call; nothing is cached, so
//! edits to the bank directory are picked up on the next command.

mod bank_repo;
mod session_repo;
mod topology_repo;

pub use bank_repo::JsonBankStore;
pub use session_repo::JsonSessionStore;
pub use topology_repo::JsonTopologyStore;

use std::path::PathBuf;
use std::sync::Arc;

use crate::repository::{
    QuestionBankRepository, SessionRepository, Stores, TopologyRepository,
};

impl Stores {
    /// Build the flat-file backend rooted at the given locations.
    #[must_use]
    pub fn json(
        bank_dir: impl Into<PathBuf>,
        state_dir: impl Into<PathBuf>,
        topology_path: impl Into<PathBuf>,
    ) -> Self {
        let banks: Arc<dyn QuestionBankRepository> = Arc::new(JsonBankStore::new(bank_dir));
        let sessions: Arc<dyn SessionRepository> = Arc::new(JsonSessionStore::new(state_dir));
        let topology: Arc<dyn TopologyRepository> =
            Arc::new(JsonTopologyStore::new(topology_path));
        Self {
            banks,
            sessions,
            topology,
        }
    }
}
