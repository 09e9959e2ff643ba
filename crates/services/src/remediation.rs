//! GNS3 remediation config generation.
//!
//! After a badly failed quiz the trainer hands the user a lab to rebuild
//! the topic hands-on. Only OSPF labs exist today; other topics get a
//! polite decline instead of a config set.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use storage::repository::{StorageError, TopologyRepository};
use trainer_core::model::{Router, Topic};

use crate::error::QuizError;

/// Writes one startup config per router in the lab topology.
pub struct RemediationGenerator {
    topology: Arc<dyn TopologyRepository>,
    output_dir: PathBuf,
}

impl RemediationGenerator {
    #[must_use]
    pub fn new(topology: Arc<dyn TopologyRepository>, output_dir: PathBuf) -> Self {
        Self {
            topology,
            output_dir,
        }
    }

    /// Generate configs for `topic` and report where they landed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::TopologyMissing` or `QuizError::TopologyCorrupt`
    /// when the topology description is absent or unparsable, and
    /// `QuizError::Storage` for filesystem failures while writing configs.
    pub fn generate(&self, topic: Topic) -> Result<String, QuizError> {
        if topic != Topic::Ospf {
            return Ok(
                "GNS3 configuration generation is only supported for OSPF at the moment."
                    .to_string(),
            );
        }

        let topology = match self.topology.load() {
            Ok(topology) => topology,
            Err(StorageError::Missing(path)) => {
                return Err(QuizError::TopologyMissing { path });
            }
            Err(StorageError::Corrupt { path, .. }) => {
                return Err(QuizError::TopologyCorrupt { path });
            }
            Err(err) => return Err(err.into()),
        };

        std::fs::create_dir_all(&self.output_dir).map_err(|err| StorageError::Io {
            path: self.output_dir.clone(),
            source: err,
        })?;

        for router in &topology.routers {
            let path = self.output_dir.join(format!("{}_config.txt", router.name));
            std::fs::write(&path, render_router_config(router))
                .map_err(|err| StorageError::Io { path, source: err })?;
        }

        info!(
            routers = topology.routers.len(),
            dir = %self.output_dir.display(),
            "generated remediation configs"
        );

        Ok(format!(
            "GNS3 configuration files have been generated in the '{}' directory.",
            self.output_dir.display()
        ))
    }
}

fn render_router_config(router: &Router) -> String {
    let mut config = format!("hostname {}\n\n", router.name);
    for interface in &router.interfaces {
        config.push_str(&format!(
            "interface {}\n ip address {} {}\n no shutdown\n\n",
            interface.name, interface.ip_address, interface.subnet_mask
        ));
    }
    config.push_str(&format!(
        "router ospf 1\n router-id {}\n network 10.0.0.0 0.0.0.255 area 0\n",
        router.router_id()
    ));
    config
}
