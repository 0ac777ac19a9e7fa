//! Deploy outcome types

use crate::domain::entities::{Artifact, DeviceRecord, Ecid, ProjectConfig};

/// How a run ended, when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// Operator did not confirm the prerequisites; nothing was done
    Declined,
    /// Package installed
    Deployed(DeployReport),
}

impl DeployOutcome {
    pub fn is_deployed(&self) -> bool {
        matches!(self, DeployOutcome::Deployed(_))
    }
}

/// Everything a successful run resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub project: ProjectConfig,
    pub artifact: Artifact,
    pub device: DeviceRecord,
    pub ecid: Ecid,
    /// Device tool stdout, verbatim
    pub output: String,
}
