//! Resolved install request

use super::{Artifact, Ecid};

/// The (artifact, device) pair handed to the install operation.
///
/// Built only after both selections are made; consumed by a single install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentCommand {
    pub artifact: Artifact,
    pub ecid: Ecid,
}

impl DeploymentCommand {
    pub fn new(artifact: Artifact, ecid: Ecid) -> Self {
        Self { artifact, ecid }
    }
}
