//! Deploy Event Port
//!
//! Progress of a deployment run, as an observable stream.
//! Lets the console render status lines while tests record the sequence.

use std::path::PathBuf;

use crate::domain::entities::{Artifact, DeviceRecord, Ecid};

/// Event emitted during a deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Operator did not confirm the prerequisites; the run ends here
    Declined,

    /// Project descriptor exists; its content is checked next
    ConfigFound { path: PathBuf },

    /// Product name read from the descriptor
    ProductName { name: String },

    /// Build output searched
    ArtifactsFound {
        search_root: PathBuf,
        count: usize,
    },

    /// Operator picked a package
    ArtifactSelected { artifact: Artifact },

    /// Device tool listing finished
    DevicesFound { count: usize },

    /// Operator picked a device
    DeviceSelected { device: DeviceRecord },

    /// Install is about to start; the device must be unlocked and trusted
    ReadyToInstall,

    /// ECID resolved from the selected device
    IdentifierResolved { ecid: Ecid },

    /// Install finished; stdout of the device tool
    InstallOutput { output: String },

    /// Deployment completed
    Deployed { artifact: Artifact, ecid: Ecid },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    fn on_event(&self, event: DeployEvent);
}
