//! ipa-deploy - install an iOS build on a connected device
//!
//! Drives Apple's `cfgutil` to push an `.ipa` from a Tauri project's build
//! output to a device attached over USB. The library holds the workflow and
//! its adapters; the binary adds the terminal front end.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployOutcome, DeployReport, DeployUseCase};
pub use config::{ColorMode, Settings};
pub use domain::entities::{Artifact, DeploymentCommand, DeviceRecord, Ecid, ProjectConfig};
pub use domain::ports::{
    ArtifactLocator, ConfirmRequest, DeployEvent, DeployEventSink, DeviceTool,
    ProjectConfigReader, Prompter,
};
pub use domain::services::extract_identifier;
pub use error::{DeployError, DeployResult};
