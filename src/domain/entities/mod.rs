//! Domain Entities
//!
//! Records produced and consumed by a single deployment run.
//! - `DeviceRecord` - One attached device as reported by the device tool
//! - `Ecid` - Hardware identifier resolved from a device record
//! - `Artifact` - A deployable `.ipa` package
//! - `ProjectConfig` - Fields read from the project descriptor
//! - `DeploymentCommand` - The (artifact, ECID) pair handed to the installer

mod artifact;
mod deployment;
mod device;
mod project;

pub use artifact::Artifact;
pub use deployment::DeploymentCommand;
pub use device::{DeviceRecord, Ecid};
pub use project::ProjectConfig;
