//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure provides the concrete implementations; tests provide fakes.

pub mod artifact_locator;
pub mod deploy_events;
pub mod device_tool;
pub mod project_config_reader;
pub mod prompter;

pub use artifact_locator::ArtifactLocator;
pub use deploy_events::{DeployEvent, DeployEventSink};
pub use device_tool::DeviceTool;
pub use project_config_reader::ProjectConfigReader;
pub use prompter::{ConfirmRequest, Prompter};
