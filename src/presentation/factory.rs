//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::DeployUseCase;
use crate::config::Settings;
use crate::infrastructure::{CfgutilTool, FsArtifactLocator, TauriConfigReader};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<CfgutilTool, FsArtifactLocator, TauriConfigReader>;

/// Device tool configured from settings
pub fn create_device_tool(settings: &Settings) -> CfgutilTool {
    CfgutilTool::new(&settings.tool.program)
}

/// Artifact locator configured from settings
pub fn create_artifact_locator(settings: &Settings) -> FsArtifactLocator {
    FsArtifactLocator::new(&settings.project.pattern)
}

/// Create a deploy use case with all dependencies wired up
pub fn create_deploy_use_case(settings: &Settings) -> ConcreteDeployUseCase {
    DeployUseCase::new(
        create_device_tool(settings),
        create_artifact_locator(settings),
        TauriConfigReader::new(),
    )
}
