//! Project Config Reader Port

use std::path::Path;

use crate::domain::entities::ProjectConfig;
use crate::error::DeployResult;

/// Loads and validates the project descriptor.
///
/// Loading and validation are separate steps so the caller can report the
/// descriptor as found before its content is checked.
pub trait ProjectConfigReader {
    /// Raw descriptor content. Fails with `ConfigNotFound` when there is no file.
    fn load_config(&self, path: &Path) -> DeployResult<String>;

    /// Validate loaded content. Fails with `ConfigParse` or `MissingField`.
    fn parse_config(&self, content: &str, path: &Path) -> DeployResult<ProjectConfig>;

    fn read_config(&self, path: &Path) -> DeployResult<ProjectConfig> {
        let content = self.load_config(path)?;
        self.parse_config(&content, path)
    }
}

impl<T: ProjectConfigReader + ?Sized> ProjectConfigReader for &T {
    fn load_config(&self, path: &Path) -> DeployResult<String> {
        (**self).load_config(path)
    }

    fn parse_config(&self, content: &str, path: &Path) -> DeployResult<ProjectConfig> {
        (**self).parse_config(content, path)
    }
}
