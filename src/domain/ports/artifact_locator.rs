//! Artifact Locator Port

use std::path::Path;

use crate::domain::entities::Artifact;
use crate::error::DeployResult;

/// Finds deployable packages below a build output directory.
pub trait ArtifactLocator {
    /// Recursively collect matching packages under `root`.
    ///
    /// A missing or empty `root` yields an empty list; the caller decides
    /// whether that is fatal.
    fn find_artifacts(&self, root: &Path) -> DeployResult<Vec<Artifact>>;

    /// Glob the locator matches, for reporting
    fn pattern(&self) -> &str;
}

impl<T: ArtifactLocator + ?Sized> ArtifactLocator for &T {
    fn find_artifacts(&self, root: &Path) -> DeployResult<Vec<Artifact>> {
        (**self).find_artifacts(root)
    }

    fn pattern(&self) -> &str {
        (**self).pattern()
    }
}
