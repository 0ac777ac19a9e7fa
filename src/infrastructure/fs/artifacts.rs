//! Build output scanning
//!
//! Implements the ArtifactLocator port with an `ignore` walker. Ignore files
//! and hidden-file filtering are switched off: Xcode build trees are usually
//! git-ignored and must still be searched.

use std::path::Path;

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use crate::domain::entities::Artifact;
use crate::domain::ports::ArtifactLocator;
use crate::error::{DeployError, DeployResult};

/// Recursive glob search for deployable packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsArtifactLocator {
    pattern: String,
}

impl FsArtifactLocator {
    /// Glob matched against file names at any depth
    pub const DEFAULT_PATTERN: &'static str = "*.ipa";

    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Default for FsArtifactLocator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATTERN)
    }
}

impl ArtifactLocator for FsArtifactLocator {
    fn find_artifacts(&self, root: &Path) -> DeployResult<Vec<Artifact>> {
        if !root.is_dir() {
            log::debug!("build directory {} does not exist", root.display());
            return Ok(Vec::new());
        }

        let root = std::path::absolute(root)?;

        let invalid = |e: ignore::Error| DeployError::InvalidPattern {
            pattern: self.pattern.clone(),
            message: e.to_string(),
        };
        let overrides = OverrideBuilder::new(&root)
            .add(&self.pattern)
            .map_err(invalid)?
            .build()
            .map_err(invalid)?;

        let walker = WalkBuilder::new(&root)
            .standard_filters(false)
            .overrides(overrides)
            .build();

        let mut artifacts = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_some_and(|t| t.is_file()) {
                log::trace!("artifact candidate: {}", entry.path().display());
                artifacts.push(Artifact::new(entry.into_path()));
            }
        }

        artifacts.sort();
        log::info!(
            "{} artifact(s) matching '{}' under {}",
            artifacts.len(),
            self.pattern,
            root.display()
        );
        Ok(artifacts)
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }
}
