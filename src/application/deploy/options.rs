//! Deploy options

use std::path::PathBuf;

/// Inputs of a single deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Project descriptor (tauri.conf.json)
    pub config_path: PathBuf,
    /// Root of the build output searched for packages
    pub build_dir: PathBuf,
    /// Treat the prerequisite checklist as already confirmed
    pub skip_confirmation: bool,
}

impl DeployOptions {
    pub fn new(config_path: impl Into<PathBuf>, build_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            build_dir: build_dir.into(),
            skip_confirmation: false,
        }
    }
}
