//! Settings type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::{CfgutilTool, FsArtifactLocator};

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Device tool settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSettings {
    /// Executable name or path of `cfgutil`
    pub program: PathBuf,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            program: PathBuf::from(CfgutilTool::DEFAULT_PROGRAM),
        }
    }
}

/// Where the project keeps its descriptor and build output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    /// Project descriptor, relative to the project directory
    pub config_file: PathBuf,
    /// Build output root, relative to the project directory
    pub build_dir: PathBuf,
    /// Glob for deployable packages
    pub pattern: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from("src-tauri/tauri.conf.json"),
            build_dir: PathBuf::from("src-tauri/gen/apple/build"),
            pattern: FsArtifactLocator::DEFAULT_PATTERN.to_string(),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputSettings {
    pub color: ColorMode,
}

/// Effective settings after all layers are applied
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub tool: ToolSettings,
    pub project: ProjectSettings,
    pub output: OutputSettings,
}

impl Settings {
    /// Overlay the keys present in a settings file.
    pub fn merge(&mut self, file: SettingsFile) {
        if let Some(program) = file.tool.program {
            self.tool.program = program;
        }
        if let Some(config_file) = file.project.config_file {
            self.project.config_file = config_file;
        }
        if let Some(build_dir) = file.project.build_dir {
            self.project.build_dir = build_dir;
        }
        if let Some(pattern) = file.project.pattern {
            self.project.pattern = pattern;
        }
        if let Some(color) = file.output.color {
            self.output.color = color;
        }
    }

    /// Absolute-or-project-relative descriptor path
    pub fn config_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.project.config_file)
    }

    /// Absolute-or-project-relative build output path
    pub fn build_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.project.build_dir)
    }
}

/// On-disk settings layer; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    pub tool: ToolSection,
    pub project: ProjectSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSection {
    pub program: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSection {
    pub config_file: Option<PathBuf>,
    pub build_dir: Option<PathBuf>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub color: Option<ColorMode>,
}
