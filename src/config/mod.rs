//! Settings for ipa-deploy
//!
//! Settings hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (IPA_DEPLOY_*)
//! 3. Project settings (<project>/.ipa-deploy.toml)
//! 4. User settings (~/.config/ipa-deploy/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Settings are read-only: nothing is ever written back.

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    load_file, load_layered, user_settings_path, with_env_overrides, LoadedSettings,
    SettingsWarning, PROJECT_SETTINGS_FILE,
};
pub use types::{
    ColorMode, OutputSection, OutputSettings, ProjectSection, ProjectSettings, Settings,
    SettingsFile, ToolSection, ToolSettings,
};
