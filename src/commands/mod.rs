//! Command handlers for the ipa-deploy binary

pub mod artifacts;
pub mod deploy;
pub mod devices;
mod settings;
pub use settings::resolve_project_dir;
