//! Error types for ipa-deploy
//!
//! Every failure in the deployment sequence is a variant here. Errors are raised
//! where they happen and travel up with `?`; nothing in the library retries.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deployment operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deployment operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Project descriptor (tauri.conf.json) is missing
    #[error("project config not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Project descriptor is not valid JSON
    #[error("invalid project config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Required field absent or empty in the project descriptor
    #[error("missing required field '{field}' in {path}")]
    MissingField { field: String, path: PathBuf },

    /// No deployable package under the build directory
    #[error("no '{pattern}' build found under {search_root}")]
    NoArtifact {
        search_root: PathBuf,
        pattern: String,
    },

    /// Device tool reported no attached devices
    #[error("no devices found")]
    NoDevice,

    /// Descriptor has no token after the ECID marker
    #[error("ECID not found in device descriptor '{descriptor}'")]
    IdentifierNotFound { descriptor: String },

    /// Install subcommand exited non-zero
    #[error("deployment of {artifact} to {identifier} failed ({}): {output}", exit_label(.code))]
    DeploymentFailed {
        identifier: String,
        artifact: PathBuf,
        code: Option<i32>,
        output: String,
    },

    /// Device tool could not be started at all
    #[error("could not run device tool '{tool}': {message}")]
    ToolUnavailable { tool: String, message: String },

    /// Device tool ran but exited non-zero outside of an install
    #[error("device tool '{tool}' failed ({}): {output}", exit_label(.code))]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        output: String,
    },

    /// Artifact glob pattern is not a valid glob
    #[error("invalid artifact pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Settings file exists but cannot be parsed
    #[error("invalid settings in {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// Operator dismissed a required prompt
    #[error("{prompt} cancelled by user")]
    PromptCancelled { prompt: String },

    /// A prompt needs an answer but there is no terminal to ask on
    #[error("{prompt}: no interactive terminal to answer on")]
    NotInteractive { prompt: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_field() {
        let err = DeployError::MissingField {
            field: "productName".to_string(),
            path: PathBuf::from("src-tauri/tauri.conf.json"),
        };
        assert_eq!(
            err.to_string(),
            "missing required field 'productName' in src-tauri/tauri.conf.json"
        );
    }

    #[test]
    fn test_error_display_deployment_failed_with_code() {
        let err = DeployError::DeploymentFailed {
            identifier: "0x1234".to_string(),
            artifact: PathBuf::from("App.ipa"),
            code: Some(3),
            output: "device locked".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "deployment of App.ipa to 0x1234 failed (exit code 3): device locked"
        );
    }

    #[test]
    fn test_error_display_deployment_failed_by_signal() {
        let err = DeployError::DeploymentFailed {
            identifier: "0x1234".to_string(),
            artifact: PathBuf::from("App.ipa"),
            code: None,
            output: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: DeployError = io.into();
        assert!(matches!(err, DeployError::Io(_)));
    }
}
