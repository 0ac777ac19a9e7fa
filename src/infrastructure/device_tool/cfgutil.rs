//! Apple Configurator `cfgutil` adapter
//!
//! Implements the DeviceTool port by running the `cfgutil` executable:
//!
//! - `cfgutil list`
//! - `cfgutil --ecid <ECID> install-app <path/to/App.ipa>`
//!
//! Calls block until the tool exits; there is no timeout.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::domain::entities::{DeploymentCommand, DeviceRecord};
use crate::domain::ports::DeviceTool;
use crate::domain::services::parse_device_list;
use crate::error::{DeployError, DeployResult};

/// `cfgutil` subprocess adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CfgutilTool {
    /// Executable name or path
    program: PathBuf,
}

impl CfgutilTool {
    /// Executable looked up on PATH when nothing else is configured
    pub const DEFAULT_PROGRAM: &'static str = "cfgutil";

    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Argument vector for an install
    pub fn install_args(command: &DeploymentCommand) -> Vec<OsString> {
        vec![
            OsString::from("--ecid"),
            OsString::from(command.ecid.as_str()),
            OsString::from("install-app"),
            command.artifact.path().as_os_str().to_os_string(),
        ]
    }

    fn tool_name(&self) -> String {
        self.program.display().to_string()
    }

    fn run(&self, args: &[OsString]) -> DeployResult<Output> {
        log::debug!("running {} {:?}", self.program.display(), args);

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| DeployError::ToolUnavailable {
                tool: self.tool_name(),
                message: if e.kind() == std::io::ErrorKind::NotFound {
                    "executable not found".to_string()
                } else {
                    e.to_string()
                },
            })?;

        log::debug!(
            "{} exited with {:?} ({} bytes stdout, {} bytes stderr)",
            self.program.display(),
            output.status.code(),
            output.stdout.len(),
            output.stderr.len()
        );
        log::trace!("stdout: {}", String::from_utf8_lossy(&output.stdout));

        Ok(output)
    }
}

impl Default for CfgutilTool {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl DeviceTool for CfgutilTool {
    fn list_devices(&self) -> DeployResult<Vec<DeviceRecord>> {
        let output = self.run(&[OsString::from("list")])?;

        if !output.status.success() {
            return Err(DeployError::ToolFailed {
                tool: self.tool_name(),
                code: output.status.code(),
                output: diagnostic_output(&output),
            });
        }

        let devices = parse_device_list(&String::from_utf8_lossy(&output.stdout));
        log::info!("{} device(s) attached", devices.len());
        Ok(devices)
    }

    fn install(&self, command: &DeploymentCommand) -> DeployResult<String> {
        let output = self.run(&Self::install_args(command))?;

        if !output.status.success() {
            return Err(DeployError::DeploymentFailed {
                identifier: command.ecid.to_string(),
                artifact: command.artifact.path().to_path_buf(),
                code: output.status.code(),
                output: diagnostic_output(&output),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Stdout and stderr of a failed run, trimmed and joined
fn diagnostic_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    [stdout.trim(), stderr.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Artifact, Ecid};

    #[test]
    fn install_args_follow_cfgutil_syntax() {
        let command = DeploymentCommand::new(Artifact::new("/b/App.ipa"), Ecid::new("0xAB"));
        let args = CfgutilTool::install_args(&command);
        assert_eq!(
            args,
            vec![
                OsString::from("--ecid"),
                OsString::from("0xAB"),
                OsString::from("install-app"),
                OsString::from("/b/App.ipa"),
            ]
        );
    }

    #[test]
    fn default_program_is_cfgutil() {
        assert_eq!(CfgutilTool::default().program(), Path::new("cfgutil"));
    }

    #[test]
    fn missing_executable_is_tool_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let tool = CfgutilTool::new(dir.path().join("no-such-cfgutil"));
        let err = tool.list_devices().unwrap_err();
        assert!(matches!(err, DeployError::ToolUnavailable { .. }));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        fn fake_tool(dir: &Path, body: &str) -> CfgutilTool {
            let path = dir.join("cfgutil");
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            CfgutilTool::new(path)
        }

        #[test]
        fn list_devices_splits_non_blank_lines() {
            let dir = tempfile::tempdir().unwrap();
            let tool = fake_tool(dir.path(), "printf 'Device A\\nDevice B\\n\\n'");

            let devices = tool.list_devices().unwrap();
            let descriptors: Vec<&str> = devices.iter().map(|d| d.descriptor()).collect();
            assert_eq!(descriptors, vec!["Device A", "Device B"]);
        }

        #[test]
        fn list_devices_is_repeatable() {
            let dir = tempfile::tempdir().unwrap();
            let tool = fake_tool(
                dir.path(),
                "printf 'Type: iPhone\\tECID: 0x1\\tName: A\\n'",
            );

            assert_eq!(tool.list_devices().unwrap(), tool.list_devices().unwrap());
        }

        #[test]
        fn list_devices_with_no_output_is_empty() {
            let dir = tempfile::tempdir().unwrap();
            let tool = fake_tool(dir.path(), "exit 0");
            assert!(tool.list_devices().unwrap().is_empty());
        }

        #[test]
        fn failing_list_is_tool_failed() {
            let dir = tempfile::tempdir().unwrap();
            let tool = fake_tool(dir.path(), "echo 'no automation tools' >&2\nexit 2");

            match tool.list_devices().unwrap_err() {
                DeployError::ToolFailed { code, output, .. } => {
                    assert_eq!(code, Some(2));
                    assert_eq!(output, "no automation tools");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[test]
        fn install_passes_ecid_and_path_and_returns_stdout() {
            let dir = tempfile::tempdir().unwrap();
            let tool = fake_tool(dir.path(), "echo \"$1 $2 $3 $4\"");
            let command = DeploymentCommand::new(Artifact::new("/b/App.ipa"), Ecid::new("0xAB"));

            let output = tool.install(&command).unwrap();
            assert_eq!(output, "--ecid 0xAB install-app /b/App.ipa\n");
        }

        #[test]
        fn failing_install_carries_diagnostics() {
            let dir = tempfile::tempdir().unwrap();
            let tool = fake_tool(dir.path(), "echo 'installing'\necho 'device locked' >&2\nexit 1");
            let command = DeploymentCommand::new(Artifact::new("/b/App.ipa"), Ecid::new("0xAB"));

            match tool.install(&command).unwrap_err() {
                DeployError::DeploymentFailed {
                    identifier,
                    artifact,
                    code,
                    output,
                } => {
                    assert_eq!(identifier, "0xAB");
                    assert_eq!(artifact, PathBuf::from("/b/App.ipa"));
                    assert_eq!(code, Some(1));
                    assert_eq!(output, "installing\ndevice locked");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }
}
