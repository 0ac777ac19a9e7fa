//! Test environment builder for isolated ipa-deploy testing.
//!
//! Provides `TestEnv` - a temp Tauri project with build output and a fake
//! `cfgutil` shell script, plus helpers to run the ipa-deploy binary.
//!
//! The fake tool answers `list` from `devices.txt` and records every
//! `--ecid <ECID> install-app <PATH>` call in `installs.log`, both next to the
//! script. An `install_fails` marker file makes installs exit 1.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

use super::fixtures::{BUILD_DIR, TAURI_CONF};

const FAKE_CFGUTIL: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
case "$1" in
  list)
    cat "$dir/devices.txt"
    ;;
  --ecid)
    echo "$2 $4" >> "$dir/installs.log"
    if [ -f "$dir/install_fails" ]; then
      echo "Installing..."
      echo "error: device is locked" >&2
      exit 1
    fi
    echo "Installing $(basename "$4") on $2"
    echo "Done."
    ;;
  *)
    echo "unknown command: $1" >&2
    exit 64
    ;;
esac
"#;

/// Result of running an ipa-deploy command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

/// Isolated project plus fake device tool
pub struct TestEnv {
    /// Temporary Tauri project directory
    pub project_root: TempDir,
    /// Holds the fake tool and its logs; doubles as an empty config home
    pub tool_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Path to the fake cfgutil
    pub fn tool_path(&self) -> PathBuf {
        self.tool_dir.path().join("cfgutil")
    }

    /// `ECID PATH` pairs the fake tool was asked to install, in call order
    pub fn installs(&self) -> Vec<String> {
        std::fs::read_to_string(self.tool_dir.path().join("installs.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Run ipa-deploy against this project with `-C <project>`
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run ipa-deploy with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("-C")
            .arg(self.project_root.path())
            .args(args)
            .stdin(Stdio::null())
            .env_remove("RUST_LOG")
            .env_remove("IPA_DEPLOY_BUILD_DIR")
            .env_remove("IPA_DEPLOY_PATTERN")
            .env_remove("IPA_DEPLOY_PROJECT_CONFIG")
            .env_remove("IPA_DEPLOY_COLOR")
            .env("IPA_DEPLOY_TOOL", self.tool_path())
            .env(
                "IPA_DEPLOY_USER_CONFIG_PATH",
                self.tool_dir.path().join("no-user-config.toml"),
            )
            .env("NO_COLOR", "1")
            .env("LC_ALL", "C");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute ipa-deploy");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    tauri_conf: Option<String>,
    artifacts: Vec<String>,
    devices: Vec<String>,
    project_settings: Option<String>,
    install_fails: bool,
}

impl TestEnvBuilder {
    /// Project with a valid descriptor, no builds and no devices
    pub fn new() -> Self {
        Self {
            tauri_conf: Some(TAURI_CONF.to_string()),
            artifacts: Vec::new(),
            devices: Vec::new(),
            project_settings: None,
            install_fails: false,
        }
    }

    /// Replace the tauri.conf.json content
    pub fn with_tauri_conf(mut self, json: &str) -> Self {
        self.tauri_conf = Some(json.to_string());
        self
    }

    /// Do not write src-tauri/tauri.conf.json
    pub fn without_tauri_conf(mut self) -> Self {
        self.tauri_conf = None;
        self
    }

    /// Add a file under the build output, relative to it
    pub fn with_artifact(mut self, relative: &str) -> Self {
        self.artifacts.push(relative.to_string());
        self
    }

    /// Add a line to the fake `cfgutil list` output
    pub fn with_device(mut self, line: &str) -> Self {
        self.devices.push(line.to_string());
        self
    }

    /// Write `.ipa-deploy.toml` in the project
    pub fn with_project_settings(mut self, toml: &str) -> Self {
        self.project_settings = Some(toml.to_string());
        self
    }

    /// Make every install exit 1
    pub fn with_failing_install(mut self) -> Self {
        self.install_fails = true;
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let tool_dir = TempDir::new().expect("Failed to create tool temp dir");

        if let Some(conf) = &self.tauri_conf {
            write_file(&project_root.path().join("src-tauri/tauri.conf.json"), conf);
        }

        let build_root = project_root.path().join(BUILD_DIR);
        std::fs::create_dir_all(&build_root).expect("Failed to create build dir");
        for artifact in &self.artifacts {
            write_file(&build_root.join(artifact), "PK\u{3}\u{4}");
        }

        if let Some(settings) = &self.project_settings {
            write_file(&project_root.path().join(".ipa-deploy.toml"), settings);
        }

        let tool = tool_dir.path().join("cfgutil");
        write_file(&tool, FAKE_CFGUTIL);
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake cfgutil executable");

        let mut listing = self.devices.join("\n");
        if !listing.is_empty() {
            listing.push('\n');
        }
        write_file(&tool_dir.path().join("devices.txt"), &listing);

        if self.install_fails {
            write_file(&tool_dir.path().join("install_fails"), "");
        }

        TestEnv {
            project_root,
            tool_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_ipa-deploy")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
