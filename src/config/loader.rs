//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::types::{ColorMode, Settings, SettingsFile};

/// Project-level settings file name
pub const PROJECT_SETTINGS_FILE: &str = ".ipa-deploy.toml";

/// Non-fatal settings warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Effective settings plus where they came from
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: Vec<SettingsWarning>,
    pub sources: Vec<PathBuf>,
}

/// Load one settings file and collect unknown keys as warnings.
pub fn load_file(path: &Path) -> DeployResult<(SettingsFile, Vec<SettingsWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let file: SettingsFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::Settings {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            SettingsWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((file, warnings))
}

/// Defaults, then user settings, then project settings, then environment.
pub fn load_layered(project_dir: &Path) -> DeployResult<LoadedSettings> {
    load_layered_with(project_dir, |key| std::env::var(key).ok())
}

pub(crate) fn load_layered_with(
    project_dir: &Path,
    get_env: impl Fn(&str) -> Option<String>,
) -> DeployResult<LoadedSettings> {
    let mut loaded = LoadedSettings::default();

    let candidates = [
        user_settings_path_with(&get_env),
        Some(project_dir.join(PROJECT_SETTINGS_FILE)),
    ];

    for path in candidates.into_iter().flatten() {
        if !path.is_file() {
            continue;
        }
        let (file, warnings) = load_file(&path)?;
        log::debug!("applied settings from {}", path.display());
        loaded.settings.merge(file);
        loaded.warnings.extend(warnings);
        loaded.sources.push(path);
    }

    loaded.settings = with_env_overrides(loaded.settings, get_env);
    Ok(loaded)
}

/// Location of the user-level settings file
pub fn user_settings_path() -> Option<PathBuf> {
    user_settings_path_with(&|key: &str| std::env::var(key).ok())
}

fn user_settings_path_with(get_env: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(path) = get_env("IPA_DEPLOY_USER_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }

    get_env("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("ipa-deploy").join("config.toml"))
}

/// Apply environment variable overrides (IPA_DEPLOY_* prefix)
pub fn with_env_overrides(
    mut settings: Settings,
    get_env: impl Fn(&str) -> Option<String>,
) -> Settings {
    if let Some(tool) = get_env("IPA_DEPLOY_TOOL").filter(|v| !v.is_empty()) {
        settings.tool.program = PathBuf::from(tool);
    }

    if let Some(config) = get_env("IPA_DEPLOY_PROJECT_CONFIG").filter(|v| !v.is_empty()) {
        settings.project.config_file = PathBuf::from(config);
    }

    if let Some(build_dir) = get_env("IPA_DEPLOY_BUILD_DIR").filter(|v| !v.is_empty()) {
        settings.project.build_dir = PathBuf::from(build_dir);
    }

    if let Some(pattern) = get_env("IPA_DEPLOY_PATTERN").filter(|v| !v.is_empty()) {
        settings.project.pattern = pattern;
    }

    if let Some(color) = get_env("IPA_DEPLOY_COLOR") {
        match ColorMode::parse(&color) {
            Some(mode) => settings.output.color = mode,
            None => log::warn!("ignoring IPA_DEPLOY_COLOR={}: expected auto, always or never", color),
        }
    }

    settings
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tool",
        "program",
        "project",
        "config_file",
        "build_dir",
        "pattern",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
