//! Tests for the settings module

use super::loader::load_layered_with;
use super::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn test_settings_default() {
    let settings = Settings::default();

    assert_eq!(settings.tool.program, PathBuf::from("cfgutil"));
    assert_eq!(
        settings.project.config_file,
        PathBuf::from("src-tauri/tauri.conf.json")
    );
    assert_eq!(
        settings.project.build_dir,
        PathBuf::from("src-tauri/gen/apple/build")
    );
    assert_eq!(settings.project.pattern, "*.ipa");
    assert_eq!(settings.output.color, ColorMode::Auto);
}

#[test]
fn test_settings_parse_toml() {
    let toml = r#"
[tool]
program = "/usr/local/bin/cfgutil"

[project]
build_dir = "ios/build"
pattern = "*-release.ipa"

[output]
color = "never"
"#;

    let file: SettingsFile = toml::from_str(toml).unwrap();
    let mut settings = Settings::default();
    settings.merge(file);

    assert_eq!(settings.tool.program, PathBuf::from("/usr/local/bin/cfgutil"));
    assert_eq!(settings.project.build_dir, PathBuf::from("ios/build"));
    assert_eq!(settings.project.pattern, "*-release.ipa");
    assert_eq!(settings.output.color, ColorMode::Never);
    // untouched keys keep their defaults
    assert_eq!(
        settings.project.config_file,
        PathBuf::from("src-tauri/tauri.conf.json")
    );
}

#[test]
fn test_paths_resolve_against_project_dir() {
    let settings = Settings::default();
    let project = Path::new("/work/app");

    assert_eq!(
        settings.config_path(project),
        PathBuf::from("/work/app/src-tauri/tauri.conf.json")
    );
    assert_eq!(
        settings.build_path(project),
        PathBuf::from("/work/app/src-tauri/gen/apple/build")
    );
}

#[test]
fn test_absolute_build_dir_is_kept() {
    let mut settings = Settings::default();
    settings.project.build_dir = PathBuf::from("/tmp/build");
    assert_eq!(
        settings.build_path(Path::new("/work/app")),
        PathBuf::from("/tmp/build")
    );
}

#[test]
fn test_load_file_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_SETTINGS_FILE);
    fs::write(&path, "[project]\npatern = \"*.ipa\"\n").unwrap();

    let (_, warnings) = load_file(&path).unwrap();

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "patern");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("pattern"));
}

#[test]
fn test_load_file_rejects_malformed_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_SETTINGS_FILE);
    fs::write(&path, "[project\nbuild_dir = ").unwrap();

    let err = load_file(&path).unwrap_err();
    assert!(matches!(err, crate::DeployError::Settings { .. }));
}

#[test]
fn test_load_file_rejects_bad_color() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(PROJECT_SETTINGS_FILE);
    fs::write(&path, "[output]\ncolor = \"sometimes\"\n").unwrap();

    assert!(load_file(&path).is_err());
}

#[test]
fn test_project_layer_overrides_user_layer() {
    let project = tempdir().unwrap();
    let home = tempdir().unwrap();
    let user_file = home.path().join("config.toml");
    fs::write(&user_file, "[tool]\nprogram = \"user-cfgutil\"\n[output]\ncolor = \"always\"\n")
        .unwrap();
    fs::write(
        project.path().join(PROJECT_SETTINGS_FILE),
        "[tool]\nprogram = \"project-cfgutil\"\n",
    )
    .unwrap();

    let env = env_from(&[("IPA_DEPLOY_USER_CONFIG_PATH", user_file.to_str().unwrap())]);
    let loaded = load_layered_with(project.path(), env).unwrap();

    assert_eq!(loaded.settings.tool.program, PathBuf::from("project-cfgutil"));
    assert_eq!(loaded.settings.output.color, ColorMode::Always);
    assert_eq!(loaded.sources.len(), 2);
}

#[test]
fn test_missing_layers_fall_back_to_defaults() {
    let project = tempdir().unwrap();
    let env = env_from(&[(
        "IPA_DEPLOY_USER_CONFIG_PATH",
        project.path().join("absent.toml").to_str().unwrap(),
    )]);

    let loaded = load_layered_with(project.path(), env).unwrap();

    assert_eq!(loaded.settings, Settings::default());
    assert!(loaded.sources.is_empty());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn test_env_overrides_win_over_files() {
    let project = tempdir().unwrap();
    fs::write(
        project.path().join(PROJECT_SETTINGS_FILE),
        "[project]\nbuild_dir = \"from-file\"\n",
    )
    .unwrap();

    let env = env_from(&[
        (
            "IPA_DEPLOY_USER_CONFIG_PATH",
            project.path().join("absent.toml").to_str().unwrap(),
        ),
        ("IPA_DEPLOY_BUILD_DIR", "from-env"),
        ("IPA_DEPLOY_TOOL", "/opt/cfgutil"),
        ("IPA_DEPLOY_PATTERN", "*.ipa"),
        ("IPA_DEPLOY_PROJECT_CONFIG", "tauri.ios.conf.json"),
        ("IPA_DEPLOY_COLOR", "NEVER"),
    ]);
    let loaded = load_layered_with(project.path(), env).unwrap();

    assert_eq!(loaded.settings.project.build_dir, PathBuf::from("from-env"));
    assert_eq!(loaded.settings.tool.program, PathBuf::from("/opt/cfgutil"));
    assert_eq!(
        loaded.settings.project.config_file,
        PathBuf::from("tauri.ios.conf.json")
    );
    assert_eq!(loaded.settings.output.color, ColorMode::Never);
}

#[test]
fn test_invalid_env_color_is_ignored() {
    let settings = with_env_overrides(
        Settings::default(),
        env_from(&[("IPA_DEPLOY_COLOR", "rainbow")]),
    );
    assert_eq!(settings.output.color, ColorMode::Auto);
}

#[test]
fn test_empty_env_values_are_ignored() {
    let settings = with_env_overrides(Settings::default(), env_from(&[("IPA_DEPLOY_TOOL", "")]));
    assert_eq!(settings.tool.program, PathBuf::from("cfgutil"));
}
