//! Settings resolution shared by every command
//!
//! Layers from `ipa_deploy::config`, then the command-line overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ipa_deploy::config::{load_layered, LoadedSettings, SettingsWarning};
use ipa_deploy::presentation::{BuildArgs, ToolArgs};
use ipa_deploy::Settings;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;

/// `-C` when given, otherwise the working directory.
pub fn resolve_project_dir(cli: Option<&Path>) -> Result<PathBuf> {
    match cli {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().context("cannot determine the current directory"),
    }
}

pub fn load(project_dir: &Path) -> Result<LoadedSettings> {
    let loaded = load_layered(project_dir)?;
    for source in &loaded.sources {
        log::info!("settings loaded from {}", source.display());
    }
    Ok(loaded)
}

pub fn apply_tool_args(settings: &mut Settings, args: &ToolArgs) {
    if let Some(tool) = &args.tool {
        settings.tool.program = tool.clone();
    }
}

pub fn apply_build_args(settings: &mut Settings, args: &BuildArgs) {
    if let Some(build_dir) = &args.build_dir {
        settings.project.build_dir = build_dir.clone();
    }
    if let Some(pattern) = &args.pattern {
        settings.project.pattern = pattern.clone();
    }
}

pub fn print_warnings(warnings: &[SettingsWarning], ui: &UiContext, json: bool) {
    if json || warnings.is_empty() {
        return;
    }

    let mut block = WarningBlock::new("Unknown settings ignored");
    for warning in warnings {
        block.add_line(describe(warning));
    }
    eprint!("{}", block.render(ui.color, ui.unicode));
}

fn describe(warning: &SettingsWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut text = format!("'{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        text.push_str(&format!(". Did you mean '{}'?", suggestion));
    }
    text
}
