//! Artifacts command handler

use std::path::Path;

use anyhow::Result;

use ipa_deploy::presentation::factory::create_artifact_locator;
use ipa_deploy::presentation::{BuildArgs, ColorWhen};
use ipa_deploy::ArtifactLocator;

use super::settings;
use crate::ui::context::UiContext;
use crate::ui::views::artifacts::render_artifact_list;

/// List the packages a deploy would offer
pub fn cmd_artifacts(
    project_dir: &Path,
    build: &BuildArgs,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let loaded = settings::load(project_dir)?;
    let mut resolved = loaded.settings;
    settings::apply_build_args(&mut resolved, build);

    let ui = UiContext::new(verbose, color, resolved.output.color);
    settings::print_warnings(&loaded.warnings, &ui, json);

    let search_root = resolved.build_path(project_dir);
    let locator = create_artifact_locator(&resolved);
    let artifacts = locator.find_artifacts(&search_root)?;

    if json {
        let paths: Vec<String> = artifacts.iter().map(ToString::to_string).collect();
        println!(
            "{}",
            serde_json::json!({
                "event": "artifacts",
                "search_root": search_root.display().to_string(),
                "pattern": locator.pattern(),
                "artifacts": paths,
            })
        );
        return Ok(());
    }

    print!(
        "{}",
        render_artifact_list(
            &search_root,
            locator.pattern(),
            &artifacts,
            ui.color,
            ui.unicode
        )
    );
    Ok(())
}
