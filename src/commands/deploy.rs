//! Deploy command handler
//!
//! The interactive flow: checklist, build selection, device selection, install.

use std::path::{Path, PathBuf};

use anyhow::Result;

use ipa_deploy::application::{DeployOptions, DeployOutcome};
use ipa_deploy::infrastructure::JsonEventSink;
use ipa_deploy::presentation::{create_deploy_use_case, BuildArgs, ColorWhen, ToolArgs};
use ipa_deploy::DeployEventSink;

use super::settings;
use crate::ui::context::UiContext;
use crate::ui::events::ConsoleEventSink;
use crate::ui::prompter::DialoguerPrompter;
use crate::ui::views::deploy::{render_deploy_header, render_deploy_summary};

/// Execute the deploy command
#[allow(clippy::too_many_arguments)]
pub fn cmd_deploy(
    project_dir: &Path,
    yes: bool,
    tool: &ToolArgs,
    build: &BuildArgs,
    config: Option<&PathBuf>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let loaded = settings::load(project_dir)?;
    let mut resolved = loaded.settings;
    settings::apply_tool_args(&mut resolved, tool);
    settings::apply_build_args(&mut resolved, build);
    if let Some(config) = config {
        resolved.project.config_file = config.clone();
    }

    let ui = UiContext::new(verbose, color, resolved.output.color);
    settings::print_warnings(&loaded.warnings, &ui, json);

    if !json {
        print!(
            "{}",
            render_deploy_header(project_dir, &resolved, ui.color, ui.unicode)
        );
        println!();
    }

    let mut options = DeployOptions::new(
        resolved.config_path(project_dir),
        resolved.build_path(project_dir),
    );
    options.skip_confirmation = yes;

    let use_case = create_deploy_use_case(&resolved);
    let prompter = DialoguerPrompter::new(ui);
    let sink: Box<dyn DeployEventSink> = if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(&ui))
    };

    let outcome = use_case.execute(&options, &prompter, sink.as_ref())?;

    if let DeployOutcome::Deployed(report) = outcome {
        if !json && verbose > 0 {
            println!();
            print!("{}", render_deploy_summary(&report, ui.color, ui.unicode));
        }
    }

    Ok(())
}
