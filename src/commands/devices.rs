//! Devices command handler

use std::path::Path;

use anyhow::Result;

use ipa_deploy::presentation::factory::create_device_tool;
use ipa_deploy::presentation::{ColorWhen, ToolArgs};
use ipa_deploy::DeviceTool;

use super::settings;
use crate::ui::context::UiContext;
use crate::ui::views::devices::render_device_list;

/// List attached devices with their resolved ECIDs
pub fn cmd_devices(
    project_dir: &Path,
    tool: &ToolArgs,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let loaded = settings::load(project_dir)?;
    let mut resolved = loaded.settings;
    settings::apply_tool_args(&mut resolved, tool);

    let ui = UiContext::new(verbose, color, resolved.output.color);
    settings::print_warnings(&loaded.warnings, &ui, json);

    let device_tool = create_device_tool(&resolved);
    let devices = device_tool.list_devices()?;

    if json {
        let rows: Vec<serde_json::Value> = devices
            .iter()
            .map(|d| {
                serde_json::json!({
                    "descriptor": d.descriptor(),
                    "ecid": d.ecid().ok().map(|e| e.to_string()),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({ "event": "devices", "devices": rows })
        );
        return Ok(());
    }

    print!(
        "{}",
        render_device_list(
            &device_tool.program().display().to_string(),
            &devices,
            ui.color,
            ui.unicode
        )
    );
    Ok(())
}
