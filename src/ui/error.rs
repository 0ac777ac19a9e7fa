use ipa_deploy::DeployError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_deploy_error(err: &DeployError) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_deploy_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_deploy_error_with(
    err: &DeployError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    error_block(err).render(supports_color, supports_unicode)
}

fn error_block(err: &DeployError) -> ErrorBlock {
    match err {
        DeployError::ConfigNotFound { path } => {
            ErrorBlock::new("Project config not found", "tauri.conf.json does not exist")
                .with_subject(path.display().to_string())
                .with_fix("Run from the Tauri project root, or pass -C <DIR> / --config <FILE>.")
        }
        DeployError::ConfigParse { path, message } => {
            ErrorBlock::new("Invalid project config", message.as_str())
                .with_subject(path.display().to_string())
                .with_fix("tauri.conf.json must contain a single JSON object.")
        }
        DeployError::MissingField { field, path } => ErrorBlock::new(
            "Invalid project config",
            format!("missing required field '{}'", field),
        )
        .with_subject(path.display().to_string())
        .with_fix(format!(
            "Add a non-empty \"{}\" to the descriptor:\n  {{ \"{}\": \"My App\" }}",
            field, field
        )),
        DeployError::NoArtifact {
            search_root,
            pattern,
        } => ErrorBlock::new(
            "No IPA build found",
            format!("nothing matching '{}' in the build output", pattern),
        )
        .with_subject(search_root.display().to_string())
        .with_fix("Build the iOS app first (tauri ios build), or point --build-dir at its output."),
        DeployError::NoDevice => ErrorBlock::new("No device found", "cfgutil list reported no devices")
            .with_fix("Connect the device with a USB cable, unlock it, and trust this computer."),
        DeployError::IdentifierNotFound { descriptor } => ErrorBlock::new(
            "ECID not found",
            "the selected device line has no value after the ECID marker",
        )
        .with_subject(descriptor.as_str())
        .with_fix("Check `cfgutil list` by hand; the device may still be booting or pairing."),
        DeployError::DeploymentFailed {
            identifier,
            artifact,
            output,
            ..
        } => ErrorBlock::new("Deployment failed", err_headline(err))
            .with_subject(format!("{} -> {}", artifact.display(), identifier))
            .with_details(output.as_str())
            .with_fix("Keep the device unlocked during the install and check its provisioning profile."),
        DeployError::ToolUnavailable { tool, message } => ErrorBlock::new(
            "Device tool unavailable",
            message.as_str(),
        )
        .with_subject(tool.as_str())
        .with_fix(
            "Install Apple Configurator 2 and its Automation Tools, or pass --tool <PATH>.",
        ),
        DeployError::ToolFailed { tool, output, .. } => {
            ErrorBlock::new("Device tool failed", err_headline(err))
                .with_subject(tool.as_str())
                .with_details(output.as_str())
        }
        DeployError::InvalidPattern { .. } => ErrorBlock::new("Invalid pattern", err.to_string())
            .with_fix("Use a glob such as '*.ipa'."),
        DeployError::Settings { path, message } => {
            ErrorBlock::new("Invalid settings", message.as_str())
                .with_subject(path.display().to_string())
                .with_fix("Fix the TOML syntax, or remove the file to use the defaults.")
        }
        DeployError::PromptCancelled { .. } => ErrorBlock::new("Cancelled", err.to_string()),
        DeployError::NotInteractive { .. } => {
            ErrorBlock::new("No terminal", err.to_string()).with_fix(
                "Run from an interactive terminal, or pass --yes and leave a single build and device.",
            )
        }
        DeployError::Io(_) => ErrorBlock::new("ERROR", err.to_string()),
    }
}

/// First line of the error message, without the tool output tail.
fn err_headline(err: &DeployError) -> String {
    let message = err.to_string();
    match message.split_once("): ") {
        Some((head, _)) => format!("{})", head),
        None => message,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        return format_deploy_error(deploy);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    log::debug!("run failed: {:?}", err);

    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        println!("{}", output);
        return;
    }

    eprint!("{}", format_error(err));
}
