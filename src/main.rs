//! ipa-deploy CLI - install an iOS build on a connected device
//!
//! Usage: ipa-deploy [COMMAND]
//!
//! Commands:
//!   deploy     Pick a build and a device, then install (default)
//!   devices    List attached devices and their ECIDs
//!   artifacts  List deployable packages in the build output

use std::io::ErrorKind;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use ipa_deploy::presentation::{Cli, Commands};
use ipa_deploy::DeployError;

mod commands;
mod ui;

/// Exit status after Ctrl+C
const INTERRUPTED_EXIT_CODE: i32 = 130;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    install_interrupt_handler();

    let json = cli.json;
    if let Err(err) = run(cli) {
        let code = exit_code(&err);
        if code == INTERRUPTED_EXIT_CODE {
            restore_terminal();
        } else {
            ui::error::print_error(&err, json);
        }
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_dir = commands::resolve_project_dir(cli.project_dir.as_deref())?;
    log::debug!("project directory: {}", project_dir.display());

    match cli.command.unwrap_or_default() {
        Commands::Deploy {
            yes,
            tool,
            build,
            config,
        } => commands::deploy::cmd_deploy(
            &project_dir,
            yes,
            &tool,
            &build,
            config.as_ref(),
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Devices { tool } => {
            commands::devices::cmd_devices(&project_dir, &tool, cli.json, cli.verbose, cli.color)
        }
        Commands::Artifacts { build } => {
            commands::artifacts::cmd_artifacts(&project_dir, &build, cli.json, cli.verbose, cli.color)
        }
    }
}

/// `-v` info, `-vv` debug, `-vvv` trace; `RUST_LOG` overrides.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        restore_terminal();
        std::process::exit(INTERRUPTED_EXIT_CODE);
    });
    if let Err(err) = result {
        log::warn!("cannot install Ctrl+C handler: {}", err);
    }
}

/// Prompts hide the cursor while they run.
fn restore_terminal() {
    let _ = crossterm::execute!(std::io::stderr(), crossterm::cursor::Show);
    eprintln!();
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DeployError>() {
        Some(DeployError::Io(io)) if io.kind() == ErrorKind::Interrupted => INTERRUPTED_EXIT_CODE,
        _ => 1,
    }
}
