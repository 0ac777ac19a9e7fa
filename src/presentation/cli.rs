//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --project-dir) are inherited by all subcommands
//! - Running without a subcommand is the interactive `deploy` flow

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ipa-deploy - install an iOS build on a connected device through cfgutil
#[derive(Parser, Debug)]
#[command(name = "ipa-deploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'ipa-deploy' without arguments to start an interactive deployment.")]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project directory (default: current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a build and a device, then install (default)
    Deploy {
        /// Skip the prerequisite checklist confirmation
        #[arg(short, long)]
        yes: bool,

        #[command(flatten)]
        tool: ToolArgs,

        #[command(flatten)]
        build: BuildArgs,

        /// Project descriptor (default: src-tauri/tauri.conf.json)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List attached devices and their ECIDs
    Devices {
        #[command(flatten)]
        tool: ToolArgs,
    },

    /// List deployable packages in the build output
    Artifacts {
        #[command(flatten)]
        build: BuildArgs,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Deploy {
            yes: false,
            tool: ToolArgs::default(),
            build: BuildArgs::default(),
            config: None,
        }
    }
}

/// Device tool override
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    /// Device tool executable (default: cfgutil)
    #[arg(long, value_name = "PATH")]
    pub tool: Option<PathBuf>,
}

/// Build output overrides
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    /// Build output directory searched for packages (default: src-tauri/gen/apple/build)
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Glob matched against package file names (default: *.ipa)
    #[arg(long)]
    pub pattern: Option<String>,
}
