//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{BuildArgs, Cli, ColorWhen, Commands, ToolArgs};
pub use factory::create_deploy_use_case;
