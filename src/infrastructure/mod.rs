//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `device_tool/` - `cfgutil` subprocess adapter
//! - `fs/` - Build output scanning
//! - `config/` - Project descriptor reader
//! - `events/` - Machine-readable progress output

pub mod config;
pub mod device_tool;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use config::TauriConfigReader;
pub use device_tool::CfgutilTool;
pub use events::JsonEventSink;
pub use fs::FsArtifactLocator;
