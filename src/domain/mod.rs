//! Domain Layer
//!
//! Pure deployment logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core records (DeviceRecord, Artifact, ProjectConfig, DeploymentCommand)
//! - `services/` - Parsing of the device tool's free-text output
//! - `ports/` - Interface definitions for infrastructure and the operator
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the file system
//! 2. **Ports & Adapters** - The device tool, the build tree, the project descriptor
//!    and the operator are all reached through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
