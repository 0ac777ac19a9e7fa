//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain parsing or I/O (those are in Domain and Infrastructure)
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Confirm, locate, select, resolve, install

pub mod deploy;

pub use deploy::{DeployOptions, DeployOutcome, DeployReport, DeployUseCase};
