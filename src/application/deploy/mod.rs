//! Deploy Module
//!
//! Orchestrates the deployment of an `.ipa` to one attached device.
//!
//! ## Structure
//!
//! - `options` - Run inputs (`DeployOptions`)
//! - `prerequisites` - The operator checklist shown before anything runs
//! - `result` - Outcome types (`DeployOutcome`, `DeployReport`)
//! - `use_case` - The linear workflow (`DeployUseCase`)

mod options;
pub mod prerequisites;
mod result;
mod use_case;


pub use options::DeployOptions;
pub use result::{DeployOutcome, DeployReport};
pub use use_case::{DeployUseCase, SELECT_ARTIFACT_PROMPT, SELECT_DEVICE_PROMPT};
