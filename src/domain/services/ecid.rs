//! Device tool output parsing
//!
//! `cfgutil list` prints one human-oriented line per device, e.g.
//!
//! ```text
//! Type: iPhone15,2	ECID: 0x1A2B3C4D5E6F	UDID: 00008120-...	Location: 0x100000	Name: iPhone
//! ```
//!
//! The format is not a stable interface. Field count and order vary between
//! devices and tool versions, so the ECID is located relative to its marker
//! token instead of by column.

use crate::domain::entities::{DeviceRecord, Ecid};
use crate::error::{DeployError, DeployResult};

/// Substring identifying the token that precedes the ECID value.
pub const ECID_MARKER: &str = "ECID";

/// Split `list` output into device records, dropping blank lines.
pub fn parse_device_list(stdout: &str) -> Vec<DeviceRecord> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(DeviceRecord::new)
        .collect()
}

/// Return the token immediately after the first token containing `ECID`.
///
/// Tabs count as spaces. A marker that is missing, or that ends the line,
/// is an error rather than an empty identifier.
///
/// If the tool ever prints marker and value as one token (`ECID:0x1A`), the
/// *next* token is returned. That is a known limitation of the format.
pub fn extract_identifier(descriptor: &str) -> DeployResult<Ecid> {
    let normalized = descriptor.replace('\t', " ");
    let mut tokens = normalized.split(' ').filter(|t| !t.is_empty());

    let not_found = || DeployError::IdentifierNotFound {
        descriptor: descriptor.to_string(),
    };

    tokens
        .by_ref()
        .find(|t| t.contains(ECID_MARKER))
        .ok_or_else(not_found)?;

    tokens.next().map(Ecid::new).ok_or_else(not_found)
}
