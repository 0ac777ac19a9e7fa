//! Device records as reported by the device tool

use std::fmt;

use crate::domain::services::ecid::extract_identifier;
use crate::error::DeployResult;

/// One attached device, exactly as the device tool printed it.
///
/// The line is kept verbatim: it is what the operator sees in the device
/// prompt, and the ECID is only resolved once a device has been chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    descriptor: String,
}

impl DeviceRecord {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
        }
    }

    /// The raw descriptor line
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Resolve the ECID embedded in this record.
    pub fn ecid(&self) -> DeployResult<Ecid> {
        extract_identifier(&self.descriptor)
    }
}

impl fmt::Display for DeviceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor)
    }
}

/// Exclusive Chip Identifier of a device.
///
/// Opaque to us: whatever token follows the marker is passed back to the
/// device tool unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ecid(String);

impl Ecid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ecid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
