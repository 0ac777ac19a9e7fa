//! Device Tool Port
//!
//! The external device-management executable (`cfgutil`), seen as a typed
//! interface. Implementations own all subprocess handling; callers never
//! touch raw tool output.

use crate::domain::entities::{DeploymentCommand, DeviceRecord, Ecid};
use crate::error::DeployResult;

pub trait DeviceTool {
    /// Attached devices, one record per non-blank output line.
    ///
    /// No devices is an empty list, not an error.
    fn list_devices(&self) -> DeployResult<Vec<DeviceRecord>>;

    /// Install the artifact on the device, returning the tool's stdout verbatim.
    fn install(&self, command: &DeploymentCommand) -> DeployResult<String>;

    /// Resolve the ECID of a listed device.
    fn resolve_identifier(&self, device: &DeviceRecord) -> DeployResult<Ecid> {
        device.ecid()
    }
}

impl<T: DeviceTool + ?Sized> DeviceTool for &T {
    fn list_devices(&self) -> DeployResult<Vec<DeviceRecord>> {
        (**self).list_devices()
    }

    fn install(&self, command: &DeploymentCommand) -> DeployResult<String> {
        (**self).install(command)
    }

    fn resolve_identifier(&self, device: &DeviceRecord) -> DeployResult<Ecid> {
        (**self).resolve_identifier(device)
    }
}
