//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Serialize one event; every object carries `"event"` and `"command"`.
fn event_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Declined => serde_json::json!({
            "event": "declined",
            "command": "deploy",
        }),
        DeployEvent::ConfigFound { path } => serde_json::json!({
            "event": "config_found",
            "command": "deploy",
            "path": path.display().to_string(),
        }),
        DeployEvent::ProductName { name } => serde_json::json!({
            "event": "product_name",
            "command": "deploy",
            "name": name,
        }),
        DeployEvent::ArtifactsFound { search_root, count } => serde_json::json!({
            "event": "artifacts_found",
            "command": "deploy",
            "search_root": search_root.display().to_string(),
            "count": count,
        }),
        DeployEvent::ArtifactSelected { artifact } => serde_json::json!({
            "event": "artifact_selected",
            "command": "deploy",
            "path": artifact.to_string(),
        }),
        DeployEvent::DevicesFound { count } => serde_json::json!({
            "event": "devices_found",
            "command": "deploy",
            "count": count,
        }),
        DeployEvent::DeviceSelected { device } => serde_json::json!({
            "event": "device_selected",
            "command": "deploy",
            "descriptor": device.descriptor(),
        }),
        DeployEvent::ReadyToInstall => serde_json::json!({
            "event": "install_start",
            "command": "deploy",
        }),
        DeployEvent::IdentifierResolved { ecid } => serde_json::json!({
            "event": "ecid_resolved",
            "command": "deploy",
            "ecid": ecid.as_str(),
        }),
        DeployEvent::InstallOutput { output } => serde_json::json!({
            "event": "install_output",
            "command": "deploy",
            "output": output,
        }),
        DeployEvent::Deployed { artifact, ecid } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "path": artifact.to_string(),
            "ecid": ecid.as_str(),
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_json(&event));
    }
}
