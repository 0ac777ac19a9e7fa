//! Console Event Sink
//!
//! Human-readable progress lines for a deployment run.

use std::io::{self, Write};
use std::sync::Mutex;

use ipa_deploy::{DeployEvent, DeployEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::deploy::render_declined;

pub const READY_MESSAGE: &str =
    "Make sure your mobile phone is connected and ready to receive the IPA";
pub const DEPLOYED_MESSAGE: &str = "IPA deployed to your device";

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn stdout(ui: &UiContext) -> Self {
        Self::with_writer(io::stdout(), ui)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, ui: &UiContext) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color: ui.color,
            unicode: ui.unicode,
            verbose: ui.verbose,
        }
    }

    fn write(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }

    fn status(&self, icon: Icon, message: &str) -> String {
        format!("{} {}\n", icon.colored(self.color, self.unicode), message)
    }

    fn render(&self, event: &DeployEvent) -> Option<String> {
        let line = match event {
            DeployEvent::Declined => render_declined(self.color),
            DeployEvent::ConfigFound { path } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                self.status(Icon::Success, &format!("{} found", name))
            }
            DeployEvent::ProductName { name } => {
                let name = ColoredText::info(name.as_str()).bold().render(self.color);
                self.status(Icon::Success, &format!("productName found: {}", name))
            }
            DeployEvent::ArtifactsFound { search_root, count } if self.verbose > 0 => self.status(
                Icon::Arrow,
                &format!("{} build(s) under {}", count, search_root.display()),
            ),
            DeployEvent::DevicesFound { count } if self.verbose > 0 => {
                self.status(Icon::Arrow, &format!("{} device(s) attached", count))
            }
            DeployEvent::ReadyToInstall => self.status(Icon::Success, READY_MESSAGE),
            DeployEvent::IdentifierResolved { ecid } => {
                let ecid = ColoredText::dim(ecid.as_str()).render(self.color);
                self.status(Icon::Arrow, &format!("ECID {}", ecid))
            }
            DeployEvent::InstallOutput { output } => {
                if output.is_empty() || output.ends_with('\n') {
                    output.clone()
                } else {
                    format!("{}\n", output)
                }
            }
            DeployEvent::Deployed { .. } => self.status(
                Icon::Success,
                &ColoredText::success(DEPLOYED_MESSAGE).render(self.color),
            ),
            // Selections are already echoed by the prompt itself.
            _ => return None,
        };
        Some(line)
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        log::debug!("{:?}", event);
        if let Some(text) = self.render(&event) {
            self.write(&text);
        }
    }
}
