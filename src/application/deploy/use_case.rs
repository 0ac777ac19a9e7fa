//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Confirm the prerequisites with the operator
//! 2. Read the project descriptor
//! 3. Locate packages in the build output
//! 4. Let the operator pick a package
//! 5. List attached devices
//! 6. Let the operator pick a device
//! 7. Resolve the device's ECID
//! 8. Install
//! 9. Report
//!
//! Steps run strictly in order. The first failure ends the run; nothing is
//! retried and there is nothing to roll back, since the device tool owns
//! every side effect.

use crate::domain::entities::{Artifact, DeploymentCommand, DeviceRecord};
use crate::domain::ports::{
    ArtifactLocator, DeployEvent, DeployEventSink, DeviceTool, ProjectConfigReader, Prompter,
};
use crate::error::{DeployError, DeployResult};

use super::options::DeployOptions;
use super::prerequisites;
use super::result::{DeployOutcome, DeployReport};

pub const SELECT_ARTIFACT_PROMPT: &str = "Select the IPA file to deploy";
pub const SELECT_DEVICE_PROMPT: &str = "Select a device to deploy the IPA";

/// Deploy use case - the whole interactive workflow
///
/// Parameterized by its ports so tests can drive it without a device,
/// a build tree, or a terminal.
pub struct DeployUseCase<DT, AL, CR>
where
    DT: DeviceTool,
    AL: ArtifactLocator,
    CR: ProjectConfigReader,
{
    device_tool: DT,
    artifact_locator: AL,
    config_reader: CR,
}

impl<DT, AL, CR> DeployUseCase<DT, AL, CR>
where
    DT: DeviceTool,
    AL: ArtifactLocator,
    CR: ProjectConfigReader,
{
    pub fn new(device_tool: DT, artifact_locator: AL, config_reader: CR) -> Self {
        Self {
            device_tool,
            artifact_locator,
            config_reader,
        }
    }

    /// Execute the deploy use case
    pub fn execute(
        &self,
        options: &DeployOptions,
        prompter: &dyn Prompter,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployOutcome> {
        if options.skip_confirmation {
            log::info!("prerequisite checklist skipped");
        } else if !prompter.confirm(&prerequisites::confirm_request())? {
            log::info!("prerequisites not confirmed, nothing to do");
            events.on_event(DeployEvent::Declined);
            return Ok(DeployOutcome::Declined);
        }

        let content = self.config_reader.load_config(&options.config_path)?;
        events.on_event(DeployEvent::ConfigFound {
            path: options.config_path.clone(),
        });
        let project = self
            .config_reader
            .parse_config(&content, &options.config_path)?;
        events.on_event(DeployEvent::ProductName {
            name: project.product_name.clone(),
        });

        let artifact = self.select_artifact(options, prompter, events)?;
        let device = self.select_device(prompter, events)?;

        events.on_event(DeployEvent::ReadyToInstall);

        let ecid = self.device_tool.resolve_identifier(&device)?;
        events.on_event(DeployEvent::IdentifierResolved { ecid: ecid.clone() });

        let command = DeploymentCommand::new(artifact, ecid);
        log::info!(
            "installing {} on {}",
            command.artifact.path().display(),
            command.ecid
        );
        let output = self.device_tool.install(&command)?;
        events.on_event(DeployEvent::InstallOutput {
            output: output.clone(),
        });

        let DeploymentCommand { artifact, ecid } = command;
        events.on_event(DeployEvent::Deployed {
            artifact: artifact.clone(),
            ecid: ecid.clone(),
        });

        Ok(DeployOutcome::Deployed(DeployReport {
            project,
            artifact,
            device,
            ecid,
            output,
        }))
    }

    fn select_artifact(
        &self,
        options: &DeployOptions,
        prompter: &dyn Prompter,
        events: &dyn DeployEventSink,
    ) -> DeployResult<Artifact> {
        let artifacts = self.artifact_locator.find_artifacts(&options.build_dir)?;
        events.on_event(DeployEvent::ArtifactsFound {
            search_root: options.build_dir.clone(),
            count: artifacts.len(),
        });

        if artifacts.is_empty() {
            return Err(DeployError::NoArtifact {
                search_root: options.build_dir.clone(),
                pattern: self.artifact_locator.pattern().to_string(),
            });
        }

        let choices: Vec<String> = artifacts.iter().map(ToString::to_string).collect();
        let index = prompter.select(SELECT_ARTIFACT_PROMPT, &choices)?;
        let artifact = pick(artifacts, index, SELECT_ARTIFACT_PROMPT)?;

        events.on_event(DeployEvent::ArtifactSelected {
            artifact: artifact.clone(),
        });
        Ok(artifact)
    }

    fn select_device(
        &self,
        prompter: &dyn Prompter,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeviceRecord> {
        let devices = self.device_tool.list_devices()?;
        events.on_event(DeployEvent::DevicesFound {
            count: devices.len(),
        });

        if devices.is_empty() {
            return Err(DeployError::NoDevice);
        }

        let choices: Vec<String> = devices.iter().map(ToString::to_string).collect();
        let index = prompter.select(SELECT_DEVICE_PROMPT, &choices)?;
        let device = pick(devices, index, SELECT_DEVICE_PROMPT)?;

        events.on_event(DeployEvent::DeviceSelected {
            device: device.clone(),
        });
        Ok(device)
    }
}

/// Take the chosen item; an index outside the list counts as no selection.
fn pick<T>(items: Vec<T>, index: usize, prompt: &str) -> DeployResult<T> {
    items
        .into_iter()
        .nth(index)
        .ok_or_else(|| DeployError::PromptCancelled {
            prompt: prompt.to_string(),
        })
}
