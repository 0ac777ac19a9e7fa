use std::path::Path;

use ipa_deploy::{DeployReport, Settings};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_deploy_header(
    project_dir: &Path,
    settings: &Settings,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, "ipa-deploy");
    header.add("Project", project_dir.display().to_string());
    header.add("Config", settings.project.config_file.display().to_string());
    header.add(
        "Builds",
        format!(
            "{} ({})",
            settings.project.build_dir.display(),
            settings.project.pattern
        ),
    );
    header.add("Tool", settings.tool.program.display().to_string());

    header.render(supports_color, supports_unicode)
}

pub fn render_declined(supports_color: bool) -> String {
    format!(
        "{}\n",
        ColoredText::dim("Prerequisites not confirmed; nothing was deployed.").render(supports_color)
    )
}

/// Closing recap: what went where.
pub fn render_deploy_summary(
    report: &DeployReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut title = report.project.product_name.clone();
    if let Some(version) = &report.project.version {
        title.push_str(&format!(" {}", version));
    }

    let mut header = CommandHeader::new(Icon::Device, title);
    if let Some(identifier) = &report.project.identifier {
        header.add("Bundle", identifier.as_str());
    }
    header.add("Package", report.artifact.file_name());
    header.add("ECID", report.ecid.as_str());
    header.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipa_deploy::{Artifact, DeviceRecord, Ecid, ProjectConfig};

    #[test]
    fn header_lists_resolved_locations() {
        let rendered = render_deploy_header(
            Path::new("/work/app"),
            &Settings::default(),
            false,
            false,
        );

        assert!(rendered.starts_with("[DEPLOY] ipa-deploy\n"));
        assert!(rendered.contains("Project: /work/app"));
        assert!(rendered.contains("src-tauri/tauri.conf.json"));
        assert!(rendered.contains("src-tauri/gen/apple/build (*.ipa)"));
        assert!(rendered.contains("cfgutil"));
    }

    #[test]
    fn summary_shows_optional_project_fields() {
        let mut project = ProjectConfig::new("My App");
        project.version = Some("1.2.0".to_string());
        project.identifier = Some("com.example.app".to_string());
        let report = DeployReport {
            project,
            artifact: Artifact::new("/b/arm64/My App.ipa"),
            device: DeviceRecord::new("ECID: 0x9"),
            ecid: Ecid::new("0x9"),
            output: String::new(),
        };

        let rendered = render_deploy_summary(&report, false, false);
        assert!(rendered.starts_with("[DEVICE] My App 1.2.0\n"));
        assert!(rendered.contains("com.example.app"));
        assert!(rendered.contains("My App.ipa"));
        assert!(rendered.contains("ECID:    0x9"));
    }
}
