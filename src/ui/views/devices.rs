use ipa_deploy::DeviceRecord;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_device_list(
    tool: &str,
    devices: &[DeviceRecord],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Device, "Attached devices");
    header.add("Tool", tool);
    let mut out = header.render(supports_color, supports_unicode);

    if devices.is_empty() {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            "No devices found"
        ));
        return out;
    }

    for device in devices {
        // An unresolvable line is still listed; deploying to it is what fails.
        let (icon, ecid) = match device.ecid() {
            Ok(ecid) => (Icon::Success, ColoredText::info(ecid.as_str())),
            Err(_) => (Icon::Warning, ColoredText::warning("ECID not found")),
        };
        out.push_str(&format!(
            "  {} {}\n",
            icon.colored(supports_color, supports_unicode),
            device.descriptor()
        ));
        out.push_str(&format!(
            "    {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ecid.render(supports_color)
        ));
    }
    out
}
