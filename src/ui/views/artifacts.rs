use std::path::Path;

use ipa_deploy::Artifact;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_artifact_list(
    search_root: &Path,
    pattern: &str,
    artifacts: &[Artifact],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, "Deployable builds");
    header.add("Search", search_root.display().to_string());
    header.add("Pattern", pattern);
    let mut out = header.render(supports_color, supports_unicode);

    if artifacts.is_empty() {
        out.push_str(&format!(
            "  {} No builds found\n",
            Icon::Warning.colored(supports_color, supports_unicode)
        ));
        return out;
    }

    for artifact in artifacts {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Pending.colored(supports_color, supports_unicode),
            artifact
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_full_paths_in_order() {
        let artifacts = vec![Artifact::new("/b/a/App.ipa"), Artifact::new("/b/z/App.ipa")];
        let rendered = render_artifact_list(Path::new("/b"), "*.ipa", &artifacts, false, false);

        let first = rendered.find("/b/a/App.ipa").unwrap();
        let second = rendered.find("/b/z/App.ipa").unwrap();
        assert!(first < second);
        assert!(rendered.contains("Pattern: *.ipa"));
    }

    #[test]
    fn empty_listing_says_so() {
        let rendered = render_artifact_list(Path::new("/b"), "*.ipa", &[], false, false);
        assert!(rendered.contains("[WARN] No builds found"));
    }
}
