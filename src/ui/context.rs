use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use ipa_deploy::config::ColorMode;
use ipa_deploy::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(verbose: u8, cli_color: Option<ColorWhen>, configured: ColorMode) -> Self {
        Self::from_caps(verbose, cli_color, configured, detect_capabilities())
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        configured: ColorMode,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match configured {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            verbose,
            color,
            unicode: caps.supports_unicode,
        }
    }
}
