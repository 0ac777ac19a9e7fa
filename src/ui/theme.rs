use crossterm::style::{Color, Stylize};
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the ipa-deploy terminal UI.
///
/// All colors, icons and borders come from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";
    pub const POINTER: &str = "❯";

    // Command identifiers (used in headers).
    pub const DEPLOY: &str = "📦";
    pub const DEVICE: &str = "📱";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[x]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "[>]";
    pub const POINTER: &str = ">";

    pub const DEPLOY: &str = "[DEPLOY]";
    pub const DEVICE: &str = "[DEVICE]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// DeployTheme - dialoguer theme honouring --color and ASCII terminals
// ----------------------------------------------------------------------------

/// Custom theme for dialoguer prompts using the design tokens above.
///
/// Wraps `ColorfulTheme` when color is on and `SimpleTheme` when it is off,
/// and draws the select cursor with our own pointer so ASCII terminals get
/// `>` instead of `❯`.
pub struct DeployTheme {
    color: bool,
    unicode: bool,
    colorful: dialoguer::theme::ColorfulTheme,
}

impl DeployTheme {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self {
            color,
            unicode,
            colorful: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    /// Marker in front of the highlighted select item.
    pub fn pointer(&self) -> &'static str {
        if self.unicode {
            icons::POINTER
        } else {
            icons_ascii::POINTER
        }
    }

    fn inner(&self) -> &dyn Theme {
        if self.color {
            &self.colorful
        } else {
            &dialoguer::theme::SimpleTheme
        }
    }
}

impl Theme for DeployTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner().format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner().format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner().format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner()
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner().format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner().format_select_prompt_selection(f, prompt, sel)
    }

    // The only item formatter we own: pointer glyph and highlight color
    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if !active {
            return write!(f, "  {}", text);
        }

        if self.color {
            write!(
                f,
                "{} {}",
                self.pointer().with(colors::INFO),
                text.with(colors::INFO)
            )
        } else {
            write!(f, "{} {}", self.pointer(), text)
        }
    }
}
