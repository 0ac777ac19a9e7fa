use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed error with an optional subject (file, device, tool) and fix hint.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    title: String,
    subject: Option<String>,
    message: String,
    details: Option<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subject: None,
            message: message.into(),
            details: None,
            fix: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Raw tool output, shown verbatim under the message.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let details = details.into();
        if !details.trim().is_empty() {
            self.details = Some(details);
        }
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(self.title.as_str()).render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);

        if let Some(subject) = &self.subject {
            b.add_line(ColoredText::dim(subject.as_str()).render(supports_color));
        }
        b.add_empty();
        b.add_line(self.message.clone());

        if let Some(details) = &self.details {
            b.add_empty();
            for line in details.lines() {
                b.add_line(format!("  {}", line));
            }
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}
