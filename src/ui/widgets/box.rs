use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Glyphs for one border set
struct Borders {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl Borders {
    fn for_terminal(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::TOP_LEFT,
                top_right: theme::borders_ascii::TOP_RIGHT,
                bottom_left: theme::borders_ascii::BOTTOM_LEFT,
                bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }
}

/// Bordered panel; the title is the first row, in bold.
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        if line.is_empty() {
            self.add_empty();
            return;
        }
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(self.content.len() + 1);
        if let Some(title) = &self.title {
            rows.push(ColoredText::plain(title.as_str()).bold().render(supports_color));
        }
        rows.extend(self.content.iter().cloned());

        let inner_width = rows
            .iter()
            .map(|r| visible_width(r))
            .max()
            .unwrap_or(0)
            + 2;

        let b = Borders::for_terminal(supports_unicode);
        let paint = |s: &str| color_border(s, supports_color, self.style);

        let mut out = String::new();
        out.push_str(&paint(&format!(
            "{}{}{}",
            b.top_left,
            b.horizontal.repeat(inner_width),
            b.top_right
        )));
        out.push('\n');

        for row in &rows {
            let pad = inner_width.saturating_sub(1 + visible_width(row));
            out.push_str(&paint(b.vertical));
            out.push(' ');
            out.push_str(row);
            out.push_str(&" ".repeat(pad));
            out.push_str(&paint(b.vertical));
            out.push('\n');
        }

        out.push_str(&paint(&format!(
            "{}{}{}",
            b.bottom_left,
            b.horizontal.repeat(inner_width),
            b.bottom_right
        )));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: BoxStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        BoxStyle::Info => theme::colors::INFO,
        BoxStyle::Success => theme::colors::SUCCESS,
        BoxStyle::Warning => theme::colors::WARNING,
        BoxStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final letter>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
