use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Warning,
}

/// Bordered block of lines, sized to its widest line
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    content: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.content.extend(line.lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let lines: Vec<&str> = self
            .title
            .iter()
            .chain(self.content.iter())
            .map(String::as_str)
            .collect();
        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            + 2;

        let (tl, tr, bl, br, h, v) = if supports_unicode {
            use theme::borders::*;
            (TOP_LEFT, TOP_RIGHT, BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, VERTICAL)
        } else {
            use theme::borders_ascii::*;
            (TOP_LEFT, TOP_RIGHT, BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, VERTICAL)
        };
        let border = |s: &str| color_border(s, supports_color, self.style);

        let mut out = String::new();
        out.push_str(&border(&format!("{tl}{}{tr}", h.repeat(inner_width))));
        out.push('\n');
        for line in lines {
            let pad = inner_width - 1 - visible_width(line);
            out.push_str(&border(v));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&border(v));
            out.push('\n');
        }
        out.push_str(&border(&format!("{bl}{}{br}", h.repeat(inner_width))));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: PanelStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        PanelStyle::Info => theme::colors::INFO,
        PanelStyle::Success => theme::colors::SUCCESS,
        PanelStyle::Warning => theme::colors::WARNING,
    };
    format!("{}", s.with(color))
}

/// Display width, ignoring ANSI escapes
pub fn visible_width(s: &str) -> usize {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_rows_share_one_width() {
        let mut panel = Panel::with_title("Install Complete");
        panel.add_line("3 skills\n12 rules");
        let rendered = panel.render(false, false);

        let widths: Vec<usize> = rendered.lines().map(|l| l.width()).collect();
        assert_eq!(widths.len(), 5);
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(rendered.starts_with("+---"));
        assert!(rendered.contains("| 12 rules"));
    }

    #[test]
    fn width_ignores_ansi_sequences() {
        let styled = format!("{}", "ok".with(theme::colors::SUCCESS));
        assert_eq!(visible_width(&styled), 2);
        assert_eq!(visible_width("✓ done"), 6);
    }
}
