use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the skills CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
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
    pub const ARROW: &str = "↳";
    pub const POINTER: &str = "›";
    pub const NEW_FILE: &str = "+";
    pub const MODIFIED: &str = "~";

    // Command identifiers (used in headers).
    pub const INSTALL: &str = "📦";
    pub const UPDATE: &str = "⟳";
    pub const BACKPORT: &str = "↩";
    pub const DOCTOR: &str = "🔍";
    pub const LIST: &str = "📋";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const POINTER: &str = ">";
    pub const NEW_FILE: &str = "+";
    pub const MODIFIED: &str = "M";

    pub const INSTALL: &str = "[INSTALL]";
    pub const UPDATE: &str = "[UPDATE]";
    pub const BACKPORT: &str = "[BACKPORT]";
    pub const DOCTOR: &str = "[DOCTOR]";
    pub const LIST: &str = "[LIST]";
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
// FactoryTheme - dialoguer theme for the preset picker
// ----------------------------------------------------------------------------

/// Wraps `ColorfulTheme` and only overrides select items to use our pointer
/// icon, or `>` in ASCII mode.
pub struct FactoryTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl FactoryTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn pointer_icon(&self) -> &'static str {
        if self.unicode {
            icons::POINTER
        } else {
            icons_ascii::POINTER
        }
    }
}

impl Theme for FactoryTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_select_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "{} {}", self.pointer_icon(), text)
        } else {
            write!(f, "  {}", text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_theme_pointer_icons() {
        assert_eq!(FactoryTheme::new(true).pointer_icon(), "›");
        assert_eq!(FactoryTheme::new(false).pointer_icon(), ">");
    }

    #[test]
    fn select_items_mark_the_active_row() {
        let theme = FactoryTheme::new(false);
        let mut active = String::new();
        let mut idle = String::new();
        theme.format_select_prompt_item(&mut active, "core", true).unwrap();
        theme.format_select_prompt_item(&mut idle, "core", false).unwrap();
        assert_eq!(active, "> core");
        assert_eq!(idle, "  core");
    }
}
