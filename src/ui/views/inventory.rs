use skill_factory::application::{InventoryEntry, SyncStatus};
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

const MIN_NAME_WIDTH: usize = 25;

fn status_text(status: SyncStatus) -> ColoredText {
    match status {
        SyncStatus::Synced => ColoredText::success(status.as_str()),
        SyncStatus::LocalOnly => ColoredText::warning(status.as_str()),
        SyncStatus::NotInstalled => ColoredText::info(status.as_str()),
    }
}

fn mark(present: bool, supports_color: bool, supports_unicode: bool) -> (String, usize) {
    if present {
        let icon = Icon::Success.render(supports_unicode);
        (Icon::Success.colored(supports_color, supports_unicode), icon.width())
    } else {
        (ColoredText::dim("-").render(supports_color), 1)
    }
}

fn pad(visible: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(visible))
}

/// Skill / Installed / Source / Status table
pub fn render_inventory(
    entries: &[InventoryEntry],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if entries.is_empty() {
        return format!(
            "{}\n",
            ColoredText::dim("No skills found in the factory or the project").render(supports_color)
        );
    }

    let name_width = entries
        .iter()
        .map(|e| e.name.width())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);
    let flag_width = 10;

    let header = format!(
        "{:<name_width$} {:<flag_width$} {:<flag_width$} {}",
        "Skill", "Installed", "Source", "Status"
    );
    let rule_char = if supports_unicode {
        theme::borders::HORIZONTAL
    } else {
        theme::borders_ascii::HORIZONTAL
    };

    let mut out = String::new();
    out.push_str(&ColoredText::plain(header.as_str()).bold().render(supports_color));
    out.push('\n');
    out.push_str(&rule_char.repeat(name_width + 2 * flag_width + 15));
    out.push('\n');

    for entry in entries {
        let (installed, installed_w) = mark(entry.installed, supports_color, supports_unicode);
        let (source, source_w) = mark(entry.in_factory, supports_color, supports_unicode);
        out.push_str(&entry.name);
        out.push_str(&pad(entry.name.width(), name_width + 1));
        out.push_str(&installed);
        out.push_str(&pad(installed_w, flag_width + 1));
        out.push_str(&source);
        out.push_str(&pad(source_w, flag_width + 1));
        out.push_str(&status_text(entry.status).render(supports_color));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, installed: bool, in_factory: bool, status: SyncStatus) -> InventoryEntry {
        InventoryEntry {
            name: name.to_string(),
            installed,
            in_factory,
            status,
        }
    }

    #[test]
    fn table_columns_line_up() {
        let entries = vec![
            entry("product-manager", true, true, SyncStatus::Synced),
            entry("my-custom-skill", true, false, SyncStatus::LocalOnly),
            entry("new-factory-skill", false, true, SyncStatus::NotInstalled),
        ];

        let rendered = render_inventory(&entries, false, false);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("Skill"));
        assert!(lines[2].starts_with("product-manager"));
        assert!(lines[2].ends_with("synced"));
        assert!(lines[3].ends_with("local only"));
        assert!(lines[4].ends_with("not installed"));
        let status_col = lines[0].find("Status").unwrap();
        assert_eq!(lines[2].find("synced"), Some(status_col));
        assert_eq!(lines[4].find("not installed"), Some(status_col));
    }

    #[test]
    fn empty_inventory_message() {
        assert!(render_inventory(&[], false, false).contains("No skills found"));
    }
}
