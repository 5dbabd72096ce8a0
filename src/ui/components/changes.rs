use skill_factory::ChangeRecord;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render the changes of one unit: a title line, then one entry per file.
/// Modified files show their `+`/`-` lines indented under the path.
pub fn render_unit_changes(
    unit: &str,
    changes: &[ChangeRecord],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "\n{} {}\n",
        ColoredText::info(unit).bold().render(supports_color),
        ColoredText::dim(format!("({} changed)", plural(changes.len(), "file"))).render(supports_color)
    );

    for change in changes {
        match change {
            ChangeRecord::New { .. } => {
                out.push_str(&format!(
                    "  {} {} {}\n",
                    Icon::NewFile.colored(supports_color, supports_unicode),
                    change.display_path(),
                    ColoredText::dim("(new file)").render(supports_color)
                ));
            }
            ChangeRecord::Modified { diff, .. } => {
                out.push_str(&format!(
                    "  {} {}\n",
                    Icon::Modified.colored(supports_color, supports_unicode),
                    change.display_path()
                ));
                for line in diff.lines() {
                    out.push_str("    ");
                    out.push_str(&color_diff_line(line, supports_color));
                    out.push('\n');
                }
            }
        }
    }
    out
}

fn color_diff_line(line: &str, supports_color: bool) -> String {
    let text = if line.starts_with('+') {
        ColoredText::success(line)
    } else if line.starts_with('-') {
        ColoredText::error(line)
    } else {
        ColoredText::dim(line)
    };
    text.render(supports_color)
}

pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
