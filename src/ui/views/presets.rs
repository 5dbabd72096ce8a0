use skill_factory::domain::services::PresetSummary;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::text::ColoredText;

pub fn render_presets(presets: &[PresetSummary], supports_color: bool) -> String {
    if presets.is_empty() {
        return format!(
            "{}\n",
            ColoredText::dim("No presets defined (add _meta/presets.yaml to the factory)")
                .render(supports_color)
        );
    }

    let width = presets.iter().map(|p| p.name.width()).max().unwrap_or(0);
    let mut out = String::new();
    for preset in presets {
        out.push_str("  ");
        out.push_str(&ColoredText::info(preset.name.as_str()).bold().render(supports_color));
        if !preset.description.is_empty() {
            out.push_str(&" ".repeat(width - preset.name.width() + 2));
            out.push_str(&ColoredText::dim(preset.description.as_str()).render(supports_color));
        }
        out.push('\n');
    }
    out
}
