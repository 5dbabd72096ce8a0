use skill_factory::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn render_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) -> String {
    let mut out = String::new();
    for w in warnings {
        let icon = Icon::Warning.render(supports_unicode);
        match w.line {
            Some(line) => out.push_str(&format!(
                "{icon} Unknown config key '{}' in {}:{}\n",
                w.key,
                w.file.display(),
                line
            )),
            None => out.push_str(&format!(
                "{icon} Unknown config key '{}' in {}\n",
                w.key,
                w.file.display()
            )),
        }
        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{suggestion}'?\n"));
        }
    }
    out
}

/// Config warnings go to stderr so NDJSON on stdout stays clean
pub fn print_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) {
    eprint!("{}", render_config_warnings(warnings, supports_unicode));
}
