use skill_factory::FactoryError;

use crate::ui::json::{emit, ErrorEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

/// Hint shown under errors the user can fix with another command
fn fix_hint(err: &FactoryError) -> Option<&'static str> {
    match err {
        FactoryError::SourceUnavailable { .. } => {
            Some("Set SKILL_FACTORY_SOURCE or `source` in ~/.config/skill-factory/config.toml")
        }
        FactoryError::AlreadyInstalled { .. } => Some("Use `skills install --force` to replace it"),
        FactoryError::NotInstalled { .. } => Some("Run `skills install` first"),
        FactoryError::UnknownPreset { .. } => Some("Run `skills presets` to see what is available"),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).render(supports_color)
    );

    if let Some(hint) = err.downcast_ref::<FactoryError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(hint).render(supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = emit(&ErrorEvent::new(err.to_string()));
        return;
    }

    let caps = detect_capabilities();
    eprint!("{}", format_error(err, caps.supports_color, caps.supports_unicode));
}
