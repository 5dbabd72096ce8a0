use skill_factory::domain::services::PresetSummary;

use crate::ui::theme::FactoryTheme;

const ALL_SKILLS: &str = "All skills";

/// Picker rows: "All skills" first, then one row per preset.
pub fn preset_items(presets: &[PresetSummary]) -> Vec<String> {
    std::iter::once(ALL_SKILLS.to_string())
        .chain(presets.iter().map(|p| {
            if p.description.is_empty() {
                p.name.clone()
            } else {
                format!("{} - {}", p.name, p.description)
            }
        }))
        .collect()
}

/// Map a picker row back to a preset name. Row 0 means every skill.
pub fn preset_for_selection(presets: &[PresetSummary], index: usize) -> Option<String> {
    index
        .checked_sub(1)
        .and_then(|i| presets.get(i))
        .map(|p| p.name.clone())
}

/// Ask which preset to install. `Ok(None)` installs every skill.
pub fn select_preset_interactive(
    presets: &[PresetSummary],
    unicode: bool,
) -> anyhow::Result<Option<String>> {
    use dialoguer::Select;

    let items = preset_items(presets);
    let theme = FactoryTheme::new(unicode);
    let index = Select::with_theme(&theme)
        .with_prompt("Which skills should be installed?")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(preset_for_selection(presets, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presets() -> Vec<PresetSummary> {
        vec![
            PresetSummary {
                name: "backend".to_string(),
                description: "Core plus backend".to_string(),
            },
            PresetSummary {
                name: "core".to_string(),
                description: String::new(),
            },
        ]
    }

    #[test]
    fn all_skills_comes_first() {
        assert_eq!(
            preset_items(&presets()),
            vec!["All skills", "backend - Core plus backend", "core"]
        );
    }

    #[test]
    fn selection_maps_to_preset_name() {
        let presets = presets();
        assert_eq!(preset_for_selection(&presets, 0), None);
        assert_eq!(preset_for_selection(&presets, 1).as_deref(), Some("backend"));
        assert_eq!(preset_for_selection(&presets, 2).as_deref(), Some("core"));
        assert_eq!(preset_for_selection(&presets, 9), None);
    }
}
