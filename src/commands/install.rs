use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use skill_factory::application::{list_available_presets, resolve_preset};
use skill_factory::domain::ports::AssumeNo;
use skill_factory::{EngineSettings, InstallOptions, LocalFs, SyncEngine};

use super::{event_sink, Workspace};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::json::{emit, CompleteEvent, StartEvent};
use crate::ui::menu::select_preset_interactive;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::sync::render_install_summary;

pub fn cmd_install(
    config_path: Option<&Path>,
    preset: Option<String>,
    no_interactive: bool,
    force: bool,
    global: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let ui = UiContext::new(json, verbose);
    let ws = Workspace::load(config_path, &ui)?;
    let config = &ws.config;
    let fs = LocalFs::new();

    let target: PathBuf = if global {
        config.global_path.clone().ok_or_else(|| {
            anyhow!("no global install path configured (set `global_path` or SKILL_FACTORY_GLOBAL_PATH)")
        })?
    } else {
        ws.project_target()
    };

    let preset = match preset {
        Some(name) => Some(name),
        None if !no_interactive && ui.can_prompt() => {
            let presets = list_available_presets(&fs, &config.source)?;
            if presets.is_empty() {
                None
            } else {
                select_preset_interactive(&presets, ui.unicode)?
            }
        }
        None => None,
    };

    let mut options = InstallOptions::new().replacing_existing(force);
    if let Some(name) = &preset {
        let skills = resolve_preset(&fs, &config.source, &config.marker_file, name)?;
        options = options.with_skill_filter(skills);
    }

    if json {
        emit(&StartEvent::new("install"))?;
    } else {
        let mut header = CommandHeader::new(Icon::Install, "Skills Install");
        header
            .add("Source", config.source.display().to_string())
            .add("Target", target.display().to_string());
        if let Some(name) = &preset {
            header.add("Preset", name.as_str());
        }
        if force {
            header.add("Mode", "replace existing");
        }
        print!("{}", header.render(ui.color, ui.unicode));
    }

    let settings = EngineSettings::from_config(config, target);
    let engine = SyncEngine::new(fs, AssumeNo, settings).with_event_sink(event_sink(&ui));
    let report = engine.install(&options)?;

    if json {
        emit(&CompleteEvent::new("install", true, report))?;
    } else {
        print!("{}", render_install_summary(&report, ui.color, ui.unicode));
    }
    Ok(())
}
