use std::path::Path;

use anyhow::Result;
use skill_factory::application::list_available_presets;
use skill_factory::LocalFs;

use super::Workspace;
use crate::ui::context::UiContext;
use crate::ui::json::{emit, CompleteEvent, StartEvent};
use crate::ui::views::presets::render_presets;

pub fn cmd_presets(config_path: Option<&Path>, json: bool, verbose: u8) -> Result<()> {
    let ui = UiContext::new(json, verbose);
    let ws = Workspace::load(config_path, &ui)?;
    let presets = list_available_presets(&LocalFs::new(), &ws.config.source)?;

    if json {
        emit(&StartEvent::new("presets"))?;
        emit(&CompleteEvent::new("presets", true, &presets))?;
    } else {
        print!("{}", render_presets(&presets, ui.color));
    }
    Ok(())
}
