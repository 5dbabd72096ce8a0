use std::path::Path;

use anyhow::Result;
use skill_factory::application::inventory;
use skill_factory::LocalFs;

use super::Workspace;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::json::{emit, CompleteEvent, StartEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::views::inventory::render_inventory;

pub fn cmd_list(config_path: Option<&Path>, json: bool, verbose: u8) -> Result<()> {
    let ui = UiContext::new(json, verbose);
    let ws = Workspace::load(config_path, &ui)?;
    let skills_dir = ws.project_target().join("skills");

    let entries = inventory(
        &LocalFs::new(),
        &ws.config.source,
        &skills_dir,
        &ws.config.marker_file,
    )?;

    if json {
        emit(&StartEvent::new("list"))?;
        emit(&CompleteEvent::new("list", true, &entries))?;
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::List, "Skill Inventory");
    header.add("Factory", ws.config.source.display().to_string());
    print!("{}", header.render(ui.color, ui.unicode));
    println!();
    print!("{}", render_inventory(&entries, ui.color, ui.unicode));
    Ok(())
}
