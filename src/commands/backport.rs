use std::path::Path;

use anyhow::Result;
use skill_factory::domain::ports::AssumeYes;
use skill_factory::infrastructure::LinePrompter;
use skill_factory::{EngineSettings, LocalFs, Prompter, SyncEngine};

use super::{event_sink, Workspace};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::json::{emit, CompleteEvent, StartEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::views::sync::render_backport_outcome;

pub fn cmd_backport(
    config_path: Option<&Path>,
    name: &str,
    yes: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let ui = UiContext::new(json, verbose);
    let ws = Workspace::load(config_path, &ui)?;
    let target = ws.project_target();

    if json {
        emit(&StartEvent::new("backport"))?;
    } else {
        let mut header = CommandHeader::new(Icon::Backport, "Skills Backport");
        header
            .add("Skill", name)
            .add("Factory", ws.config.source.display().to_string());
        print!("{}", header.render(ui.color, ui.unicode));
    }

    let prompter: Box<dyn Prompter> = if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(LinePrompter::stdio())
    };
    let settings = EngineSettings::from_config(&ws.config, target);
    let engine =
        SyncEngine::new(LocalFs::new(), prompter, settings).with_event_sink(event_sink(&ui));
    let outcome = engine.backport(name)?;

    if json {
        emit(&CompleteEvent::new("backport", true, outcome))?;
    } else {
        print!(
            "{}",
            render_backport_outcome(name, &outcome, ui.color, ui.unicode)
        );
    }
    Ok(())
}
