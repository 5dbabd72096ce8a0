use std::path::Path;

use anyhow::{bail, Result};
use skill_factory::domain::ports::AssumeYes;
use skill_factory::infrastructure::LinePrompter;
use skill_factory::{EngineSettings, LocalFs, Prompter, SyncEngine};

use super::{event_sink, Workspace};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::json::{emit, CompleteEvent, StartEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::views::sync::{render_refresh_summary, render_update_summary};

pub fn cmd_update(
    config_path: Option<&Path>,
    force: bool,
    yes: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let ui = UiContext::new(json, verbose);
    let ws = Workspace::load(config_path, &ui)?;
    let target = ws.project_target();

    if json {
        emit(&StartEvent::new("update"))?;
    } else {
        let title = if force { "Skills Force Refresh" } else { "Skills Update" };
        let mut header = CommandHeader::new(Icon::Update, title);
        header
            .add("Source", ws.config.source.display().to_string())
            .add("Target", target.display().to_string());
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

    let failed = if force {
        let report = engine.force_refresh()?;
        let failed = report.failed.len();
        if json {
            emit(&CompleteEvent::new("update", failed == 0, &report))?;
        } else {
            print!("{}", render_refresh_summary(&report, ui.color, ui.unicode));
        }
        failed
    } else {
        let report = engine.update()?;
        let failed = report.failed.len();
        if json {
            emit(&CompleteEvent::new("update", failed == 0, &report))?;
        } else {
            print!("{}", render_update_summary(&report, ui.color, ui.unicode));
        }
        failed
    };

    if failed > 0 {
        bail!("{failed} skill(s) could not be updated");
    }
    Ok(())
}
