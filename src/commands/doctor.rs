use std::path::Path;

use anyhow::{bail, Result};
use skill_factory::application::{run_doctor, DoctorScope};
use skill_factory::LocalFs;

use super::Workspace;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::json::{emit, write_event, CompleteEvent, StartEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::views::doctor::render_doctor_report;

pub fn cmd_doctor(
    config_path: Option<&Path>,
    factory: bool,
    exit_on_error: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let ui = UiContext::new(json, verbose);
    let ws = Workspace::load(config_path, &ui)?;
    let config = &ws.config;

    let scope = if factory {
        DoctorScope::factory(&config.source, config.marker_file.as_str())
    } else {
        DoctorScope::installed(ws.project_target().join("skills"), config.marker_file.as_str())
    }
    .with_known_skills(config.doctor.known_skills.iter().cloned());

    if json {
        emit(&StartEvent::new("doctor"))?;
    } else {
        let mut header = CommandHeader::new(Icon::Doctor, "Skills Doctor");
        header.add("Checking", scope.units_dir.display().to_string());
        print!("{}", header.render(ui.color, ui.unicode));
        println!();
    }

    let report = run_doctor(&LocalFs::new(), &scope)?;

    if json {
        let mut out = std::io::stdout().lock();
        for finding in &report.findings {
            write_event(
                &mut out,
                &serde_json::json!({
                    "event": "finding",
                    "unit": finding.unit,
                    "line": finding.line,
                    "severity": finding.severity,
                    "message": finding.message,
                }),
            )?;
        }
        drop(out);
        emit(&CompleteEvent::new("doctor", report.is_success(), &report))?;
    } else {
        print!("{}", render_doctor_report(&report, ui.color, ui.unicode));
    }

    if exit_on_error && !report.is_success() {
        bail!("doctor found {} error(s)", report.error_count());
    }
    Ok(())
}
