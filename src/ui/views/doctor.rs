use skill_factory::application::{DoctorReport, Finding, Severity};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_doctor_report(
    report: &DoctorReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    for finding in &report.findings {
        let (icon, location) = match finding.severity {
            Severity::Error => (Icon::Error, ColoredText::error(finding_location(finding))),
            Severity::Warning => (Icon::Warning, ColoredText::warning(finding_location(finding))),
        };
        out.push_str(&format!(
            "{} {} {}\n",
            icon.colored(supports_color, supports_unicode),
            location.render(supports_color),
            finding.message
        ));
    }
    if !report.findings.is_empty() {
        out.push('\n');
    }

    let mut summary = if report.error_count() > 0 {
        ResultSummary::partial("Doctor Found Problems")
    } else {
        ResultSummary::success("Doctor Passed")
    };
    summary.add_stat("skills checked", report.checked);
    summary.add_stat("errors", report.error_count());
    summary.add_stat("warnings", report.warning_count());
    if report.error_count() > 0 {
        summary.with_next_step("fix the broken links, then rerun `skills doctor`");
    }
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}

fn finding_location(finding: &Finding) -> String {
    match finding.line {
        Some(line) => format!("{}:{}:", finding.unit, line),
        None => format!("{}:", finding.unit),
    }
}
