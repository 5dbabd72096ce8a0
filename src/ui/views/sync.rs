use skill_factory::application::{
    BackportOutcome, InstallReport, RefreshReport, UnitFailure, UpdateReport,
};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn add_failures(summary: &mut ResultSummary, failed: &[UnitFailure]) {
    for failure in failed {
        summary.add_warning(failure.message.clone());
    }
}

pub fn render_install_summary(
    report: &InstallReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success("Install Complete");
    summary.add_stat("skills", report.skills);
    summary.add_stat("rules", report.rules);
    summary.add_stat("workflows", report.workflows);
    if report.standards > 0 {
        summary.add_stat("standards", report.standards);
    }
    summary.with_next_step("run `skills update` to pull factory changes later");
    summary.render(supports_color, supports_unicode)
}

pub fn render_update_summary(
    report: &UpdateReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if report.has_failures() {
        ResultSummary::partial("Update Finished With Errors")
    } else if report.is_up_to_date() {
        ResultSummary::success("Already Up To Date")
    } else {
        ResultSummary::success("Update Complete")
    };
    summary.add_stat("updated", report.updated.len());
    summary.add_stat("declined", report.declined.len());
    summary.add_stat("unchanged", report.unchanged.len());
    if !report.local_only.is_empty() {
        summary.add_stat("local only", report.local_only.len());
    }
    summary.add_stat("rules refreshed", report.rules);
    add_failures(&mut summary, &report.failed);
    summary.render(supports_color, supports_unicode)
}

pub fn render_refresh_summary(
    report: &RefreshReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if report.failed.is_empty() {
        ResultSummary::success("Force Refresh Complete")
    } else {
        ResultSummary::partial("Force Refresh Finished With Errors")
    };
    summary.add_stat("skills refreshed", report.refreshed.len());
    summary.add_stat("rules refreshed", report.rules);
    add_failures(&mut summary, &report.failed);
    summary.render(supports_color, supports_unicode)
}

pub fn render_backport_outcome(
    name: &str,
    outcome: &BackportOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match outcome {
        BackportOutcome::InSync => format!(
            "{} '{}' already matches the factory\n",
            Icon::Success.colored(supports_color, supports_unicode),
            name
        ),
        BackportOutcome::Declined => format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::dim("Backport cancelled").render(supports_color)
        ),
        BackportOutcome::Applied { files } => {
            let mut summary = ResultSummary::success("Backport Complete");
            summary.add_stat(format!("files copied to the factory for '{name}'"), *files);
            summary.render(supports_color, supports_unicode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_summary_up_to_date() {
        let report = UpdateReport {
            unchanged: vec!["alpha".to_string()],
            rules: 2,
            ..UpdateReport::default()
        };
        let rendered = render_update_summary(&report, false, false);
        assert!(rendered.contains("[OK] Already Up To Date"));
        assert!(rendered.contains("1 unchanged"));
        assert!(rendered.contains("2 rules refreshed"));
    }

    #[test]
    fn update_summary_lists_failures() {
        let report = UpdateReport {
            failed: vec![UnitFailure {
                unit: "beta".to_string(),
                message: "failed to compare 'beta': permission denied".to_string(),
            }],
            ..UpdateReport::default()
        };
        let rendered = render_update_summary(&report, false, false);
        assert!(rendered.contains("[WARN] Update Finished With Errors"));
        assert!(rendered.contains("[WARN] failed to compare 'beta'"));
    }

    #[test]
    fn backport_outcomes() {
        assert_eq!(
            render_backport_outcome("alpha", &BackportOutcome::InSync, false, false),
            "[OK] 'alpha' already matches the factory\n"
        );
        let applied = render_backport_outcome(
            "alpha",
            &BackportOutcome::Applied { files: 3 },
            false,
            false,
        );
        assert!(applied.contains("3 files copied to the factory for 'alpha'"));
    }

    #[test]
    fn install_summary_counts() {
        let report = InstallReport {
            skills: 4,
            rules: 6,
            workflows: 1,
            standards: 0,
        };
        let rendered = render_install_summary(&report, false, true);
        assert!(rendered.contains("4 skills"));
        assert!(rendered.contains("6 rules"));
        assert!(!rendered.contains("standards"));
    }
}
