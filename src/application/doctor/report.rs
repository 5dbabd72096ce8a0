//! Doctor report and entry function

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::ports::{DirEntry, FileSystem};
use crate::domain::services::{classify, is_hidden, SkipReason, SourceEntry};
use crate::error::{FactoryError, FactoryResult};

use super::checks;
use super::types::{Finding, Severity};

pub trait DoctorSink {
    fn add_finding(&mut self, finding: Finding);

    fn add_error(&mut self, unit: &str, message: impl Into<String>) {
        self.add_finding(Finding {
            unit: unit.to_string(),
            line: None,
            severity: Severity::Error,
            message: message.into(),
        });
    }

    fn add_warning(&mut self, unit: &str, line: Option<usize>, message: impl Into<String>) {
        self.add_finding(Finding {
            unit: unit.to_string(),
            line,
            severity: Severity::Warning,
            message: message.into(),
        });
    }
}

/// Doctor results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    /// Units inspected
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl DoctorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn is_success(&self) -> bool {
        self.error_count() == 0
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }
}

impl DoctorSink for DoctorReport {
    fn add_finding(&mut self, finding: Finding) {
        self.findings.push(finding);
    }
}

/// How units are laid out in the audited directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitsLayout {
    /// An installed `skills/` directory: every visible subdirectory is a unit
    Installed,
    /// A factory root: routed the way install routes it
    Factory,
}

/// What to audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorScope {
    pub units_dir: PathBuf,
    pub layout: UnitsLayout,
    pub marker_file: String,
    /// Extra names accepted in `@name` mentions
    pub known_skills: Vec<String>,
}

impl DoctorScope {
    pub fn installed(skills_dir: impl Into<PathBuf>, marker_file: impl Into<String>) -> Self {
        Self {
            units_dir: skills_dir.into(),
            layout: UnitsLayout::Installed,
            marker_file: marker_file.into(),
            known_skills: Vec::new(),
        }
    }

    pub fn factory(source: impl Into<PathBuf>, marker_file: impl Into<String>) -> Self {
        Self {
            units_dir: source.into(),
            layout: UnitsLayout::Factory,
            marker_file: marker_file.into(),
            known_skills: Vec::new(),
        }
    }

    pub fn with_known_skills(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.known_skills.extend(names);
        self
    }
}

/// Audit every unit in `scope`. Fails only when the directory itself cannot
/// be listed; everything else becomes a finding.
pub fn run_doctor<F: FileSystem + ?Sized>(fs: &F, scope: &DoctorScope) -> FactoryResult<DoctorReport> {
    let units = audited_units(fs, scope)?;

    let mut known: BTreeSet<String> = scope.known_skills.iter().cloned().collect();
    known.extend(units.iter().map(|(name, _)| name.clone()));

    let mut report = DoctorReport::new();
    for (name, path) in &units {
        debug!(unit = %name, "checking unit");
        checks::check_unit(fs, name, path, &scope.marker_file, &known, &mut report);
    }
    report.checked = units.len();

    info!(
        checked = report.checked,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "doctor complete"
    );
    Ok(report)
}

fn audited_units<F: FileSystem + ?Sized>(
    fs: &F,
    scope: &DoctorScope,
) -> FactoryResult<Vec<(String, PathBuf)>> {
    let dir = &scope.units_dir;
    let entries = fs.list(dir).map_err(|source| match scope.layout {
        UnitsLayout::Installed if source.is_not_found() => FactoryError::NotInstalled {
            path: dir.clone(),
        },
        _ => FactoryError::SourceUnavailable {
            path: dir.clone(),
            source,
        },
    })?;

    let mut units = Vec::new();
    for entry in entries {
        let path = dir.join(&entry.name);
        match scope.layout {
            UnitsLayout::Installed => {
                if entry.is_dir && !is_hidden(&entry.name) {
                    units.push((entry.name, path));
                }
            }
            UnitsLayout::Factory => factory_entry(fs, entry, path, &scope.marker_file, &mut units)?,
        }
    }
    Ok(units)
}

/// Marked units and unmarked unit-like directories; the latter are reported
/// as missing their marker.
fn factory_entry<F: FileSystem + ?Sized>(
    fs: &F,
    entry: DirEntry,
    path: PathBuf,
    marker_file: &str,
    units: &mut Vec<(String, PathBuf)>,
) -> FactoryResult<()> {
    let has_marker = entry.is_dir && fs.is_file(&path.join(marker_file));
    match classify(&entry.name, entry.is_dir, has_marker) {
        SourceEntry::Unit | SourceEntry::Skipped(SkipReason::NoMarker) => {
            units.push((entry.name, path));
        }
        SourceEntry::SkillContainer => {
            for child in fs.list(&path)? {
                if child.is_dir && !is_hidden(&child.name) {
                    let child_path = path.join(&child.name);
                    units.push((child.name, child_path));
                }
            }
        }
        _ => {}
    }
    Ok(())
}
