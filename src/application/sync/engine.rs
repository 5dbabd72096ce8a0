//! Sync Engine
//!
//! Orchestrates the four sync commands over a factory root and an installed
//! tree:
//! 1. `install` - route every factory entry into a fresh tree (staged, all or nothing)
//! 2. `update` - diff each installed unit against the factory, confirm, replace
//! 3. `force_refresh` - overwrite every factory unit without asking
//! 4. `backport` - diff one local unit against the factory, confirm, copy back
//!
//! Bulk commands isolate per-unit failures; install aborts on the first one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::units::{factory_units, installed_units};
use crate::domain::ports::{
    DirEntry, FileSystem, FsError, NoopSink, Prompter, SyncEvent, SyncEventSink,
};
use crate::domain::services::{classify, DirectoryDiffer, SourceEntry, STANDARDS_DIR};
use crate::domain::value_objects::{is_markdown, Category, UnitName};
use crate::error::{FactoryError, FactoryResult};

use super::copy::{copy_file, replace_tree};
use super::options::{EngineSettings, InstallOptions};
use super::result::{BackportOutcome, InstallReport, RefreshReport, UnitFailure, UpdateReport};
use super::rules::{meta_documents, standards_documents, write_rule};

enum UnitOutcome {
    Unchanged,
    Applied,
    Declined,
}

/// Sync engine - parameterized by its ports so tests can run it against
/// `MemoryFs` and a scripted prompter.
pub struct SyncEngine<FS, P>
where
    FS: FileSystem,
    P: Prompter,
{
    fs: FS,
    prompter: P,
    events: Arc<dyn SyncEventSink>,
    settings: EngineSettings,
}

impl<FS, P> SyncEngine<FS, P>
where
    FS: FileSystem,
    P: Prompter,
{
    pub fn new(fs: FS, prompter: P, settings: EngineSettings) -> Self {
        Self {
            fs,
            prompter,
            events: Arc::new(NoopSink),
            settings,
        }
    }

    /// Report progress and diffs to `sink`
    pub fn with_event_sink(mut self, sink: Arc<dyn SyncEventSink>) -> Self {
        self.events = sink;
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    fn emit(&self, event: SyncEvent) {
        self.events.on_event(event);
    }

    // ------------------------------------------------------------------
    // install
    // ------------------------------------------------------------------

    /// Build a fresh installed tree from the factory.
    ///
    /// The tree is assembled in a sibling staging directory and renamed into
    /// place only when every step succeeded, so a failed install leaves any
    /// previous tree untouched.
    pub fn install(&self, options: &InstallOptions) -> FactoryResult<InstallReport> {
        let entries = self.source_entries()?;
        let target = &self.settings.target;

        if self.fs.exists(target) && !options.replace_existing {
            return Err(FactoryError::AlreadyInstalled {
                path: target.clone(),
            });
        }

        let staging = sibling(target, "staging");
        self.fs
            .remove(&staging)
            .map_err(|source| setup_error(&staging, source))?;

        let report = match self.build_tree(&staging, &entries, options) {
            Ok(report) => report,
            Err(err) => {
                self.discard(&staging);
                return Err(err);
            }
        };

        self.swap_into_place(&staging, target)?;
        info!(
            target = %target.display(),
            skills = report.skills,
            rules = report.rules,
            "install complete"
        );
        Ok(report)
    }

    fn build_tree(
        &self,
        root: &Path,
        entries: &[DirEntry],
        options: &InstallOptions,
    ) -> FactoryResult<InstallReport> {
        for category in Category::SCAFFOLD {
            let dir = root.join(category.dir_name());
            self.fs
                .create_dir_all(&dir)
                .map_err(|source| setup_error(&dir, source))?;
        }

        let source = &self.settings.source;
        let rules_dir = root.join(Category::Rules.dir_name());
        let mut report = InstallReport::default();

        for entry in entries {
            let path = source.join(&entry.name);
            let has_marker = entry.is_dir && self.fs.is_file(&path.join(&self.settings.marker_file));

            match classify(&entry.name, entry.is_dir, has_marker) {
                SourceEntry::Standards => {
                    let docs = standards_documents(&self.fs, &path)
                        .map_err(|source| copy_error(STANDARDS_DIR, source))?;
                    for doc in docs {
                        write_rule(&self.fs, &doc, &rules_dir)
                            .map_err(|source| copy_error(&doc.label(), source))?;
                        report.add(Category::Rules, 1);
                    }
                }
                SourceEntry::FlatCategory(category) => {
                    let dst = root.join(category.dir_name());
                    let copied = self.copy_flat(&path, &dst, category)?;
                    report.add(category, copied);
                }
                // Units come from the factory index, below
                SourceEntry::SkillContainer | SourceEntry::Unit => {}
                // Converted after every directory, below
                SourceEntry::MetaDocument => {}
                SourceEntry::Skipped(reason) => {
                    debug!(entry = %entry.name, reason = reason.as_str(), "skipping source entry");
                }
            }
        }

        // Same index update, force-refresh and backport use, so every command
        // agrees on which copy of a duplicated name is the unit.
        let units = factory_units(&self.fs, source, &self.settings.marker_file)
            .map_err(|source| copy_error(Category::Skills.dir_name(), source))?;
        for (name, unit_path) in &units {
            if self.install_unit(name, unit_path, root, options)? {
                report.skills += 1;
            }
        }

        for doc in meta_documents(&self.fs, source) {
            write_rule(&self.fs, &doc, &rules_dir)
                .map_err(|source| copy_error(&doc.label(), source))?;
            report.add(Category::Rules, 1);
        }

        Ok(report)
    }

    /// Copy one unit into `root/skills`. False when the preset left it out.
    fn install_unit(
        &self,
        name: &str,
        src: &Path,
        root: &Path,
        options: &InstallOptions,
    ) -> FactoryResult<bool> {
        if !options.includes(name) {
            debug!(unit = %name, "not selected by preset");
            return Ok(false);
        }

        let dst = root.join(Category::Skills.dir_name()).join(name);
        replace_tree(&self.fs, src, &dst, Some(&self.settings.rewriter))
            .map_err(|source| copy_error(name, source))?;
        debug!(unit = %name, "installed unit");
        Ok(true)
    }

    fn copy_flat(&self, src: &Path, dst: &Path, category: Category) -> FactoryResult<usize> {
        let label = category.dir_name();
        let mut copied = 0;
        for entry in self.fs.list(src).map_err(|source| copy_error(label, source))? {
            if entry.is_dir || !is_markdown(&entry.name) {
                continue;
            }
            copy_file(&self.fs, &src.join(&entry.name), &dst.join(&entry.name), None)
                .map_err(|source| copy_error(&format!("{label}/{}", entry.name), source))?;
            copied += 1;
        }
        Ok(copied)
    }

    fn swap_into_place(&self, staging: &Path, target: &Path) -> FactoryResult<()> {
        let backup = sibling(target, "previous");
        let had_previous = self.fs.exists(target);

        if had_previous {
            self.fs
                .remove(&backup)
                .and_then(|_| self.fs.rename(target, &backup))
                .map_err(|source| {
                    self.discard(staging);
                    setup_error(target, source)
                })?;
        }

        if let Err(source) = self.fs.rename(staging, target) {
            if had_previous {
                if let Err(err) = self.fs.rename(&backup, target) {
                    warn!(backup = %backup.display(), error = %err, "failed to restore previous install");
                }
            }
            self.discard(staging);
            return Err(setup_error(target, source));
        }

        if had_previous {
            self.discard(&backup);
        }
        Ok(())
    }

    fn discard(&self, path: &Path) {
        if let Err(err) = self.fs.remove(path) {
            warn!(path = %path.display(), error = %err, "failed to clean up");
        }
    }

    // ------------------------------------------------------------------
    // update / force refresh
    // ------------------------------------------------------------------

    /// Diff every installed unit against the factory and apply confirmed
    /// changes. One `confirm` call per unit with changes; rules are always
    /// regenerated.
    pub fn update(&self) -> FactoryResult<UpdateReport> {
        let factory = self.factory_index()?;
        self.require_installed()?;

        let skills_dir = self.settings.skills_dir();
        let installed = installed_units(&self.fs, &skills_dir)?;
        let mut report = UpdateReport::default();

        for name in installed {
            let Some(factory_path) = factory.get(&name) else {
                debug!(unit = %name, "local only, skipping");
                report.local_only.push(name);
                continue;
            };

            let local = skills_dir.join(&name);
            match self.update_unit(&name, &local, factory_path) {
                Ok(UnitOutcome::Unchanged) => report.unchanged.push(name),
                Ok(UnitOutcome::Applied) => report.updated.push(name),
                Ok(UnitOutcome::Declined) => report.declined.push(name),
                Err(err) => report.failed.push(self.unit_failed(&name, &err)),
            }
        }

        report.rules = self.refresh_rules(&mut report.failed);
        info!(
            updated = report.updated.len(),
            declined = report.declined.len(),
            failed = report.failed.len(),
            "update complete"
        );
        Ok(report)
    }

    fn update_unit(&self, name: &str, local: &Path, factory: &Path) -> FactoryResult<UnitOutcome> {
        let changes = DirectoryDiffer::new(&self.fs)
            .with_candidate_rewriter(&self.settings.rewriter)
            .compare(local, factory)
            .map_err(|source| FactoryError::Comparison {
                unit: name.to_string(),
                source,
            })?;

        if changes.is_empty() {
            return Ok(UnitOutcome::Unchanged);
        }

        self.emit(SyncEvent::UnitChanges {
            unit: name.to_string(),
            changes,
        });
        if !self
            .prompter
            .confirm(&format!("Apply these changes to '{name}'?"))
        {
            self.emit(SyncEvent::UnitDeclined {
                unit: name.to_string(),
            });
            return Ok(UnitOutcome::Declined);
        }

        replace_tree(&self.fs, factory, local, Some(&self.settings.rewriter))
            .map_err(|source| copy_error(name, source))?;
        info!(unit = %name, "updated");
        self.emit(SyncEvent::UnitApplied {
            unit: name.to_string(),
        });
        Ok(UnitOutcome::Applied)
    }

    /// Overwrite every factory unit in the installed tree without diffing or
    /// asking. Failing units are skipped.
    pub fn force_refresh(&self) -> FactoryResult<RefreshReport> {
        let factory = self.factory_index()?;
        self.require_installed()?;

        let skills_dir = self.settings.skills_dir();
        let mut report = RefreshReport::default();

        for (name, path) in &factory {
            match replace_tree(
                &self.fs,
                path,
                &skills_dir.join(name),
                Some(&self.settings.rewriter),
            ) {
                Ok(_) => {
                    self.emit(SyncEvent::UnitApplied { unit: name.clone() });
                    report.refreshed.push(name.clone());
                }
                Err(source) => {
                    let err = copy_error(name, source);
                    report.failed.push(self.unit_failed(name, &err));
                }
            }
        }

        report.rules = self.refresh_rules(&mut report.failed);
        info!(
            refreshed = report.refreshed.len(),
            failed = report.failed.len(),
            "force refresh complete"
        );
        Ok(report)
    }

    /// Regenerate `rules/` from `_standards/` and the meta documents.
    /// Failures are recorded, never fatal.
    fn refresh_rules(&self, failed: &mut Vec<UnitFailure>) -> usize {
        let source = &self.settings.source;
        let rules_dir = self.settings.rules_dir();
        let standards_dir = source.join(STANDARDS_DIR);

        let mut docs = Vec::new();
        if self.fs.is_dir(&standards_dir) {
            match standards_documents(&self.fs, &standards_dir) {
                Ok(found) => docs.extend(found),
                Err(source) => {
                    let err = copy_error(STANDARDS_DIR, source);
                    failed.push(self.unit_failed(STANDARDS_DIR, &err));
                }
            }
        }
        docs.extend(meta_documents(&self.fs, source));

        let mut count = 0;
        for doc in docs {
            match write_rule(&self.fs, &doc, &rules_dir) {
                Ok(()) => count += 1,
                Err(source) => {
                    let label = doc.label();
                    let err = copy_error(&label, source);
                    failed.push(self.unit_failed(&label, &err));
                }
            }
        }

        self.emit(SyncEvent::RulesSynced { count });
        count
    }

    // ------------------------------------------------------------------
    // backport
    // ------------------------------------------------------------------

    /// Copy a locally modified unit back into the factory after one
    /// confirmation. Content is copied as-is; the rewrite is one-way.
    pub fn backport(&self, name: &str) -> FactoryResult<BackportOutcome> {
        let name = UnitName::parse(name)?;
        let local = self.settings.skills_dir().join(name.as_str());
        if !self.fs.is_dir(&local) {
            return Err(FactoryError::UnitNotFound {
                name: name.to_string(),
                path: local,
            });
        }

        let factory = self.factory_index()?;
        let factory_path = factory
            .get(name.as_str())
            .cloned()
            .unwrap_or_else(|| self.settings.source.join(name.as_str()));

        let changes = DirectoryDiffer::new(&self.fs)
            .compare(&factory_path, &local)
            .map_err(|source| FactoryError::Comparison {
                unit: name.to_string(),
                source,
            })?;

        if changes.is_empty() {
            info!(unit = %name, "already in sync with factory");
            return Ok(BackportOutcome::InSync);
        }

        let files = changes.len();
        self.emit(SyncEvent::UnitChanges {
            unit: name.to_string(),
            changes,
        });
        if !self
            .prompter
            .confirm(&format!("Apply these changes to '{name}' in the factory?"))
        {
            self.emit(SyncEvent::UnitDeclined {
                unit: name.to_string(),
            });
            return Ok(BackportOutcome::Declined);
        }

        replace_tree(&self.fs, &local, &factory_path, None)
            .map_err(|source| copy_error(name.as_str(), source))?;
        info!(unit = %name, factory = %factory_path.display(), "backported");
        self.emit(SyncEvent::UnitApplied {
            unit: name.to_string(),
        });
        Ok(BackportOutcome::Applied { files })
    }

    // ------------------------------------------------------------------
    // helpers
    // ------------------------------------------------------------------

    fn source_entries(&self) -> FactoryResult<Vec<DirEntry>> {
        self.fs
            .list(&self.settings.source)
            .map_err(|source| self.source_error(source))
    }

    fn factory_index(&self) -> FactoryResult<BTreeMap<String, PathBuf>> {
        factory_units(&self.fs, &self.settings.source, &self.settings.marker_file)
            .map_err(|source| self.source_error(source))
    }

    fn source_error(&self, source: FsError) -> FactoryError {
        FactoryError::SourceUnavailable {
            path: self.settings.source.clone(),
            source,
        }
    }

    fn require_installed(&self) -> FactoryResult<()> {
        if self.fs.is_dir(&self.settings.target) {
            Ok(())
        } else {
            Err(FactoryError::NotInstalled {
                path: self.settings.target.clone(),
            })
        }
    }

    fn unit_failed(&self, unit: &str, err: &FactoryError) -> UnitFailure {
        warn!(unit = %unit, error = %err, "skipping unit");
        let failure = UnitFailure {
            unit: unit.to_string(),
            message: err.to_string(),
        };
        self.emit(SyncEvent::UnitFailed {
            unit: failure.unit.clone(),
            message: failure.message.clone(),
        });
        failure
    }
}

fn copy_error(unit: &str, source: FsError) -> FactoryError {
    FactoryError::Copy {
        unit: unit.to_string(),
        source,
    }
}

fn setup_error(path: &Path, source: FsError) -> FactoryError {
    FactoryError::TargetSetup {
        path: path.to_path_buf(),
        source,
    }
}

/// `<parent>/<name>.<suffix>` next to `target`
fn sibling(target: &Path, suffix: &str) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "target".to_string());
    target.with_file_name(format!("{name}.{suffix}"))
}
