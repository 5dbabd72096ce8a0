//! Engine settings and install options

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::FactoryConfig;
use crate::domain::services::PathRewriter;
use crate::domain::value_objects::Category;

/// Everything the engine needs to know about where things live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Factory root
    pub source: PathBuf,
    /// Installed tree root (e.g. `<project>/.agent`)
    pub target: PathBuf,
    /// Sentinel file that makes a directory a unit
    pub marker_file: String,
    /// Applied to markdown on its way from factory to project
    pub rewriter: PathRewriter,
}

impl EngineSettings {
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            marker_file: "SKILL.md".to_string(),
            rewriter: PathRewriter::default(),
        }
    }

    /// Settings for installing into `target` with the given config
    pub fn from_config(config: &FactoryConfig, target: impl Into<PathBuf>) -> Self {
        Self {
            source: config.source.clone(),
            target: target.into(),
            marker_file: config.marker_file.clone(),
            rewriter: PathRewriter::for_target_dir(&config.target_dir),
        }
    }

    pub fn with_marker_file(mut self, marker_file: impl Into<String>) -> Self {
        self.marker_file = marker_file.into();
        self
    }

    pub fn with_rewriter(mut self, rewriter: PathRewriter) -> Self {
        self.rewriter = rewriter;
        self
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.target.join(category.dir_name())
    }

    pub fn skills_dir(&self) -> PathBuf {
        self.category_dir(Category::Skills)
    }

    pub fn rules_dir(&self) -> PathBuf {
        self.category_dir(Category::Rules)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Options for `install`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Replace an existing installed tree instead of refusing
    pub replace_existing: bool,
    /// Only these units (e.g. from a preset); `None` installs every unit
    pub skill_filter: Option<BTreeSet<String>>,
}

impl InstallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replacing_existing(mut self, replace: bool) -> Self {
        self.replace_existing = replace;
        self
    }

    pub fn with_skill_filter(mut self, skills: impl IntoIterator<Item = String>) -> Self {
        self.skill_filter = Some(skills.into_iter().collect());
        self
    }

    /// Whether the unit `name` passes the filter
    pub fn includes(&self, name: &str) -> bool {
        match &self.skill_filter {
            Some(filter) => filter.contains(name),
            None => true,
        }
    }
}
