//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FactoryResult;

use super::loader::{self, ConfigWarning};

/// Doctor configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DoctorConfig {
    /// Unit names accepted in `@name` references even when not installed
    #[serde(default)]
    pub known_skills: Vec<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FactoryConfig {
    /// Factory root
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Install root for `skills install --global`
    #[serde(default)]
    pub global_path: Option<PathBuf>,

    /// Per-project directory name
    #[serde(default = "default_target_dir")]
    pub target_dir: String,

    /// Sentinel file that makes a directory a unit
    #[serde(default = "default_marker_file")]
    pub marker_file: String,

    #[serde(default)]
    pub doctor: DoctorConfig,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            global_path: None,
            target_dir: default_target_dir(),
            marker_file: default_marker_file(),
            doctor: DoctorConfig::default(),
        }
    }
}

fn default_source() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("skill-factory").join("squads"))
        .unwrap_or_else(|| PathBuf::from("squads"))
}

fn default_target_dir() -> String {
    ".agent".to_string()
}

fn default_marker_file() -> String {
    "SKILL.md".to_string()
}

impl FactoryConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FactoryResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FactoryResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve `--config`, then the user config, then defaults; env wins.
    pub fn discover(explicit: Option<&Path>) -> FactoryResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (SKILL_FACTORY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Installed tree for a project rooted at `project_dir`
    pub fn project_target(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.target_dir)
    }
}
