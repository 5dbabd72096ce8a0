//! Error types for skill-factory
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow` at the
//! command boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for skill-factory operations
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Main error type for skill-factory operations
#[derive(Error, Debug)]
pub enum FactoryError {
    /// Factory root is missing or unreadable. Raised before any mutation.
    #[error("factory source {} is not readable: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Comparing a unit's two sides failed
    #[error("failed to compare '{unit}': {source}")]
    Comparison {
        unit: String,
        #[source]
        source: FsError,
    },

    /// Writing a unit (or rule) into its destination failed
    #[error("failed to copy '{unit}': {source}")]
    Copy {
        unit: String,
        #[source]
        source: FsError,
    },

    /// Creating or swapping the target tree failed
    #[error("failed to prepare target {}: {source}", path.display())]
    TargetSetup {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Install refused because the target already exists
    #[error("{} already exists - run `skills update` to refresh it", path.display())]
    AlreadyInstalled { path: PathBuf },

    /// Update/backport need an installed tree
    #[error("{} not found - run `skills install` first", path.display())]
    NotInstalled { path: PathBuf },

    /// The named unit is not present where it has to be
    #[error("skill '{name}' not found at {}", path.display())]
    UnitNotFound { name: String, path: PathBuf },

    /// Unit names are single path components
    #[error("invalid skill name '{name}': {reason}")]
    InvalidUnitName { name: String, reason: &'static str },

    /// Preset name not defined in presets.yaml
    #[error("unknown preset '{name}'")]
    UnknownPreset { name: String },

    /// Preset `extends` chain loops back on itself
    #[error("preset cycle detected: {chain}")]
    PresetCycle { chain: String },

    /// presets.yaml could not be parsed
    #[error("invalid presets file {}: {message}", file.display())]
    InvalidPresets { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Filesystem error outside a unit scope
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FactoryError {
    /// Name of the unit this error is scoped to, if any.
    pub fn unit(&self) -> Option<&str> {
        match self {
            FactoryError::Comparison { unit, .. } | FactoryError::Copy { unit, .. } => Some(unit),
            FactoryError::UnitNotFound { name, .. } | FactoryError::InvalidUnitName { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }
}
