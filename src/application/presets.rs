//! Presets - named unit bundles read from the factory
//!
//! `<source>/_meta/presets.yaml`:
//!
//! ```yaml
//! core:
//!   description: Everyday skills
//!   skills: [product-manager, tech-lead]
//! backend:
//!   description: Core plus backend
//!   extends: core
//!   skills: backend-dev
//! all:
//!   skills: "*"
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::units::factory_units;
use crate::domain::ports::FileSystem;
use crate::domain::services::{PresetCatalog, PresetSummary};
use crate::error::{FactoryError, FactoryResult};

/// Location of the presets file inside a factory
pub const PRESETS_FILE: &str = "_meta/presets.yaml";

pub fn presets_path(source: &Path) -> PathBuf {
    source.join(PRESETS_FILE)
}

/// Load the factory's preset catalog. A factory without a presets file has
/// an empty catalog.
pub fn load_presets<F: FileSystem + ?Sized>(fs: &F, source: &Path) -> FactoryResult<PresetCatalog> {
    let file = presets_path(source);
    if !fs.exists(&file) {
        debug!(file = %file.display(), "no presets file");
        return Ok(PresetCatalog::default());
    }

    let content = fs.read_to_string(&file)?;
    PresetCatalog::from_yaml(&content).map_err(|message| FactoryError::InvalidPresets { file, message })
}

/// Presets a user can pick from, sorted by name
pub fn list_available_presets<F: FileSystem + ?Sized>(
    fs: &F,
    source: &Path,
) -> FactoryResult<Vec<PresetSummary>> {
    Ok(load_presets(fs, source)?.list())
}

/// Unit names selected by preset `name`, against the units the factory
/// actually has
pub fn resolve_preset<F: FileSystem + ?Sized>(
    fs: &F,
    source: &Path,
    marker_file: &str,
    name: &str,
) -> FactoryResult<BTreeSet<String>> {
    let catalog = load_presets(fs, source)?;
    let all_units: Vec<String> = factory_units(fs, source, marker_file)
        .map_err(|source_err| FactoryError::SourceUnavailable {
            path: source.to_path_buf(),
            source: source_err,
        })?
        .into_keys()
        .collect();

    let selected = catalog.resolve(name, &all_units)?;
    debug!(preset = %name, units = selected.len(), "resolved preset");
    Ok(selected)
}
