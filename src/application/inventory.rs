//! Inventory - which units live where
//!
//! Backs `skills list`: the union of factory units and installed units, each
//! with a sync status.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::application::units::{factory_units, installed_units};
use crate::domain::ports::FileSystem;
use crate::error::FactoryResult;

/// Where a unit exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// In the factory and in the project
    Synced,
    /// Only in the project (a custom unit)
    LocalOnly,
    /// Only in the factory (available to install)
    NotInstalled,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Synced => "synced",
            SyncStatus::LocalOnly => "local only",
            SyncStatus::NotInstalled => "not installed",
        }
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    pub name: String,
    pub installed: bool,
    pub in_factory: bool,
    pub status: SyncStatus,
}

/// Every unit known on either side, sorted by name.
///
/// An unreadable factory is logged and treated as empty so local units can
/// still be listed.
pub fn inventory<F: FileSystem + ?Sized>(
    fs: &F,
    source: &Path,
    skills_dir: &Path,
    marker_file: &str,
) -> FactoryResult<Vec<InventoryEntry>> {
    let factory: BTreeSet<String> = match factory_units(fs, source, marker_file) {
        Ok(units) => units.into_keys().collect(),
        Err(err) => {
            warn!(source = %source.display(), error = %err, "factory not readable");
            BTreeSet::new()
        }
    };
    let installed: BTreeSet<String> = installed_units(fs, skills_dir)?.into_iter().collect();

    Ok(factory
        .union(&installed)
        .map(|name| {
            let installed = installed.contains(name);
            let in_factory = factory.contains(name);
            let status = match (installed, in_factory) {
                (true, true) => SyncStatus::Synced,
                (true, false) => SyncStatus::LocalOnly,
                _ => SyncStatus::NotInstalled,
            };
            InventoryEntry {
                name: name.clone(),
                installed,
                in_factory,
                status,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryFs;

    fn statuses(entries: &[InventoryEntry]) -> Vec<(&str, SyncStatus)> {
        entries.iter().map(|e| (e.name.as_str(), e.status)).collect()
    }

    #[test]
    fn union_of_both_sides_with_status() {
        let fs = MemoryFs::new();
        fs.add_file("/f/alpha/SKILL.md", "# A");
        fs.add_file("/f/beta/SKILL.md", "# B");
        fs.add_file("/f/_standards/GIT.md", "# Git");
        fs.add_file("/p/.agent/skills/alpha/SKILL.md", "# A");
        fs.add_file("/p/.agent/skills/custom/SKILL.md", "# C");

        let entries = inventory(
            &fs,
            Path::new("/f"),
            Path::new("/p/.agent/skills"),
            "SKILL.md",
        )
        .unwrap();

        assert_eq!(
            statuses(&entries),
            vec![
                ("alpha", SyncStatus::Synced),
                ("beta", SyncStatus::NotInstalled),
                ("custom", SyncStatus::LocalOnly),
            ]
        );
        assert!(entries[0].installed && entries[0].in_factory);
    }

    #[test]
    fn unreadable_factory_lists_local_units() {
        let fs = MemoryFs::new();
        fs.add_file("/p/.agent/skills/custom/SKILL.md", "# C");

        let entries = inventory(
            &fs,
            Path::new("/missing"),
            Path::new("/p/.agent/skills"),
            "SKILL.md",
        )
        .unwrap();

        assert_eq!(statuses(&entries), vec![("custom", SyncStatus::LocalOnly)]);
    }

    #[test]
    fn nothing_installed_yet() {
        let fs = MemoryFs::new();
        fs.add_file("/f/alpha/SKILL.md", "# A");

        let entries = inventory(
            &fs,
            Path::new("/f"),
            Path::new("/p/.agent/skills"),
            "SKILL.md",
        )
        .unwrap();

        assert_eq!(statuses(&entries), vec![("alpha", SyncStatus::NotInstalled)]);
        assert_eq!(entries[0].status.to_string(), "not installed");
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SyncStatus::LocalOnly).unwrap(),
            r#""local_only""#
        );
    }
}
