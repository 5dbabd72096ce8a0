//! Unit discovery on either side of a sync

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::services::{classify, is_hidden, SourceEntry};

/// Marked unit directories of a factory, by name.
///
/// Top-level units win over same-named children of a `skills/` container.
pub fn factory_units<F: FileSystem + ?Sized>(
    fs: &F,
    source: &Path,
    marker_file: &str,
) -> FsResult<BTreeMap<String, PathBuf>> {
    let mut units = BTreeMap::new();
    let mut contained = Vec::new();

    for entry in fs.list(source)? {
        let path = source.join(&entry.name);
        let has_marker = entry.is_dir && fs.is_file(&path.join(marker_file));
        match classify(&entry.name, entry.is_dir, has_marker) {
            SourceEntry::Unit => {
                units.insert(entry.name, path);
            }
            SourceEntry::SkillContainer => contained.extend(marked_children(fs, &path, marker_file)?),
            _ => {}
        }
    }

    for (name, path) in contained {
        units.entry(name).or_insert(path);
    }
    Ok(units)
}

/// Marked, non-hidden subdirectories of `dir`, sorted by name
fn marked_children<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    marker_file: &str,
) -> FsResult<Vec<(String, PathBuf)>> {
    let mut children = Vec::new();
    for entry in fs.list(dir)? {
        if !entry.is_dir || is_hidden(&entry.name) {
            continue;
        }
        let path = dir.join(&entry.name);
        if fs.is_file(&path.join(marker_file)) {
            children.push((entry.name, path));
        }
    }
    Ok(children)
}

/// Unit directories under an installed `skills/` directory. A missing
/// directory has no units.
pub fn installed_units<F: FileSystem + ?Sized>(fs: &F, skills_dir: &Path) -> FsResult<Vec<String>> {
    if !fs.exists(skills_dir) {
        return Ok(Vec::new());
    }
    Ok(fs
        .list(skills_dir)?
        .into_iter()
        .filter(|e| e.is_dir && !e.name.starts_with('.'))
        .map(|e| e.name)
        .collect())
}
