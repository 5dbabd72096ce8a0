//! In-memory File System
//!
//! A `FileSystem` double for tests. Directories are explicit nodes; writing a
//! file creates its ancestors. Reads or writes under a path prefix can be made
//! to fail with `PermissionDenied` to exercise error paths.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{DirEntry, FileSystem, FsError, FsResult};

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Dir,
}

#[derive(Debug, Default)]
struct State {
    nodes: BTreeMap<PathBuf, Node>,
    deny_reads: Vec<PathBuf>,
    deny_writes: Vec<PathBuf>,
}

impl State {
    fn denied(prefixes: &[PathBuf], path: &Path) -> bool {
        prefixes.iter().any(|p| path.starts_with(p))
    }

    fn check_read(&self, path: &Path) -> FsResult<()> {
        if Self::denied(&self.deny_reads, path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        Ok(())
    }

    fn check_write(&self, path: &Path) -> FsResult<()> {
        if Self::denied(&self.deny_writes, path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        Ok(())
    }

    fn ensure_ancestors(&mut self, path: &Path) -> FsResult<()> {
        let mut missing = Vec::new();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            match self.nodes.get(ancestor) {
                Some(Node::Dir) => break,
                Some(Node::File(_)) => return Err(FsError::NotADirectory(ancestor.to_path_buf())),
                None => missing.push(ancestor.to_path_buf()),
            }
        }
        for dir in missing {
            self.nodes.insert(dir, Node::Dir);
        }
        Ok(())
    }

    fn subtree(&self, root: &Path) -> Vec<PathBuf> {
        self.nodes
            .range(root.to_path_buf()..)
            .take_while(|(p, _)| p.starts_with(root))
            .map(|(p, _)| p.clone())
            .collect()
    }
}

/// In-memory file system
#[derive(Debug, Default)]
pub struct MemoryFs {
    state: Mutex<State>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a file, creating its parent directories. Ignores fault injection.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = path.as_ref();
        let mut state = self.state();
        if state.ensure_ancestors(path).is_ok() {
            state
                .nodes
                .insert(path.to_path_buf(), Node::File(content.as_ref().to_vec()));
        }
    }

    /// Seed an empty directory
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.state();
        if state.ensure_ancestors(path).is_ok() {
            state.nodes.insert(path.to_path_buf(), Node::Dir);
        }
    }

    /// Every read, list or size under `prefix` fails with `PermissionDenied`
    pub fn fail_reads_under(&self, prefix: impl AsRef<Path>) {
        self.state().deny_reads.push(prefix.as_ref().to_path_buf());
    }

    /// Every write, create, remove or rename under `prefix` fails
    pub fn fail_writes_under(&self, prefix: impl AsRef<Path>) {
        self.state().deny_writes.push(prefix.as_ref().to_path_buf());
    }

    /// Drop all injected faults
    pub fn clear_faults(&self) {
        let mut state = self.state();
        state.deny_reads.clear();
        state.deny_writes.clear();
    }

    /// File content as UTF-8, if the file exists
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.state().nodes.get(path.as_ref()) {
            Some(Node::File(bytes)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }

    /// All file paths under `root`, sorted
    pub fn files_under(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let state = self.state();
        state
            .subtree(root.as_ref())
            .into_iter()
            .filter(|p| matches!(state.nodes.get(p), Some(Node::File(_))))
            .collect()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        let state = self.state();
        state.check_read(path)?;
        match state.nodes.get(path) {
            Some(Node::File(bytes)) => Ok(bytes.clone()),
            Some(Node::Dir) => Err(FsError::Other(format!(
                "{} is a directory",
                path.display()
            ))),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut state = self.state();
        state.check_write(path)?;
        if matches!(state.nodes.get(path), Some(Node::Dir)) {
            return Err(FsError::Other(format!(
                "{} is a directory",
                path.display()
            )));
        }
        state.ensure_ancestors(path)?;
        state
            .nodes
            .insert(path.to_path_buf(), Node::File(content.to_vec()));
        Ok(())
    }

    fn list(&self, dir: &Path) -> FsResult<Vec<DirEntry>> {
        let state = self.state();
        state.check_read(dir)?;
        match state.nodes.get(dir) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => return Err(FsError::NotADirectory(dir.to_path_buf())),
            None => return Err(FsError::NotFound(dir.to_path_buf())),
        }

        let mut entries: Vec<DirEntry> = state
            .nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(dir))
            .filter_map(|(p, node)| {
                let name = p.file_name()?.to_string_lossy().into_owned();
                Some(DirEntry {
                    name,
                    is_dir: matches!(node, Node::Dir),
                })
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let mut state = self.state();
        state.check_write(path)?;
        for p in state.subtree(path) {
            state.nodes.remove(&p);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.state().nodes.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.state().nodes.get(path), Some(Node::Dir))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut state = self.state();
        state.check_write(path)?;
        match state.nodes.get(path) {
            Some(Node::Dir) => Ok(()),
            Some(Node::File(_)) => Err(FsError::NotADirectory(path.to_path_buf())),
            None => {
                state.ensure_ancestors(path)?;
                state.nodes.insert(path.to_path_buf(), Node::Dir);
                Ok(())
            }
        }
    }

    fn size(&self, path: &Path) -> FsResult<u64> {
        let state = self.state();
        state.check_read(path)?;
        match state.nodes.get(path) {
            Some(Node::File(bytes)) => Ok(bytes.len() as u64),
            Some(Node::Dir) => Ok(0),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        let mut state = self.state();
        state.check_write(from)?;
        state.check_write(to)?;
        if !state.nodes.contains_key(from) {
            return Err(FsError::NotFound(from.to_path_buf()));
        }
        if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !matches!(state.nodes.get(parent), Some(Node::Dir)) {
                return Err(FsError::NotFound(parent.to_path_buf()));
            }
        }
        if state.subtree(to).len() > 1 {
            return Err(FsError::Other(format!(
                "{} is not empty",
                to.display()
            )));
        }
        state.nodes.remove(to);

        for old in state.subtree(from) {
            if let Some(node) = state.nodes.remove(&old) {
                let new = match old.strip_prefix(from) {
                    Ok(rel) if rel.as_os_str().is_empty() => to.to_path_buf(),
                    Ok(rel) => to.join(rel),
                    Err(_) => continue,
                };
                state.nodes.insert(new, node);
            }
        }
        Ok(())
    }

    // No permission bits in memory; only the paths are checked.
    fn copy_permissions(&self, from: &Path, to: &Path) -> FsResult<()> {
        let state = self.state();
        state.check_read(from)?;
        state.check_write(to)?;
        for path in [from, to] {
            if !state.nodes.contains_key(path) {
                return Err(FsError::NotFound(path.to_path_buf()));
            }
        }
        Ok(())
    }
}
