//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::{DirEntry, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes are atomic: content goes to a temp file in the destination
/// directory, which is then renamed over the target. The replaced file keeps
/// its permission bits; new files are created `0644` on Unix.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;
        tmp.write_all(content)
            .map_err(|e| FsError::from_io(path, e))?;
        if let Some(permissions) = permissions_for(path) {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| FsError::from_io(path, e))?;
        }
        tmp.persist(path).map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn list(&self, dir: &Path) -> FsResult<Vec<DirEntry>> {
        let metadata = std::fs::metadata(dir).map_err(|e| FsError::from_io(dir, e))?;
        if !metadata.is_dir() {
            return Err(FsError::NotADirectory(dir.to_path_buf()));
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| FsError::from_io(dir, e))? {
            let entry = entry.map_err(|e| FsError::from_io(dir, e))?;
            let path = entry.path();
            // Follow symlinks so linked unit directories count as directories
            let is_dir = path.is_dir();
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let metadata = match std::fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(FsError::from_io(path, e)),
        };
        let result = if metadata.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };
        result.map_err(|e| FsError::from_io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn size(&self, path: &Path) -> FsResult<u64> {
        std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| FsError::from_io(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        std::fs::rename(from, to).map_err(|e| FsError::from_io(from, e))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn copy_permissions(&self, from: &Path, to: &Path) -> FsResult<()> {
        let permissions = std::fs::metadata(from)
            .map_err(|e| FsError::from_io(from, e))?
            .permissions();
        std::fs::set_permissions(to, permissions).map_err(|e| FsError::from_io(to, e))
    }
}

/// Mode for the temp file that replaces `path`: the current file's, or the
/// default for new files. Temp files start out owner-only.
fn permissions_for(path: &Path) -> Option<std::fs::Permissions> {
    if let Ok(metadata) = std::fs::metadata(path) {
        return Some(metadata.permissions());
    }
    default_permissions()
}

#[cfg(unix)]
fn default_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<std::fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("test.txt");
        let fs = LocalFs::new();

        fs.write(&file, b"hello world").unwrap();
        let content = fs.read_to_string(&file).unwrap();

        assert_eq!(content, "hello world");
    }

    #[test]
    fn local_fs_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("dir").join("test.txt");
        let fs = LocalFs::new();

        fs.write(&file, b"content").unwrap();

        assert!(file.exists());
    }

    #[test]
    fn local_fs_write_overwrites_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.md");
        let fs = LocalFs::new();

        fs.write(&file, b"Original").unwrap();
        fs.write(&file, b"Replaced").unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "Replaced");
        let names: Vec<String> = fs
            .list(dir.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a.md"]);
    }

    #[test]
    fn local_fs_list_is_sorted_and_typed() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        fs.write(&dir.path().join("b.md"), b"b").unwrap();
        fs.write(&dir.path().join("a.md"), b"a").unwrap();
        fs.create_dir_all(&dir.path().join("c")).unwrap();

        let entries = fs.list(dir.path()).unwrap();
        assert_eq!(
            entries,
            vec![DirEntry::file("a.md"), DirEntry::file("b.md"), DirEntry::dir("c")]
        );
    }

    #[test]
    fn local_fs_list_missing_dir_is_not_found() {
        let dir = tempdir().unwrap();
        let err = LocalFs::new().list(&dir.path().join("nope")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn local_fs_remove_tree_and_missing() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        let tree = dir.path().join("unit");
        fs.write(&tree.join("deep").join("x.md"), b"x").unwrap();

        fs.remove(&tree).unwrap();
        assert!(!tree.exists());

        // Removing again is fine
        fs.remove(&tree).unwrap();
    }

    #[test]
    fn local_fs_size_and_rename() {
        let dir = tempdir().unwrap();
        let fs = LocalFs::new();
        let from = dir.path().join("staging");
        let to = dir.path().join("final");
        fs.write(&from.join("f.txt"), b"12345").unwrap();

        fs.rename(&from, &to).unwrap();

        assert!(!fs.exists(&from));
        assert!(fs.is_dir(&to));
        assert_eq!(fs.size(&to.join("f.txt")).unwrap(), 5);
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_new_files_are_world_readable() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("SKILL.md");

        LocalFs::new().write(&file, b"# Alpha").unwrap();

        assert_eq!(mode(&file), 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_overwrite_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let file = dir.path().join("run.sh");
        std::fs::write(&file, "echo one").unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o755)).unwrap();

        LocalFs::new().write(&file, b"echo two").unwrap();

        assert_eq!(mode(&file), 0o755);
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "echo two");
    }

    #[cfg(unix)]
    #[test]
    fn local_fs_copy_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let from = dir.path().join("run.sh");
        let to = dir.path().join("copy.sh");
        std::fs::write(&from, "echo").unwrap();
        std::fs::set_permissions(&from, std::fs::Permissions::from_mode(0o750)).unwrap();
        let fs = LocalFs::new();
        fs.write(&to, b"echo").unwrap();

        fs.copy_permissions(&from, &to).unwrap();

        assert_eq!(mode(&to), 0o750);
        assert!(fs.copy_permissions(&dir.path().join("nope"), &to).unwrap_err().is_not_found());
    }

    #[test]
    fn local_fs_read_missing_maps_to_not_found() {
        let dir = tempdir().unwrap();
        let err = LocalFs::new().read(&dir.path().join("missing")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing"));
    }
}
