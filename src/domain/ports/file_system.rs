//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the domain and application layers to perform file
//! operations without depending on concrete implementations (disk, memory).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors. Every variant carries the offending path.
#[derive(Debug, Error)]
pub enum FsError {
    /// File or directory not found
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// A directory was expected
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// I/O error
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Map an `io::Error` to the closest variant, keeping the path.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - real disk, atomic writes
/// - `MemoryFs` - in-memory for testing
pub trait FileSystem {
    /// Read file content as bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Read file content as UTF-8
    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes)
            .map_err(|_| FsError::Other(format!("{} is not valid UTF-8", path.display())))
    }

    /// Write content to a file, creating parent directories
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// List a directory, sorted by name
    fn list(&self, dir: &Path) -> FsResult<Vec<DirEntry>>;

    /// Remove a file or a whole directory tree. Missing paths are not an error.
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// File size in bytes
    fn size(&self, path: &Path) -> FsResult<u64>;

    /// Move a file or directory tree
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// True when `path` is a regular file
    fn is_file(&self, path: &Path) -> bool {
        self.exists(path) && !self.is_dir(path)
    }

    /// Give `to` the permission bits of `from`. Both must exist.
    fn copy_permissions(&self, from: &Path, to: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn list(&self, dir: &Path) -> FsResult<Vec<DirEntry>> {
        (**self).list(dir)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        (**self).remove(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn size(&self, path: &Path) -> FsResult<u64> {
        (**self).size(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).rename(from, to)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn copy_permissions(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).copy_permissions(from, to)
    }
}
