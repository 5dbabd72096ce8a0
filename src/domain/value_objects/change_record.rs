//! Change records produced by a directory comparison
//!
//! A record exists only for content that differs; "no record" is the in-sync
//! state. Records are never persisted.

use std::fmt;
use std::path::{Path, PathBuf};

/// One difference between a reference tree and a candidate tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeRecord {
    /// File exists only in the candidate tree
    New { path: PathBuf },
    /// File exists on both sides with different content
    Modified { path: PathBuf, diff: String },
}

impl ChangeRecord {
    pub fn new_file(path: impl Into<PathBuf>) -> Self {
        ChangeRecord::New { path: path.into() }
    }

    pub fn modified(path: impl Into<PathBuf>, diff: impl Into<String>) -> Self {
        ChangeRecord::Modified {
            path: path.into(),
            diff: diff.into(),
        }
    }

    /// Path relative to the compared roots
    pub fn path(&self) -> &Path {
        match self {
            ChangeRecord::New { path } | ChangeRecord::Modified { path, .. } => path,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, ChangeRecord::New { .. })
    }

    /// Rendered diff body (`+`/`-` lines); `None` for new files
    pub fn diff(&self) -> Option<&str> {
        match self {
            ChangeRecord::New { .. } => None,
            ChangeRecord::Modified { diff, .. } => Some(diff),
        }
    }

    /// Relative path with `/` separators on every platform
    pub fn display_path(&self) -> String {
        self.path()
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeRecord::New { .. } => write!(f, "+ {} (new file)", self.display_path()),
            ChangeRecord::Modified { diff, .. } => {
                write!(f, "M {}:\n{}", self.display_path(), diff)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_display() {
        let record = ChangeRecord::new_file("scripts/run.sh");
        assert_eq!(record.to_string(), "+ scripts/run.sh (new file)");
        assert!(record.is_new());
        assert_eq!(record.diff(), None);
    }

    #[test]
    fn modified_record_display_is_tagged_and_prefixed() {
        let record = ChangeRecord::modified("SKILL.md", "- old\n+ new\n");
        assert_eq!(record.to_string(), "M SKILL.md:\n- old\n+ new\n");
        assert_eq!(record.diff(), Some("- old\n+ new\n"));
    }

    #[test]
    fn display_path_uses_forward_slashes() {
        let record = ChangeRecord::new_file(Path::new("a").join("b").join("c.md"));
        assert_eq!(record.display_path(), "a/b/c.md");
    }
}
