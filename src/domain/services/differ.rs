//! Differ Domain Service
//!
//! Computes differences between file versions and between whole unit
//! directories, for review before a confirmation prompt.

use std::path::Path;

use similar::{ChangeTag, TextDiff};

use crate::domain::ports::{FileSystem, FsError, FsResult};
use crate::domain::services::PathRewriter;
use crate::domain::value_objects::{is_markdown, ChangeRecord};

/// A single line change in a diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// The type of change
    pub tag: DiffTag,
    /// The content of the line
    pub content: String,
}

/// Type of change in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    /// Line was deleted
    Delete,
    /// Line was inserted
    Insert,
    /// Line is unchanged
    Equal,
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => DiffTag::Delete,
            ChangeTag::Insert => DiffTag::Insert,
            ChangeTag::Equal => DiffTag::Equal,
        }
    }
}

/// Result of a diff operation
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    /// All lines in the diff
    pub lines: Vec<DiffLine>,
    /// Number of lines added
    pub additions: usize,
    /// Number of lines deleted
    pub deletions: usize,
    /// Whether there are any changes
    pub has_changes: bool,
}

impl DiffResult {
    /// Get only the changed lines (insertions and deletions)
    pub fn changed_lines(&self) -> Vec<&DiffLine> {
        self.lines
            .iter()
            .filter(|l| l.tag != DiffTag::Equal)
            .collect()
    }

    /// Render insertions as `+ line` and deletions as `- line`; equal lines
    /// are omitted.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.changed_lines() {
            let sign = match line.tag {
                DiffTag::Insert => '+',
                DiffTag::Delete => '-',
                DiffTag::Equal => continue,
            };
            out.push(sign);
            out.push(' ');
            out.push_str(&line.content);
            if !line.content.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}

/// Line-level text differ
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    /// Create a new Differ instance
    pub fn new() -> Self {
        Self
    }

    /// Compute the diff between two strings
    pub fn diff(&self, old: &str, new: &str) -> DiffResult {
        let text_diff = TextDiff::from_lines(old, new);

        let mut result = DiffResult::default();

        for change in text_diff.iter_all_changes() {
            let tag = DiffTag::from(change.tag());

            match tag {
                DiffTag::Delete => result.deletions += 1,
                DiffTag::Insert => result.additions += 1,
                DiffTag::Equal => {}
            }

            result.lines.push(DiffLine {
                tag,
                content: change.value().to_string(),
            });
        }

        result.has_changes = result.additions > 0 || result.deletions > 0;
        result
    }
}

/// Diff text for a modified file that is not valid UTF-8 on either side
pub const BINARY_DIFF: &str = "binary files differ";

/// Recursive comparison of a reference tree against a candidate tree.
///
/// The candidate defines the universe of paths: files that exist only in the
/// reference are not reported.
pub struct DirectoryDiffer<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    differ: Differ,
    candidate_rewriter: Option<&'a PathRewriter>,
}

impl<'a, F: FileSystem + ?Sized> DirectoryDiffer<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self {
            fs,
            differ: Differ::new(),
            candidate_rewriter: None,
        }
    }

    /// Compare against the candidate's markdown as it would look after
    /// rewriting, i.e. as it would be installed.
    pub fn with_candidate_rewriter(mut self, rewriter: &'a PathRewriter) -> Self {
        self.candidate_rewriter = Some(rewriter);
        self
    }

    /// Ordered change records for every candidate file that is new or
    /// differs from the reference. Any I/O error aborts the comparison.
    pub fn compare(&self, reference: &Path, candidate: &Path) -> FsResult<Vec<ChangeRecord>> {
        if !self.fs.is_dir(candidate) {
            return Err(if self.fs.exists(candidate) {
                FsError::NotADirectory(candidate.to_path_buf())
            } else {
                FsError::NotFound(candidate.to_path_buf())
            });
        }

        let mut changes = Vec::new();
        self.walk(reference, candidate, Path::new(""), &mut changes)?;
        Ok(changes)
    }

    fn walk(
        &self,
        reference: &Path,
        candidate: &Path,
        rel: &Path,
        changes: &mut Vec<ChangeRecord>,
    ) -> FsResult<()> {
        for entry in self.fs.list(&candidate.join(rel))? {
            let rel_path = rel.join(&entry.name);
            if entry.is_dir {
                self.walk(reference, candidate, &rel_path, changes)?;
            } else if let Some(change) = self.compare_file(reference, candidate, &rel_path)? {
                changes.push(change);
            }
        }
        Ok(())
    }

    fn compare_file(
        &self,
        reference: &Path,
        candidate: &Path,
        rel: &Path,
    ) -> FsResult<Option<ChangeRecord>> {
        let reference_path = reference.join(rel);
        if !self.fs.is_file(&reference_path) {
            return Ok(Some(ChangeRecord::new_file(rel)));
        }

        let candidate_bytes = self.candidate_content(&candidate.join(rel))?;
        let reference_size = self.fs.size(&reference_path)?;
        let reference_bytes = self.fs.read(&reference_path)?;

        if reference_size == candidate_bytes.len() as u64 && reference_bytes == candidate_bytes {
            return Ok(None);
        }

        let (Ok(reference_text), Ok(candidate_text)) = (
            std::str::from_utf8(&reference_bytes),
            std::str::from_utf8(&candidate_bytes),
        ) else {
            return Ok(Some(ChangeRecord::modified(rel, BINARY_DIFF)));
        };

        let diff = self.differ.diff(reference_text, candidate_text);
        if !diff.has_changes {
            return Ok(None);
        }

        Ok(Some(ChangeRecord::modified(rel, diff.render())))
    }

    fn candidate_content(&self, path: &Path) -> FsResult<Vec<u8>> {
        let bytes = self.fs.read(path)?;
        let Some(rewriter) = self.candidate_rewriter else {
            return Ok(bytes);
        };

        let is_md = path
            .file_name()
            .map(|n| is_markdown(&n.to_string_lossy()))
            .unwrap_or(false);
        if !is_md {
            return Ok(bytes);
        }

        match String::from_utf8(bytes) {
            Ok(text) => Ok(rewriter.rewrite(&text).into_bytes()),
            Err(err) => Ok(err.into_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::MemoryFs;
    use std::path::PathBuf;

    #[test]
    fn diff_identical_strings() {
        let differ = Differ::new();
        let result = differ.diff("hello\nworld\n", "hello\nworld\n");

        assert!(!result.has_changes);
        assert_eq!(result.additions, 0);
        assert_eq!(result.deletions, 0);
    }

    #[test]
    fn diff_added_line() {
        let differ = Differ::new();
        let result = differ.diff("line1\n", "line1\nline2\n");

        assert!(result.has_changes);
        assert_eq!(result.additions, 1);
        assert_eq!(result.deletions, 0);
    }

    #[test]
    fn diff_modified_line() {
        let differ = Differ::new();
        let result = differ.diff("line1\n", "modified\n");

        assert!(result.has_changes);
        // A modification is 1 deletion + 1 insertion
        assert_eq!(result.additions, 1);
        assert_eq!(result.deletions, 1);
    }

    #[test]
    fn render_omits_equal_lines() {
        let differ = Differ::new();
        let rendered = differ.diff("a\nb\nc\n", "a\nX\nc\n").render();
        assert_eq!(rendered, "- b\n+ X\n");
    }

    #[test]
    fn render_terminates_last_line_without_newline() {
        let differ = Differ::new();
        let rendered = differ.diff("# Old", "# New").render();
        assert_eq!(rendered, "- # Old\n+ # New\n");
    }

    #[test]
    fn diff_counts_additions_and_deletions() {
        let differ = Differ::new();
        let result = differ.diff("a\nb\nc\n", "a\nx\ny\nz\n");

        assert_eq!((result.additions, result.deletions), (3, 2));
        assert_eq!(result.changed_lines().len(), 5);
    }

    fn fixture() -> MemoryFs {
        let fs = MemoryFs::new();
        fs.create_dir_all(Path::new("/ref")).unwrap();
        fs.create_dir_all(Path::new("/cand")).unwrap();
        fs
    }

    #[test]
    fn compare_same_tree_is_empty() {
        let fs = fixture();
        fs.add_file("/ref/SKILL.md", "# Skill\n");
        fs.add_file("/ref/scripts/run.sh", "echo hi\n");

        let changes = DirectoryDiffer::new(&fs)
            .compare(Path::new("/ref"), Path::new("/ref"))
            .unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn compare_detects_new_file() {
        let fs = fixture();
        fs.add_file("/cand/a.md", "hello\n");

        let changes = DirectoryDiffer::new(&fs)
            .compare(Path::new("/ref"), Path::new("/cand"))
            .unwrap();
        assert_eq!(changes, vec![ChangeRecord::new_file("a.md")]);
    }

    #[test]
    fn compare_detects_modified_file() {
        let fs = fixture();
        fs.add_file("/ref/a.md", "line1\nline2\n");
        fs.add_file("/cand/a.md", "line1\nline3\n");

        let changes = DirectoryDiffer::new(&fs)
            .compare(Path::new("/ref"), Path::new("/cand"))
            .unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].path(), Path::new("a.md"));
        let diff = changes[0].diff().unwrap();
        assert!(diff.contains("- line2"));
        assert!(diff.contains("+ line3"));
    }

    #[test]
    fn compare_reports_differing_binary_content() {
        let fs = fixture();
        fs.add_file("/ref/logo.bin", [0x41u8, 0xff, 0x42]);
        fs.add_file("/cand/logo.bin", [0x41u8, 0xfe, 0x42]);
        fs.add_file("/ref/same.bin", [0x00u8, 0xff]);
        fs.add_file("/cand/same.bin", [0x00u8, 0xff]);

        let changes = DirectoryDiffer::new(&fs)
            .compare(Path::new("/ref"), Path::new("/cand"))
            .unwrap();
        assert_eq!(
            changes,
            vec![ChangeRecord::modified("logo.bin", BINARY_DIFF)]
        );
    }

    #[test]
    fn compare_text_against_binary_is_a_change() {
        let fs = fixture();
        fs.add_file("/ref/data", "plain text\n");
        fs.add_file("/cand/data", [0xc3u8, 0x28]);

        let changes = DirectoryDiffer::new(&fs)
            .compare(Path::new("/ref"), Path::new("/cand"))
            .unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].diff(), Some(BINARY_DIFF));
    }

    #[test]
    fn compare_ignores_files_only_in_reference() {
        let fs = fixture();
        fs.add_file("/ref/orphan.md", "left behind\n");
        fs.add_file("/ref/a.md", "same\n");
        fs.add_file("/cand/a.md", "same\n");

        let changes = DirectoryDiffer::new(&fs)
            .compare(Path::new("/ref"), Path::new("/cand"))
            .unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn compare_walks_nested_dirs_in_sorted_order() {
        let fs = fixture();
        fs.add_file("/cand/z.md", "z\n");
        fs.add_file("/cand/b/inner.md", "b\n");
        fs.add_file("/cand/a.md", "a\n");

        let changes = DirectoryDiffer::new(&fs)
            .compare(Path::new("/ref"), Path::new("/cand"))
            .unwrap();
        let paths: Vec<PathBuf> = changes.iter().map(|c| c.path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("a.md"),
                PathBuf::from("b/inner.md"),
                PathBuf::from("z.md")
            ]
        );
    }

    #[test]
    fn compare_missing_candidate_is_an_error() {
        let fs = fixture();
        let err = DirectoryDiffer::new(&fs)
            .compare(Path::new("/ref"), Path::new("/nope"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn compare_read_failure_aborts_without_partial_results() {
        let fs = fixture();
        fs.add_file("/ref/a.md", "a\n");
        fs.add_file("/cand/a.md", "A\n");
        fs.add_file("/ref/b.md", "b\n");
        fs.add_file("/cand/b.md", "B\n");
        fs.fail_reads_under("/cand/b.md");

        let result = DirectoryDiffer::new(&fs).compare(Path::new("/ref"), Path::new("/cand"));
        assert!(result.is_err());
    }

    #[test]
    fn candidate_rewriter_applies_to_markdown_only() {
        let fs = fixture();
        fs.add_file("/ref/SKILL.md", "See .agent/rules/git.md\n");
        fs.add_file("/cand/SKILL.md", "See _standards/GIT.md\n");
        fs.add_file("/ref/notes.txt", "See _standards/GIT.md\n");
        fs.add_file("/cand/notes.txt", "See _standards/GIT.md\n");

        let rewriter = PathRewriter::default();
        let changes = DirectoryDiffer::new(&fs)
            .with_candidate_rewriter(&rewriter)
            .compare(Path::new("/ref"), Path::new("/cand"))
            .unwrap();
        assert!(changes.is_empty(), "unexpected changes: {changes:?}");
    }
}
