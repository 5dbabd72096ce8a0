//! Rule generation from `_standards/` and the meta documents

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::services::{rule_converter, rule_file_name, META_DOCUMENTS};
use crate::domain::value_objects::is_markdown;

/// One document to convert into a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuleDocument {
    pub path: PathBuf,
    /// File name inside `rules/`
    pub rule_name: String,
}

impl RuleDocument {
    fn new(path: PathBuf, source_name: &str) -> Self {
        Self {
            path,
            rule_name: rule_file_name(source_name),
        }
    }

    /// Label used in logs and failures
    pub fn label(&self) -> String {
        format!("rules/{}", self.rule_name)
    }
}

/// Markdown files directly inside `standards_dir`, sorted by name
pub(crate) fn standards_documents<F: FileSystem + ?Sized>(
    fs: &F,
    standards_dir: &Path,
) -> FsResult<Vec<RuleDocument>> {
    Ok(fs
        .list(standards_dir)?
        .into_iter()
        .filter(|e| !e.is_dir && is_markdown(&e.name))
        .map(|e| RuleDocument::new(standards_dir.join(&e.name), &e.name))
        .collect())
}

/// Meta documents present at the factory root
pub(crate) fn meta_documents<F: FileSystem + ?Sized>(fs: &F, source: &Path) -> Vec<RuleDocument> {
    META_DOCUMENTS
        .iter()
        .map(|name| (source.join(name), *name))
        .filter(|(path, _)| fs.is_file(path))
        .map(|(path, name)| RuleDocument::new(path, name))
        .collect()
}

/// Convert `doc` and write it into `rules_dir`
pub(crate) fn write_rule<F: FileSystem + ?Sized>(
    fs: &F,
    doc: &RuleDocument,
    rules_dir: &Path,
) -> FsResult<()> {
    let bytes = fs.read(&doc.path)?;
    let content = String::from_utf8_lossy(&bytes);
    let rule = rule_converter::convert(&content);
    fs.write(&rules_dir.join(&doc.rule_name), rule.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::MemoryFs;

    #[test]
    fn standards_are_markdown_files_only() {
        let fs = MemoryFs::new();
        fs.add_file("/f/_standards/GIT.md", "# Git");
        fs.add_file("/f/_standards/TDD.md", "# TDD");
        fs.add_file("/f/_standards/diagram.png", "png");
        fs.add_file("/f/_standards/nested/X.md", "# X");

        let docs = standards_documents(&fs, Path::new("/f/_standards")).unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.rule_name.as_str()).collect();
        assert_eq!(names, vec!["git.md", "tdd.md"]);
    }

    #[test]
    fn meta_documents_only_when_present() {
        let fs = MemoryFs::new();
        fs.add_file("/f/PIPELINE.md", "# Pipeline");

        let docs = meta_documents(&fs, Path::new("/f"));
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].rule_name, "pipeline.md");
        assert_eq!(docs[0].label(), "rules/pipeline.md");
    }

    #[test]
    fn write_rule_prepends_metadata() {
        let fs = MemoryFs::new();
        fs.add_file("/f/TEAM.md", "# The Team\nroster\n");

        let doc = RuleDocument::new(PathBuf::from("/f/TEAM.md"), "TEAM.md");
        write_rule(&fs, &doc, Path::new("/p/.agent/rules")).unwrap();

        assert_eq!(
            fs.contents("/p/.agent/rules/team.md").as_deref(),
            Some("---\ndescription: The Team\n---\n\n# The Team\nroster\n")
        );
    }
}
