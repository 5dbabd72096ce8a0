//! Source layout routing
//!
//! Decides what each top-level entry of the factory root becomes in the
//! installed tree. Pure: callers supply the facts (name, directory or file,
//! marker present) and act on the returned [`SourceEntry`].

use crate::domain::value_objects::Category;

/// Directory whose documents are converted into rules
pub const STANDARDS_DIR: &str = "_standards";

/// Reference material, never installed
pub const REFERENCES_DIR: &str = "references";

/// Root-level documents converted into rules alongside `_standards/`
pub const META_DOCUMENTS: [&str; 2] = ["TEAM.md", "PIPELINE.md"];

/// Routing decision for one factory root entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEntry {
    /// `_standards/`: every markdown file becomes a rule
    Standards,
    /// Flat `*.md` category copied as-is
    FlatCategory(Category),
    /// `skills/` without a marker: its marked children are units
    SkillContainer,
    /// Directory with the marker file
    Unit,
    /// Root-level meta document converted into a rule
    MetaDocument,
    /// Not installed
    Skipped(SkipReason),
}

/// Why an entry was not installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    References,
    Hidden,
    NoMarker,
    LooseFile,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::References => "reference material",
            SkipReason::Hidden => "hidden or reserved directory",
            SkipReason::NoMarker => "no marker file",
            SkipReason::LooseFile => "loose file",
        }
    }
}

/// Route a factory root entry.
pub fn classify(name: &str, is_dir: bool, has_marker: bool) -> SourceEntry {
    if !is_dir {
        return if is_meta_document(name) {
            SourceEntry::MetaDocument
        } else {
            SourceEntry::Skipped(SkipReason::LooseFile)
        };
    }

    if name == STANDARDS_DIR {
        return SourceEntry::Standards;
    }
    if name == REFERENCES_DIR {
        return SourceEntry::Skipped(SkipReason::References);
    }

    match Category::from_dir_name(name) {
        Some(Category::Skills) if !has_marker => return SourceEntry::SkillContainer,
        Some(category) if !category.is_directory_valued() => {
            return SourceEntry::FlatCategory(category)
        }
        _ => {}
    }

    if is_hidden(name) {
        SourceEntry::Skipped(SkipReason::Hidden)
    } else if has_marker {
        SourceEntry::Unit
    } else {
        SourceEntry::Skipped(SkipReason::NoMarker)
    }
}

/// Names starting with `_` or `.` are reserved for factory internals.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('_') || name.starts_with('.')
}

pub fn is_meta_document(name: &str) -> bool {
    META_DOCUMENTS.contains(&name)
}

/// Installed rule file name for a converted document (`GIT.md` -> `git.md`)
pub fn rule_file_name(document: &str) -> String {
    document.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standards_and_references() {
        assert_eq!(classify("_standards", true, false), SourceEntry::Standards);
        assert_eq!(
            classify("references", true, true),
            SourceEntry::Skipped(SkipReason::References)
        );
    }

    #[test]
    fn flat_categories_ignore_marker() {
        assert_eq!(
            classify("workflows", true, false),
            SourceEntry::FlatCategory(Category::Workflows)
        );
        assert_eq!(
            classify("rules", true, true),
            SourceEntry::FlatCategory(Category::Rules)
        );
        assert_eq!(
            classify("standards", true, false),
            SourceEntry::FlatCategory(Category::Standards)
        );
    }

    #[test]
    fn skills_dir_is_container_unless_marked() {
        assert_eq!(classify("skills", true, false), SourceEntry::SkillContainer);
        assert_eq!(classify("skills", true, true), SourceEntry::Unit);
    }

    #[test]
    fn marker_decides_units() {
        assert_eq!(classify("alpha", true, true), SourceEntry::Unit);
        assert_eq!(
            classify("beta", true, false),
            SourceEntry::Skipped(SkipReason::NoMarker)
        );
    }

    #[test]
    fn reserved_prefixes_are_hidden() {
        assert_eq!(
            classify("_meta", true, true),
            SourceEntry::Skipped(SkipReason::Hidden)
        );
        assert_eq!(
            classify(".git", true, false),
            SourceEntry::Skipped(SkipReason::Hidden)
        );
    }

    #[test]
    fn loose_files() {
        assert_eq!(classify("TEAM.md", false, false), SourceEntry::MetaDocument);
        assert_eq!(classify("PIPELINE.md", false, false), SourceEntry::MetaDocument);
        assert_eq!(
            classify("README.md", false, false),
            SourceEntry::Skipped(SkipReason::LooseFile)
        );
    }

    #[test]
    fn rule_names_are_lowercased() {
        assert_eq!(rule_file_name("TEAM.md"), "team.md");
        assert_eq!(rule_file_name("TDD_Protocol.MD"), "tdd_protocol.md");
    }
}
