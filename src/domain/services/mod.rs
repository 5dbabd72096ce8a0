//! Domain Services
//!
//! Pure business logic services. Everything that touches files goes through
//! the `FileSystem` port, so these are testable against `MemoryFs`.

mod differ;
mod layout;
mod preset_resolver;
mod rewriter;
pub mod rule_converter;

pub use differ::{DiffLine, DiffResult, DiffTag, Differ, DirectoryDiffer, BINARY_DIFF};
pub use layout::{
    classify, is_hidden, is_meta_document, rule_file_name, SkipReason, SourceEntry,
    META_DOCUMENTS, REFERENCES_DIR, STANDARDS_DIR,
};
pub use preset_resolver::{Preset, PresetCatalog, PresetSummary, SkillSelection};
pub use rewriter::{PathRewriter, STANDARDS_MARKER};
pub use rule_converter::{extract_title, FALLBACK_TITLE};
