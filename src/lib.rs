//! Skill Factory - keep agent skill bundles in sync between a factory and
//! project workspaces
//!
//! A *factory* is a directory of skill units (directories carrying a marker
//! file), shared standards and team documents. Installing copies the units
//! into a project's `.agent/` tree, rewriting `_standards/` references and
//! turning standards into rules. Update and backport move changes in either
//! direction, one confirmed unit at a time.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    BackportOutcome, EngineSettings, InstallOptions, InstallReport, RefreshReport, SyncEngine,
    UpdateReport,
};
pub use config::FactoryConfig;
pub use domain::ports::{FileSystem, Prompter, SyncEvent, SyncEventSink};
pub use domain::services::{DirectoryDiffer, PathRewriter};
pub use domain::value_objects::{Category, ChangeRecord, UnitName};
pub use error::{FactoryError, FactoryResult};
pub use infrastructure::{LocalFs, MemoryFs};
