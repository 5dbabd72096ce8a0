//! Sync Module
//!
//! Install, update, force-refresh and backport between a factory root and
//! a project's installed tree.
//!
//! ## Structure
//!
//! - `options` - `EngineSettings`, `InstallOptions`
//! - `result` - `InstallReport`, `UpdateReport`, `RefreshReport`, `BackportOutcome`
//! - `engine` - `SyncEngine`
//! - `copy`, `rules` - tree copy with rewrite, rule generation
//!
//! ## Usage
//!
//! ```ignore
//! use skill_factory::application::sync::{EngineSettings, InstallOptions, SyncEngine};
//!
//! let engine = SyncEngine::new(LocalFs::new(), LinePrompter::stdio(), settings);
//! let report = engine.install(&InstallOptions::new())?;
//! ```

mod copy;
mod engine;
mod options;
mod result;
mod rules;

pub use engine::SyncEngine;
pub use options::{EngineSettings, InstallOptions};
pub use result::{BackportOutcome, InstallReport, RefreshReport, UnitFailure, UpdateReport};
