//! Domain Layer
//!
//! The core of skill-factory: what gets installed where, how two trees are
//! compared, and how factory content is rewritten on the way into a project.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Category, ChangeRecord, UnitName)
//! - `services/` - Domain services (PathRewriter, DirectoryDiffer, RuleConverter)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, Prompter)
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - file access goes through the `FileSystem` port
//! 2. **No terminal** - confirmation goes through `Prompter`, display through `SyncEventSink`

pub mod ports;
pub mod services;
pub mod value_objects;
