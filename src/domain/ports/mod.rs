//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod prompter;
pub mod sync_events;

pub use file_system::{DirEntry, FileSystem, FsError, FsResult};
pub use prompter::{is_affirmative, AssumeNo, AssumeYes, Prompter};
pub use sync_events::{NoopSink, SyncEvent, SyncEventSink};
