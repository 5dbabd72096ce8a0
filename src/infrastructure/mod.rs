//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `prompt/` - Confirmation prompters (Line, Scripted)

pub mod fs;
pub mod prompt;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
pub use prompt::{LinePrompter, ScriptedPrompter};
