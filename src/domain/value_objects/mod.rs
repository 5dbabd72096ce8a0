//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category;
mod change_record;
mod config_warning;
mod unit_name;

pub use category::{is_markdown, Category, MARKDOWN_EXTENSION};
pub use change_record::ChangeRecord;
pub use config_warning::ConfigWarning;
pub use unit_name::UnitName;
