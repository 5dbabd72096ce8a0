//! Configuration module for skill-factory
//!
//! Resolution order:
//! 1. Environment variables (SKILL_FACTORY_*)
//! 2. `--config <file>`
//! 3. User config (~/.config/skill-factory/config.toml)
//! 4. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{user_config_path, ENV_GLOBAL_PATH, ENV_SOURCE, ENV_TARGET_DIR};
pub use types::{DoctorConfig, FactoryConfig};
