//! Unit name value object
//!
//! A unit is addressed by name inside its category directory, so the name has
//! to be a single, plain path component.

use std::fmt;

use crate::error::{FactoryError, FactoryResult};

/// Validated unit (skill) name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitName(String);

impl UnitName {
    pub fn parse(name: &str) -> FactoryResult<Self> {
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name == "." || name == ".." {
            Some("name is a relative path segment")
        } else if name.contains('/') || name.contains('\\') {
            Some("name contains a path separator")
        } else if name.chars().any(char::is_control) {
            Some("name contains control characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(FactoryError::InvalidUnitName {
                name: name.to_string(),
                reason,
            }),
            None => Ok(Self(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UnitName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
