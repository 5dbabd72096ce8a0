//! Doctor finding types

use serde::Serialize;

/// How bad a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "⚠"),
            Severity::Error => write!(f, "✗"),
        }
    }
}

/// One problem found in one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub unit: String,
    /// 1-based line in the marker file, when the check is line oriented
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub severity: Severity,
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.unit, line, self.message),
            None => write!(f, "{}: {}", self.unit, self.message),
        }
    }
}
