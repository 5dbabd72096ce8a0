//! Sync results
//!
//! Structured outcomes of each engine command. Declining a unit is a normal
//! outcome, never an error.

use serde::Serialize;

use crate::domain::value_objects::Category;

/// Files installed per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    pub skills: usize,
    pub workflows: usize,
    pub rules: usize,
    pub standards: usize,
}

impl InstallReport {
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Skills => self.skills,
            Category::Workflows => self.workflows,
            Category::Rules => self.rules,
            Category::Standards => self.standards,
        }
    }

    pub(crate) fn add(&mut self, category: Category, n: usize) {
        match category {
            Category::Skills => self.skills += n,
            Category::Workflows => self.workflows += n,
            Category::Rules => self.rules += n,
            Category::Standards => self.standards += n,
        }
    }
}

/// A unit (or rule) skipped because of an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitFailure {
    pub unit: String,
    pub message: String,
}

/// Result of `update`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    /// Changes confirmed and applied
    pub updated: Vec<String>,
    /// Changes shown but declined
    pub declined: Vec<String>,
    /// Already in sync
    pub unchanged: Vec<String>,
    /// Installed units the factory does not have
    pub local_only: Vec<String>,
    pub failed: Vec<UnitFailure>,
    /// Rules regenerated
    pub rules: usize,
}

impl UpdateReport {
    /// No unit had pending changes
    pub fn is_up_to_date(&self) -> bool {
        self.updated.is_empty() && self.declined.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Result of `force_refresh`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    pub refreshed: Vec<String>,
    pub failed: Vec<UnitFailure>,
    pub rules: usize,
}

/// Result of `backport`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BackportOutcome {
    /// Local and factory copies already match
    InSync,
    Declined,
    /// Local unit copied into the factory; `files` changed files were shown
    Applied { files: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_report_counts_by_category() {
        let mut report = InstallReport::default();
        report.add(Category::Skills, 2);
        report.add(Category::Rules, 3);
        report.add(Category::Rules, 1);
        assert_eq!(report.count(Category::Skills), 2);
        assert_eq!(report.count(Category::Rules), 4);
        assert_eq!(report.count(Category::Workflows), 0);
    }

    #[test]
    fn update_report_up_to_date() {
        let mut report = UpdateReport::default();
        report.unchanged.push("alpha".into());
        assert!(report.is_up_to_date());
        report.declined.push("beta".into());
        assert!(!report.is_up_to_date());
    }

    #[test]
    fn backport_outcome_json_shape() {
        let json = serde_json::to_string(&BackportOutcome::Applied { files: 2 }).unwrap();
        assert_eq!(json, r#"{"outcome":"applied","files":2}"#);
    }
}
