//! Category value object - the top-level groupings of an installed tree
//!
//! - `Skills`: directory-valued units, recognized by the marker file
//! - `Workflows`, `Rules`, `Standards`: flat, file-valued units (`*.md`)

use serde::{Deserialize, Serialize};

/// Extension that identifies file-valued units and rewritable content
pub const MARKDOWN_EXTENSION: &str = "md";

/// Category of installed content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skills,
    Workflows,
    Rules,
    Standards,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Skills,
        Category::Workflows,
        Category::Rules,
        Category::Standards,
    ];

    /// Subdirectories every install creates up front. `standards/` only
    /// appears when the factory ships one.
    pub const SCAFFOLD: [Category; 3] = [Category::Skills, Category::Rules, Category::Workflows];

    /// Directory name inside both the factory and the target root
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Skills => "skills",
            Category::Workflows => "workflows",
            Category::Rules => "rules",
            Category::Standards => "standards",
        }
    }

    /// Returns true for categories whose units are whole directories
    pub fn is_directory_valued(&self) -> bool {
        matches!(self, Category::Skills)
    }

    /// Parse a directory name back into a category
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.dir_name() == name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Returns true when `name` ends in `.md` (ASCII case-insensitive)
pub fn is_markdown(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(stem, ext)| {
        !stem.is_empty() && ext.eq_ignore_ascii_case(MARKDOWN_EXTENSION)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_skills_are_directory_valued() {
        assert!(Category::Skills.is_directory_valued());
        assert!(!Category::Workflows.is_directory_valued());
        assert!(!Category::Rules.is_directory_valued());
        assert!(!Category::Standards.is_directory_valued());
    }

    #[test]
    fn dir_name_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_dir_name(category.dir_name()), Some(category));
        }
        assert_eq!(Category::from_dir_name("_standards"), None);
    }

    #[test]
    fn display_matches_dir_name() {
        assert_eq!(Category::Workflows.to_string(), "workflows");
    }

    #[test]
    fn markdown_detection() {
        assert!(is_markdown("GIT.md"));
        assert!(is_markdown("notes.MD"));
        assert!(!is_markdown("script.py"));
        assert!(!is_markdown("README"));
        assert!(!is_markdown(".md"));
    }
}
