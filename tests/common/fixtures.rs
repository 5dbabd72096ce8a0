//! Factory fixture
//!
//! ```text
//! factory/
//!   product-manager/SKILL.md       (mentions _standards/GIT.md)
//!   product-manager/scripts/run.sh
//!   tech-lead/SKILL.md
//!   skills/backend-dev/SKILL.md    (container child)
//!   draft/notes.md                 (no marker, ignored)
//!   references/guide.md            (ignored)
//!   _standards/GIT.md
//!   workflows/ship.md
//!   TEAM.md
//!   _meta/presets.yaml
//! ```

use std::path::Path;

use super::env::write;

pub const PRODUCT_MANAGER: &str = "# Product Manager\n\nSee _standards/GIT.md before committing.\nHand off to @tech-lead.\n";
pub const TECH_LEAD: &str = "# Tech Lead\n\nReview everything.\n";
pub const BACKEND_DEV: &str = "# Backend Dev\n\nSee scripts/missing.sh for setup.\n";
pub const GIT_STANDARD: &str = "# Git Workflow\n\nRebase before merging.\n";

pub const PRESETS_YAML: &str = r#"core:
  description: Everyday skills
  skills: [product-manager, tech-lead]
backend:
  description: Core plus backend
  extends: core
  skills: backend-dev
_internal:
  skills: "*"
"#;

pub fn write_factory(root: &Path) {
    write(&root.join("product-manager/SKILL.md"), PRODUCT_MANAGER);
    write(&root.join("product-manager/scripts/run.sh"), "#!/bin/sh\necho run\n");
    write(&root.join("tech-lead/SKILL.md"), TECH_LEAD);
    write(&root.join("skills/backend-dev/SKILL.md"), BACKEND_DEV);
    write(&root.join("draft/notes.md"), "unfinished\n");
    write(&root.join("references/guide.md"), "reference material\n");
    write(&root.join("_standards/GIT.md"), GIT_STANDARD);
    write(&root.join("workflows/ship.md"), "# Ship\n\n1. Tag\n2. Push\n");
    write(&root.join("TEAM.md"), "# The Team\n");
    write(&root.join("_meta/presets.yaml"), PRESETS_YAML);
}
