//! Assertion helpers with descriptive failure messages.

use std::path::Path;

/// List all files under a directory (for failure messages)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that a file exists in the project.
///
/// ```ignore
/// assert_installed!(env, ".agent/skills/alpha/SKILL.md");
/// ```
#[macro_export]
macro_rules! assert_installed {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            full_path.exists(),
            "Expected '{}' to exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.project_root.path()).join("\n  ")
        );
    };
}

/// Assert that a file does not exist in the project.
#[macro_export]
macro_rules! assert_not_installed {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(!full_path.exists(), "Expected '{}' to NOT exist", $path);
    };
}

/// Assert that stdout or stderr contains `needle`.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain '{}'.\nGot:\n{}",
            $needle,
            combined
        );
    };
}
