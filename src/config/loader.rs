//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FactoryError, FactoryResult};

use super::types::FactoryConfig;

pub use crate::domain::value_objects::ConfigWarning;

pub const ENV_SOURCE: &str = "SKILL_FACTORY_SOURCE";
pub const ENV_GLOBAL_PATH: &str = "SKILL_FACTORY_GLOBAL_PATH";
pub const ENV_TARGET_DIR: &str = "SKILL_FACTORY_TARGET_DIR";

const KNOWN_KEYS: &[&str] = &[
    "source",
    "global_path",
    "target_dir",
    "marker_file",
    "doctor",
    "known_skills",
];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FactoryResult<(FactoryConfig, Vec<ConfigWarning>)> {
    let content = std::fs::read_to_string(path).map_err(|e| FactoryError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> FactoryResult<(FactoryConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: FactoryConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FactoryError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// `explicit` must exist; the user config is optional.
pub fn discover(explicit: Option<&Path>) -> FactoryResult<(FactoryConfig, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        debug!(config = %path.display(), "loading explicit config");
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(path) = user_config_path() {
        if path.is_file() {
            debug!(config = %path.display(), "loading user config");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(FactoryConfig::default()), Vec::new()))
}

/// Apply environment variable overrides (SKILL_FACTORY_* prefix)
pub fn with_env_overrides(config: FactoryConfig) -> FactoryConfig {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_overrides_from(
    mut config: FactoryConfig,
    var: impl Fn(&str) -> Option<String>,
) -> FactoryConfig {
    let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

    if let Some(source) = non_empty(ENV_SOURCE) {
        config.source = PathBuf::from(source);
    }
    if let Some(global) = non_empty(ENV_GLOBAL_PATH) {
        config.global_path = Some(PathBuf::from(global));
    }
    if let Some(dir) = non_empty(ENV_TARGET_DIR) {
        config.target_dir = dir;
    }

    config
}

/// `$XDG_CONFIG_HOME/skill-factory/config.toml`, else `~/.config/...`
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|d| d.join("skill-factory").join("config.toml"))
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in KNOWN_KEYS {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
