//! Path Rewriter Domain Service
//!
//! Rewrites factory-relative references (`_standards/TDD.md`) into
//! project-relative ones (`.agent/rules/tdd.md`) as markdown moves from the
//! factory into a project. The transform is one-directional.

use crate::domain::value_objects::is_markdown;

/// Reference prefix used inside factory content
pub const STANDARDS_MARKER: &str = "_standards/";

/// Characters that end a referenced file name
const TERMINATORS: &[char] = &[' ', '`', ')', ']', '"', '\'', '/', '\r'];

/// Line-oriented reference rewriter.
///
/// `rewrite(rewrite(x)) == rewrite(x)` holds because the replacement prefix
/// never contains the marker and only non-empty `*.md` spans are touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRewriter {
    marker: String,
    replacement: String,
}

impl PathRewriter {
    pub fn new(marker: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            replacement: replacement.into(),
        }
    }

    /// Rewriter for a project whose installed tree lives in `target_dir`
    /// (e.g. `.agent` rewrites to `.agent/rules/`).
    pub fn for_target_dir(target_dir: &str) -> Self {
        let dir = target_dir.trim_end_matches('/');
        Self::new(STANDARDS_MARKER, format!("{dir}/rules/"))
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Rewrite every reference in `text`. Lines without the marker are
    /// returned unchanged.
    pub fn rewrite(&self, text: &str) -> String {
        if self.marker.is_empty() || !text.contains(&self.marker) {
            return text.to_string();
        }

        text.split('\n')
            .map(|line| self.rewrite_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn rewrite_line(&self, line: &str) -> String {
        if !line.contains(&self.marker) {
            return line.to_string();
        }

        let mut out = String::with_capacity(line.len());
        let mut rest = line;

        while let Some(idx) = rest.find(&self.marker) {
            let (before, from_marker) = rest.split_at(idx);
            out.push_str(before);

            let after_marker = &from_marker[self.marker.len()..];
            let span_len = after_marker
                .find(TERMINATORS)
                .unwrap_or(after_marker.len());
            let filename = &after_marker[..span_len];

            if is_markdown(filename) {
                out.push_str(&self.replacement);
                out.push_str(&filename.to_lowercase());
                rest = &after_marker[span_len..];
            } else {
                // Empty or non-markdown span: leave the marker alone and keep
                // scanning right after it.
                out.push_str(&self.marker);
                rest = after_marker;
            }
        }

        out.push_str(rest);
        out
    }
}

impl Default for PathRewriter {
    fn default() -> Self {
        Self::for_target_dir(".agent")
    }
}
