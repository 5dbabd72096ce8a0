//! Rule Converter Domain Service
//!
//! Turns a markdown standard into a project rule by prepending a frontmatter
//! block whose description is the document's first `# ` heading.

/// Title used when a document has no usable level-1 heading
pub const FALLBACK_TITLE: &str = "Rule";

/// First `# ` heading in `content`, trimmed. Falls back to [`FALLBACK_TITLE`]
/// when there is none or it is blank.
pub fn extract_title(content: &str) -> &str {
    content
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim_end_matches('\r').trim())
        .filter(|title| !title.is_empty())
        .unwrap_or(FALLBACK_TITLE)
}

/// Full rule document: frontmatter, blank line, original content verbatim.
pub fn convert(content: &str) -> String {
    format!(
        "---\ndescription: {}\n---\n\n{}",
        extract_title(content),
        content
    )
}
