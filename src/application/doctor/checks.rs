//! Per-unit checks

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ports::FileSystem;

use super::report::DoctorSink;

/// `See examples/foo.md` style cross references, resolved against the unit
static SEE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"See\s+([a-zA-Z_]+/[^\s\)]+)").expect("static pattern"));

/// `@unit-name` mentions. The second group captures a trailing character
/// that disqualifies the match (e-mail addresses, `@scope.pkg`).
static UNIT_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-zA-Z0-9])@([a-z][a-z0-9-]+)((?:\.[a-zA-Z0-9]|[a-zA-Z0-9@])?)").expect("static pattern")
});

static USER_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(/Users/|/home/|C:\\)").expect("static pattern"));

pub(super) fn check_unit<F: FileSystem + ?Sized>(
    fs: &F,
    name: &str,
    path: &Path,
    marker_file: &str,
    known_units: &BTreeSet<String>,
    sink: &mut impl DoctorSink,
) {
    let text = match fs.read_to_string(&path.join(marker_file)) {
        Ok(text) => text,
        Err(_) => {
            sink.add_error(name, format!("cannot read {marker_file}"));
            return;
        }
    };

    for caps in SEE_REFERENCE.captures_iter(&text) {
        let reference = &caps[1];
        if !fs.exists(&path.join(reference)) {
            sink.add_error(name, format!("broken link '{reference}'"));
        }
    }

    for caps in UNIT_MENTION.captures_iter(&text) {
        let mentioned = &caps[1];
        if !caps[2].is_empty() {
            continue;
        }
        if !known_units.contains(mentioned) {
            sink.add_warning(name, None, format!("unknown skill @{mentioned}"));
        }
    }

    for (idx, line) in text.lines().enumerate() {
        if USER_PATH.is_match(line) {
            sink.add_warning(name, Some(idx + 1), "hardcoded path detected");
        }
    }
}
