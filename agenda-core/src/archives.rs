//! Companion archive discovery.
//!
//! The primary document links past years out to companion files, one list
//! item each, e.g. `* [2017](archives/2017.md)`. Those files use the same
//! year/month/event layout and are parsed ahead of the primary document.

use std::sync::OnceLock;

use regex::Regex;

/// A list item whose whole content is a link into `archives/*.md`.
fn archive_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^\s*\*\s*\[[^\]]*\]\((archives/[^)]*\.md)\)\s*$")
            .expect("Invalid archive line regex")
    })
}

/// Paths of every referenced archive document, relative to the primary
/// document's directory, in document order.
pub fn find_archives(document: &str) -> Vec<String> {
    archive_line_re()
        .captures_iter(document)
        .map(|caps| caps[1].to_string())
        .collect()
}
