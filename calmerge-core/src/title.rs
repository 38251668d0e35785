//! Title normalization used to build dedup keys.

use std::sync::LazyLock;

use regex::Regex;

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("Invalid parenthesis regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Normalize an event title for duplicate detection.
///
/// Drops every `( ... )` span (up to the first closing paren, so nested
/// groups are only partially removed), collapses whitespace runs, trims and
/// lowercases. `"Networks (Group B)"` and `"NETWORKS"` both become
/// `"networks"`.
pub fn normalize_title(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }

    let without_groups = PARENTHESIZED.replace_all(title, "");
    let collapsed = WHITESPACE.replace_all(&without_groups, " ");
    collapsed.trim().to_lowercase()
}
