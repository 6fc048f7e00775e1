//! Common utilities shared across report generators.

use camino::Utf8Path;

/// Show a metadata path relative to the checked root when it lies below it.
pub fn display_path<'a>(root: &Utf8Path, path: &'a Utf8Path) -> &'a Utf8Path {
    path.strip_prefix(root).unwrap_or(path)
}

/// One-word status of a check.
pub const fn format_status(passed: bool) -> &'static str {
    if passed { "passed" } else { "failed" }
}
