//! Canonicalization of user-supplied keybind and macro names.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ _]+").expect("separator pattern"));
static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\-]").expect("invalid-char pattern"));

/// Normalizes a name into its canonical token form.
///
/// Runs of spaces and underscores become a single hyphen, everything that is
/// not an ASCII letter, digit or hyphen is dropped, and the result is
/// lowercased. Total and idempotent; may return an empty string.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let hyphenated = SEPARATOR_RUNS.replace_all(raw, "-");
    let cleaned = INVALID_CHARS.replace_all(&hyphenated, "");
    cleaned.to_lowercase()
}
