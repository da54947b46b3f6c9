//! Filename sanitization for episode titles.

use regex::Regex;
use std::sync::LazyLock;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 _\-()\[\]&!.',]").expect("static regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Make an episode title safe to embed in a filename.
///
/// `:` becomes ` -`, `/` becomes `-`, anything outside letters, digits and
/// `_-()[]&!.',` plus space is dropped, and whitespace runs collapse to one
/// space.
pub fn sanitize_title(title: &str) -> String {
    let title = title.replace(':', " -").replace('/', "-");
    let title = UNSAFE_CHARS.replace_all(&title, "");
    WHITESPACE_RUN.replace_all(&title, " ").trim().to_string()
}
