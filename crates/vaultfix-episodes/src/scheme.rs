//! Rename schemes: how a single episode filename maps to its canonical name.

use crate::sanitize::sanitize_title;
use crate::titles::TitleMap;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// `Show S01E03 The Title.mkv` → captures `The Title.mkv`.
static EPISODE_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"E\d{2} (.*)").expect("Invalid episode code regex"));

/// `Show Episode 12 [1080p].mp4` → captures `12`.
static EPISODE_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Episode (\d+)").expect("Invalid episode word regex"));

/// Leading overall number: `296.mp4`, `321 - something.mkv`.
static LEADING_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,3})\b").expect("Invalid leading number regex"));

/// How filenames are turned into canonical episode names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameScheme {
    /// `…E07 Title.ext` → `<n>_Title.ext`, numbering upward from `start`.
    /// A file that does not match aborts the whole plan.
    Sequential { start: u32 },
    /// `…Episode 12….ext` → `12.ext`. Non-matching files are skipped.
    Numbered,
    /// `296….ext` → `296_<sanitized title>.ext`, titles taken from the map.
    TitleMap(TitleMap),
}

/// Outcome of running a scheme over one filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Decision {
    Rename(String),
    Skip(String),
    Abort(String),
}

/// Per-plan mutable state. Sequential numbering spans every directory of a plan.
/// `next` is `None` once the counter has run past `u32::MAX`.
#[derive(Debug)]
pub(crate) struct SchemeState {
    next: Option<u32>,
}

impl RenameScheme {
    pub(crate) fn start(&self) -> SchemeState {
        let next = match self {
            RenameScheme::Sequential { start } => *start,
            _ => 0,
        };
        SchemeState { next: Some(next) }
    }

    pub(crate) fn decide(&self, file_name: &str, state: &mut SchemeState) -> Decision {
        match self {
            RenameScheme::Sequential { .. } => match EPISODE_CODE_PATTERN.captures(file_name) {
                Some(caps) => {
                    let Some(n) = state.next else {
                        return Decision::Abort("episode number overflow".to_string());
                    };
                    state.next = n.checked_add(1);
                    Decision::Rename(format!("{n}_{}", &caps[1]))
                }
                None => Decision::Abort("pattern not found".to_string()),
            },
            RenameScheme::Numbered => {
                let Some(caps) = EPISODE_WORD_PATTERN.captures(file_name) else {
                    return Decision::Skip("pattern not found".to_string());
                };
                let Ok(number) = caps[1].parse::<u64>() else {
                    return Decision::Skip(format!("episode number {} out of range", &caps[1]));
                };
                Decision::Rename(format!("{number}{}", dotted_extension(file_name)))
            }
            RenameScheme::TitleMap(titles) => {
                let Some(overall) = leading_episode_number(file_name) else {
                    return Decision::Skip("no leading episode number".to_string());
                };
                let Some(title) = titles.get(&overall) else {
                    return Decision::Skip(format!("no title for episode {overall}"));
                };
                if already_titled(file_name, overall) {
                    return Decision::Skip("already renamed".to_string());
                }
                Decision::Rename(format!(
                    "{overall}_{}{}",
                    sanitize_title(title),
                    dotted_extension(file_name)
                ))
            }
        }
    }
}

/// Overall episode number at the start of a filename, if any.
pub fn leading_episode_number(file_name: &str) -> Option<u32> {
    LEADING_NUMBER_PATTERN
        .captures(file_name)
        .and_then(|caps| caps[1].parse().ok())
}

/// Stem already looks like `<overall>_…` (whitespace allowed before `_`).
fn already_titled(file_name: &str, overall: u32) -> bool {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    stem.strip_prefix(overall.to_string().as_str())
        .is_some_and(|rest| rest.trim_start().starts_with('_'))
}

/// `.mkv` for `a.mkv`, empty when there is no extension.
fn dotted_extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}
