//! Dry-run change report: the human-readable text listing what
//! standardization would do to each file.

use crate::types::{DocumentReport, ObjectReport};
use std::path::Path;

/// Render the change report for one file.
///
/// Returns an empty string when nothing in the document changed. Otherwise
/// the text starts with a `Changes for:` header and ends with a blank line.
pub fn build_change_report(path: &Path, report: &DocumentReport) -> String {
    if !report.changed() {
        return String::new();
    }

    let mut lines = vec![format!("Changes for: {}", path.display())];
    for object in &report.objects {
        let prefix = prefix(object);
        let summary = &object.summary;

        for rename in &summary.renamed {
            lines.push(format!("{prefix} renamed: {rename}"));
        }
        if !summary.added_defaults.is_empty() {
            lines.push(format!(
                "{prefix} added defaults: {}",
                summary.added_defaults.join(", ")
            ));
        }
        if !summary.removed_keys.is_empty() {
            lines.push(format!(
                "{prefix} removed disallowed keys: {}",
                summary.removed_keys.join(", ")
            ));
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Join per-file reports into the text written to the report file.
pub fn join_reports(reports: &[String]) -> String {
    reports.join("\n")
}

fn prefix(object: &ObjectReport) -> String {
    match object.index {
        Some(i) => format!("  [obj {i}]"),
        None => "  [obj]".to_string(),
    }
}
