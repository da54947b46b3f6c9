//! Console text for the two commands.
//!
//! Rendering is kept separate from I/O so harnesses can snapshot it.

use std::fmt::Write;
use vaultfix_core::standardize::StandardizeOutcome;
use vaultfix_episodes::{ApplyOutcome, RenamePlan};

/// Closing text of a standardize run: dry-run note, totals, errors.
pub fn standardize_summary(outcome: &StandardizeOutcome) -> String {
    let mut s = String::new();

    if outcome.dry_run {
        match &outcome.report_written {
            Some(path) => {
                let _ = writeln!(s, "[i] Dry-run complete. Report saved to: {}", path.display());
            }
            None => s.push_str("[i] Dry-run complete. No changes needed.\n"),
        }
    }

    s.push_str("--- Summary ---\n");
    let _ = writeln!(s, "JSON files scanned: {}", outcome.scanned);
    let _ = writeln!(s, "Objects processed:  {}", outcome.objects);
    if outcome.dry_run {
        let _ = writeln!(s, "Files with changes: {}", outcome.changed_files.len());
    } else {
        let _ = writeln!(s, "Files modified:     {}", outcome.modified);
    }

    if !outcome.errors.is_empty() {
        s.push_str("\nErrors:\n");
        for e in &outcome.errors {
            let _ = writeln!(s, "  - {e}");
        }
    }
    s
}

/// The planned renames, or why nothing will happen.
pub fn rename_plan(plan: &RenamePlan, apply: bool) -> String {
    let mut s = String::new();

    for skipped in &plan.skipped {
        let _ = writeln!(s, "Skipped: {} ({})", file_label(&skipped.path), skipped.reason);
    }
    if let Some(aborted) = &plan.aborted {
        let _ = writeln!(
            s,
            "Skipped: {} ({}). Aborted, no files will be renamed.",
            file_label(&aborted.path),
            aborted.reason
        );
        return s;
    }
    if plan.renames.is_empty() {
        s.push_str("No files to rename.\n");
        return s;
    }

    s.push_str("\nPlanned changes:\n");
    for rename in &plan.renames {
        let _ = writeln!(s, "  {}  ->  {}", file_label(&rename.from), file_label(&rename.to));
    }
    if !apply {
        s.push_str("\nDry-run only. Re-run with --apply to perform the renames.\n");
    }
    s
}

/// Totals after applying a plan of `planned` renames.
pub fn rename_outcome(outcome: &ApplyOutcome, planned: usize) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "\nRenamed {} / {} files", outcome.renamed, planned);
    if !outcome.errors.is_empty() {
        s.push_str("\nErrors:\n");
        for e in &outcome.errors {
            let _ = writeln!(s, "  - {e}");
        }
    }
    s
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
