//! Standardize runner: walks a vault root and normalizes every JSON sidecar.
//!
//! Per-file failures (unreadable, unparsable, unwritable) are collected in
//! [`StandardizeOutcome::errors`] and never stop the walk. The only fatal
//! conditions are a missing or unreadable root and a dry-run report that
//! cannot be written.

use crate::normalizer::normalize_document_with;
use crate::policy::{SchemaPolicy, VAULT};
use crate::report::{build_change_report, join_reports};
use crate::types::{DocumentReport, FileError};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Errors that abort a standardize run.
#[derive(Debug, Error)]
pub enum StandardizeError {
    #[error("root does not exist: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("cannot read root {}: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write dry-run report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Knobs for a standardize run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardizeOptions {
    /// Folder scanned recursively for `*.json` files.
    pub root: PathBuf,
    /// Report intended changes instead of writing files.
    pub dry_run: bool,
    /// Keep the original text in `<file>.bak` before the first rewrite.
    pub backup: bool,
    /// Spaces per indentation level in rewritten files.
    pub indent: usize,
    /// Where the dry-run report is written.
    pub report_path: PathBuf,
}

/// A file whose document was (or in dry-run, would be) changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChanges {
    pub path: PathBuf,
    pub report: DocumentReport,
}

/// Totals and per-file details of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardizeOutcome {
    pub dry_run: bool,
    /// JSON files visited, including ones that failed to parse.
    pub scanned: usize,
    /// Objects normalized across all parsed files.
    pub objects: usize,
    /// Files rewritten on disk. Always 0 in dry-run.
    pub modified: usize,
    pub changed_files: Vec<FileChanges>,
    /// Set when a dry-run produced a non-empty report.
    pub report_written: Option<PathBuf>,
    pub errors: Vec<FileError>,
}

/// Run with the vault policy.
pub fn run(opts: &StandardizeOptions) -> Result<StandardizeOutcome, StandardizeError> {
    run_with(&VAULT, opts)
}

/// Walk `opts.root` and normalize every JSON file against `policy`.
pub fn run_with(
    policy: &SchemaPolicy,
    opts: &StandardizeOptions,
) -> Result<StandardizeOutcome, StandardizeError> {
    if !opts.root.exists() {
        return Err(StandardizeError::RootMissing(opts.root.clone()));
    }
    if opts.root.is_dir() {
        std::fs::read_dir(&opts.root).map_err(|source| StandardizeError::RootUnreadable {
            path: opts.root.clone(),
            source,
        })?;
    }

    let mut outcome = StandardizeOutcome {
        dry_run: opts.dry_run,
        ..Default::default()
    };
    let mut report_texts = Vec::new();

    let walker = WalkDir::new(&opts.root).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| opts.root.clone());
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk loop at root"));
                return Err(StandardizeError::RootUnreadable { path, source });
            }
            Err(e) => {
                warn!("Error walking directory: {}", e);
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| opts.root.clone());
                outcome.errors.push(FileError::new(path, format!("directory walk error ({e})")));
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_json(entry.path()) {
            continue;
        }

        outcome.scanned += 1;
        if let Some(text) = process_file(policy, opts, entry.path(), &mut outcome) {
            report_texts.push(text);
        }
    }

    if opts.dry_run && !report_texts.is_empty() {
        std::fs::write(&opts.report_path, join_reports(&report_texts)).map_err(|source| {
            StandardizeError::Report {
                path: opts.report_path.clone(),
                source,
            }
        })?;
        outcome.report_written = Some(opts.report_path.clone());
    }

    info!(
        "Standardize complete: {} scanned, {} objects, {} modified, {} with changes, {} errors",
        outcome.scanned,
        outcome.objects,
        outcome.modified,
        outcome.changed_files.len(),
        outcome.errors.len()
    );

    Ok(outcome)
}

/// Normalize one file. Returns its dry-run report text, if any.
fn process_file(
    policy: &SchemaPolicy,
    opts: &StandardizeOptions,
    path: &Path,
    outcome: &mut StandardizeOutcome,
) -> Option<String> {
    debug!("Processing file: {}", path.display());

    let (raw, mut document) = match read_document(path) {
        Ok(parsed) => parsed,
        Err(message) => {
            warn!("Skipping {}: {}", path.display(), message);
            outcome.errors.push(FileError::new(path, message));
            return None;
        }
    };

    let report = normalize_document_with(policy, &mut document);
    outcome.objects += report.object_count();
    if !report.changed() {
        return None;
    }

    let text = opts.dry_run.then(|| build_change_report(path, &report));
    outcome.changed_files.push(FileChanges {
        path: path.to_path_buf(),
        report,
    });
    if opts.dry_run {
        return text;
    }

    match write_document(path, &raw, &document, opts) {
        Ok(()) => outcome.modified += 1,
        Err(e) => {
            warn!("Failed to write {}: {}", path.display(), e);
            outcome
                .errors
                .push(FileError::new(path, format!("failed to write JSON ({e})")));
        }
    }
    None
}

fn read_document(path: &Path) -> Result<(String, Value), String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read/parse JSON ({e})"))?;
    let document =
        serde_json::from_str(&raw).map_err(|e| format!("failed to read/parse JSON ({e})"))?;
    Ok((raw, document))
}

fn write_document(
    path: &Path,
    raw: &str,
    document: &Value,
    opts: &StandardizeOptions,
) -> std::io::Result<()> {
    if opts.backup {
        let bak = backup_path(path);
        if !bak.exists() {
            std::fs::write(&bak, raw)?;
        }
    }
    std::fs::write(path, to_pretty_json(document, opts.indent)?)
}

/// Serialize `value` with `indent` spaces per level, non-ASCII kept as-is,
/// plus a trailing newline.
pub fn to_pretty_json(value: &Value, indent: usize) -> serde_json::Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// `show.json` → `show.json.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
