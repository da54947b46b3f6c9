//! Rename planning and application.

use crate::scheme::{Decision, RenameScheme};
use crate::RenameError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use vaultfix_core::FileError;

/// One file rename, source and target in the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// A file (or directory argument) left alone, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything [`plan`] decided, without having touched the disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    /// Video files examined across all directories.
    pub considered: usize,
    pub renames: Vec<PlannedRename>,
    pub skipped: Vec<Skipped>,
    /// Set when a sequential plan hit a non-matching file. An aborted plan
    /// is never applied.
    pub aborted: Option<Skipped>,
}

impl RenamePlan {
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }
}

/// Result of [`apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub renamed: usize,
    pub errors: Vec<FileError>,
}

/// Work out the renames for every video file in `dirs`.
///
/// Files are taken from each directory (non-recursively) in sorted filename
/// order, keeping only those whose extension is in `extensions` (compared
/// case-insensitively). Arguments that are not directories are skipped.
pub fn plan(
    dirs: &[PathBuf],
    scheme: &RenameScheme,
    extensions: &[String],
) -> Result<RenamePlan, RenameError> {
    let mut plan = RenamePlan::default();
    let mut state = scheme.start();

    for dir in dirs {
        if !dir.is_dir() {
            debug!("Skip (not a folder): {}", dir.display());
            plan.skipped.push(Skipped {
                path: dir.clone(),
                reason: "not a folder".to_string(),
            });
            continue;
        }

        for path in video_files(dir, extensions)? {
            plan.considered += 1;
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                plan.skipped.push(Skipped {
                    path: path.clone(),
                    reason: "filename is not valid UTF-8".to_string(),
                });
                continue;
            };

            match scheme.decide(file_name, &mut state) {
                Decision::Rename(new_name) if new_name == file_name => {
                    plan.skipped.push(Skipped {
                        path: path.clone(),
                        reason: "already named".to_string(),
                    });
                }
                Decision::Rename(new_name) => {
                    debug!("{} -> {}", file_name, new_name);
                    let to = path.with_file_name(new_name);
                    plan.renames.push(PlannedRename { from: path, to });
                }
                Decision::Skip(reason) => plan.skipped.push(Skipped { path, reason }),
                Decision::Abort(reason) => {
                    warn!("Aborting plan at {}: {}", path.display(), reason);
                    plan.aborted = Some(Skipped { path, reason });
                    return Ok(plan);
                }
            }
        }
    }

    info!(
        "Planned {} renames over {} files ({} skipped)",
        plan.renames.len(),
        plan.considered,
        plan.skipped.len()
    );
    Ok(plan)
}

/// Perform the renames of a plan.
///
/// A target that already exists, or a failing rename, is recorded and the
/// remaining renames still run. An aborted plan applies nothing.
pub fn apply(plan: &RenamePlan) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();
    if let Some(aborted) = &plan.aborted {
        warn!("Refusing to apply aborted plan ({})", aborted.path.display());
        return outcome;
    }

    for rename in &plan.renames {
        if rename.to.exists() {
            outcome.errors.push(FileError::new(
                &rename.from,
                format!("target already exists: {}", rename.to.display()),
            ));
            continue;
        }
        match std::fs::rename(&rename.from, &rename.to) {
            Ok(()) => outcome.renamed += 1,
            Err(e) => {
                warn!("Failed to rename {}: {}", rename.from.display(), e);
                outcome
                    .errors
                    .push(FileError::new(&rename.from, format!("failed to rename ({e})")));
            }
        }
    }

    info!("Renamed {} / {} files", outcome.renamed, plan.renames.len());
    outcome
}

fn video_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, RenameError> {
    let read_dir_err = |source: std::io::Error| RenameError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}
