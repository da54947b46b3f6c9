//! vaultfix-episodes — canonical episode file naming.
//!
//! Renaming is split into two steps so the CLI can show a plan before
//! touching the disk:
//!
//! ```text
//! plan(dirs, scheme, extensions) ──► RenamePlan ──► apply(plan)
//! ```
//!
//! [`plan`] only reads directory listings. [`apply`] performs the renames and
//! collects per-file failures instead of stopping.

pub mod plan;
pub mod sanitize;
pub mod scheme;
pub mod titles;

pub use plan::{apply, plan, ApplyOutcome, PlannedRename, RenamePlan, Skipped};
pub use sanitize::sanitize_title;
pub use scheme::RenameScheme;
pub use titles::{load_titles, TitleMap};

/// Errors that abort planning before any file is considered.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read title map {}: {source}", .path.display())]
    TitleMapRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid title map {}: {reason}", .path.display())]
    TitleMapInvalid {
        path: std::path::PathBuf,
        reason: String,
    },
}
