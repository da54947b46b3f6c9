//! Core types for vaultfix-core.
//!
//! This module defines the data shared by the normalizer, the report builder
//! and the runners: the [`Record`] alias, the per-object [`ChangeSummary`],
//! the per-document [`DocumentReport`] and the per-file [`FileError`].

use std::path::PathBuf;

/// One media item's metadata: a JSON object with insertion-ordered keys.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// A key rename that was actually performed on a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRename {
    pub from: String,
    pub to: String,
}

impl KeyRename {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl std::fmt::Display for KeyRename {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// What [`normalize`](crate::normalize) did to a single record.
///
/// The old key of a rename is not repeated in `removed_keys`; the rename
/// entry already records that it went away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    /// Renames performed, in rename-table order.
    pub renamed: Vec<KeyRename>,
    /// Default keys injected because they were absent, in default-table order.
    pub added_defaults: Vec<String>,
    /// Keys deleted because they are outside the allowed set, in record order.
    pub removed_keys: Vec<String>,
}

impl ChangeSummary {
    /// `true` iff any of the three passes touched the record.
    pub fn changed(&self) -> bool {
        !self.renamed.is_empty() || !self.added_defaults.is_empty() || !self.removed_keys.is_empty()
    }
}

/// Change summary for one object inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectReport {
    /// Position in the top-level array; `None` when the document is a single object.
    pub index: Option<usize>,
    pub summary: ChangeSummary,
}

/// Result of normalizing a whole document.
///
/// Holds one entry per object that was processed. Non-object documents and
/// non-object array elements contribute no entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentReport {
    pub objects: Vec<ObjectReport>,
}

impl DocumentReport {
    /// Number of objects the normalizer visited.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// `true` iff any visited object changed.
    pub fn changed(&self) -> bool {
        self.objects.iter().any(|o| o.summary.changed())
    }
}

/// A failure confined to a single file. Recorded, never propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

impl FileError {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}
