//! Test builders — ergonomic constructors for records and on-disk vaults.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on I/O failure rather than returning `Result`.

use serde_json::Value;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use vaultfix_core::standardize::StandardizeOptions;
use vaultfix_core::Record;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new()
///     .field("description", "A show")
///     .field("bogusKey", 1)
///     .build();
/// ```
#[derive(Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.record.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

/// Unwrap a JSON object fixture into a [`Record`].
pub fn record_from(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object fixture, got {other}"),
    }
}

// ---------------------------------------------------------------------------
// TempVault
// ---------------------------------------------------------------------------

/// A temporary vault directory with sidecar files written into it.
///
/// The report file lives beside the vault root, not inside it, so it never
/// shows up in a scan.
pub struct TempVault {
    dir: tempfile::TempDir,
}

impl TempVault {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir(dir.path().join("Content")).expect("create vault root");
        Self { dir }
    }

    /// The folder passed as `--root`.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("Content")
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.path().join("dry_run_report.txt")
    }

    /// Write `contents` at `rel` under the root, creating parent folders.
    pub fn file(self, rel: &str, contents: &str) -> Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, contents).expect("write fixture file");
        self
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        read(&self.path(rel))
    }

    pub fn read_json(&self, rel: &str) -> Value {
        serde_json::from_str(&self.read(rel)).expect("file should hold valid JSON")
    }

    /// Options for a real (non-dry) run with 2-space indent and no backups.
    pub fn options(&self) -> StandardizeOptions {
        StandardizeOptions {
            root: self.root(),
            dry_run: false,
            backup: false,
            indent: 2,
            report_path: self.report_path(),
        }
    }
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

// ---------------------------------------------------------------------------
// Episode folders
// ---------------------------------------------------------------------------

/// Create a temp folder holding empty files with the given names.
pub fn episode_dir(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for name in names {
        std::fs::write(dir.path().join(name), b"").expect("write episode file");
    }
    dir
}

/// Sorted file names currently in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// Command lines
// ---------------------------------------------------------------------------

/// `vaultfix <flags...> <paths...>` as an argv for `Cli::parse_from`.
pub fn args(flags: &[&str], paths: &[&Path]) -> Vec<OsString> {
    std::iter::once(OsString::from("vaultfix"))
        .chain(flags.iter().map(|f| OsString::from(*f)))
        .chain(paths.iter().map(|p| p.as_os_str().to_owned()))
        .collect()
}
