//! vaultfix-core — schema normalization for media vault metadata sidecars.
//!
//! This crate owns the fixed [`policy`] (rename table, default table, allowed
//! keys), the [`normalizer`] that applies it to JSON records, the dry-run
//! [`report`] text, and the [`standardize`] runner that walks a vault and
//! rewrites sidecar files in place.
//!
//! # Pipeline
//!
//! ```text
//! walk root ──► parse ──► normalize_document ──► write (+ .bak)
//!                               │
//!                               └──► dry-run report
//! ```
//!
//! Everything is synchronous and single-threaded; one document at a time.

pub mod config;
pub mod normalizer;
pub mod policy;
pub mod report;
pub mod standardize;
pub mod types;

pub use normalizer::{normalize, normalize_document};
pub use policy::SchemaPolicy;
pub use types::{ChangeSummary, DocumentReport, FileError, KeyRename, ObjectReport, Record};
