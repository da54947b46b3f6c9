//! Normalizer. Applies a [`SchemaPolicy`] to sidecar records.
//!
//! Passes run in a fixed order: rename → default-fill → allow-list. Each
//! pass is idempotent, so normalizing an already-normalized record reports
//! no changes.

use crate::policy::{SchemaPolicy, VAULT};
use crate::types::{ChangeSummary, DocumentReport, KeyRename, ObjectReport, Record};
use serde_json::Value;

/// Normalize one record against the vault policy, in place.
pub fn normalize(record: &mut Record) -> ChangeSummary {
    normalize_with(&VAULT, record)
}

/// Normalize one record against `policy`, in place.
pub fn normalize_with(policy: &SchemaPolicy, record: &mut Record) -> ChangeSummary {
    let renamed = rename_keys(policy, record);
    let added_defaults = fill_defaults(policy, record);
    let removed_keys = remove_disallowed(policy, record);
    ChangeSummary {
        renamed,
        added_defaults,
        removed_keys,
    }
}

/// Normalize a whole document against the vault policy.
///
/// See [`normalize_document_with`].
pub fn normalize_document(document: &mut Value) -> DocumentReport {
    normalize_document_with(&VAULT, document)
}

/// Normalize a document that is either a single object or an array of
/// objects.
///
/// Array elements that are not objects are left alone and get no report
/// entry. Any other document shape passes through with an empty report.
pub fn normalize_document_with(policy: &SchemaPolicy, document: &mut Value) -> DocumentReport {
    let objects = match document {
        Value::Object(record) => vec![ObjectReport {
            index: None,
            summary: normalize_with(policy, record),
        }],
        Value::Array(items) => items
            .iter_mut()
            .enumerate()
            .filter_map(|(i, item)| {
                item.as_object_mut().map(|record| ObjectReport {
                    index: Some(i),
                    summary: normalize_with(policy, record),
                })
            })
            .collect(),
        _ => Vec::new(),
    };
    DocumentReport { objects }
}

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

/// Move each deprecated key's value onto its canonical key, overwriting any
/// value already there.
fn rename_keys(policy: &SchemaPolicy, record: &mut Record) -> Vec<KeyRename> {
    let mut performed = Vec::new();
    for &(old, new) in policy.renames {
        // shift_remove keeps the relative order of the remaining keys
        if let Some(value) = record.shift_remove(old) {
            record.insert(new.to_string(), value);
            performed.push(KeyRename::new(old, new));
        }
    }
    performed
}

/// Insert each missing default key. Existing values are never touched.
fn fill_defaults(policy: &SchemaPolicy, record: &mut Record) -> Vec<String> {
    let mut added = Vec::new();
    for &(key, default) in policy.defaults {
        if !record.contains_key(key) {
            record.insert(key.to_string(), default.to_value());
            added.push(key.to_string());
        }
    }
    added
}

/// Drop every key outside the allowed set.
fn remove_disallowed(policy: &SchemaPolicy, record: &mut Record) -> Vec<String> {
    let removed: Vec<String> = record
        .keys()
        .filter(|k| !policy.allows(k))
        .cloned()
        .collect();
    if !removed.is_empty() {
        record.retain(|k, _| policy.allows(k));
    }
    removed
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
