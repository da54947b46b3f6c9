//! Domain-specific assertion macros for vaultfix harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! schema invariant a normalized record broke.

use vaultfix_core::policy::VAULT;
use vaultfix_core::Record;

/// Assert that a record has `key` with the expected JSON value.
///
/// ```rust
/// assert_has_key!(record, "overview", "A show");
/// ```
#[macro_export]
macro_rules! assert_has_key {
    ($record:expr, $key:expr, $value:expr) => {{
        let record: &vaultfix_core::Record = &$record;
        let key: &str = $key;
        let expected = serde_json::json!($value);
        match record.get(key) {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "assert_has_key! failed:\n  record[{:?}]\n  expected: {}\n  actual:   {}",
                key, expected, actual
            ),
            None => panic!(
                "assert_has_key! failed: key {:?} not found.\n  Available keys: {:?}",
                key,
                record.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that a record does not contain `key`.
#[macro_export]
macro_rules! assert_lacks_key {
    ($record:expr, $key:expr) => {{
        let record: &vaultfix_core::Record = &$record;
        let key: &str = $key;
        if let Some(value) = record.get(key) {
            panic!("assert_lacks_key! failed: {:?} is still present with value {}", key, value);
        }
    }};
}

/// Assert the post-normalization schema invariant: every key is allowed and
/// every default key is present.
pub fn assert_schema_conforms(record: &Record) {
    let stray: Vec<&String> = record.keys().filter(|k| !VAULT.allows(k)).collect();
    assert!(stray.is_empty(), "normalized record has disallowed keys {stray:?}");

    let missing: Vec<&str> = VAULT
        .defaults
        .iter()
        .map(|(k, _)| *k)
        .filter(|k| !record.contains_key(*k))
        .collect();
    assert!(missing.is_empty(), "normalized record is missing default keys {missing:?}");
}
