//! Schema policy: the fixed rename table, default table and allowed-key set
//! that every vault sidecar is normalized against.
//!
//! The tables are process-wide constants. [`VAULT`] is the policy the
//! runners use; [`SchemaPolicy`] is public so tests and callers can build a
//! narrower one with their own static tables.

use phf::phf_set;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Deprecated key → canonical key. No key appears on both sides.
pub const RENAMES: &[(&str, &str)] = &[
    ("description", "overview"),
    ("total episodes", "totalNumberOfEpisodes"),
    ("ranking", "adminRating"),
];

/// Canonical keys every record must carry, with the value injected when absent.
pub const DEFAULTS: &[(&str, DefaultValue)] = &[
    ("title", DefaultValue::EmptyString),
    ("year", DefaultValue::Null),
    ("overview", DefaultValue::EmptyString),
    ("genres", DefaultValue::EmptyList),
    ("tags", DefaultValue::EmptyList),
    ("adminRating", DefaultValue::Null),
];

/// Recognized fields beyond the default table.
static EXTRA_FIELDS: phf::Set<&'static str> = phf_set! {
    // Core
    "kind",
    // Paths
    "posterPath",
    "videoFilePath",
    "sampleFilePath",
    // Tech/meta
    "quality",
    "runtimeSeconds",
    "audios",
    "subs",
    "videoCodec",
    // User
    "userRating",
    // Hierarchy/flags
    "isSeries",
    "dirPath",
    "isFranchise",
    "franchiseNumber",
    // Episode/season
    "seasonNumber",
    "episodeNumber",
    "episodeOverallNumber",
    "numberOfEpisodesObtained",
    "totalNumberOfEpisodes",
    "noSeasons",
};

/// The policy applied to every vault sidecar.
pub static VAULT: SchemaPolicy = SchemaPolicy {
    renames: RENAMES,
    defaults: DEFAULTS,
    extra_fields: &EXTRA_FIELDS,
};

// ---------------------------------------------------------------------------
// Policy types
// ---------------------------------------------------------------------------

/// Value injected for a missing default key.
///
/// Kept as a tag rather than a `serde_json::Value` so the table can be `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    EmptyString,
    Null,
    EmptyList,
}

impl DefaultValue {
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::EmptyString => Value::String(String::new()),
            DefaultValue::Null => Value::Null,
            DefaultValue::EmptyList => Value::Array(Vec::new()),
        }
    }
}

/// Rename table, default table and allowed-key set, bundled.
///
/// The allowed-key set is the union of the default-table keys and
/// `extra_fields`.
#[derive(Debug)]
pub struct SchemaPolicy {
    pub renames: &'static [(&'static str, &'static str)],
    pub defaults: &'static [(&'static str, DefaultValue)],
    pub extra_fields: &'static phf::Set<&'static str>,
}

impl SchemaPolicy {
    /// Whether `key` may remain on a normalized record.
    pub fn allows(&self, key: &str) -> bool {
        self.is_default_key(key) || self.extra_fields.contains(key)
    }

    pub fn is_default_key(&self, key: &str) -> bool {
        self.defaults.iter().any(|(k, _)| *k == key)
    }

    /// Every key a normalized record may contain: default keys first, then
    /// the extra fields.
    pub fn allowed_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.defaults
            .iter()
            .map(|(k, _)| *k)
            .chain(self.extra_fields.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_sources_and_targets_are_disjoint() {
        for (old, _) in RENAMES {
            assert!(
                RENAMES.iter().all(|(_, new)| new != old),
                "{old:?} is both a rename source and target"
            );
        }
    }

    #[test]
    fn rename_targets_are_allowed() {
        for (_, new) in RENAMES {
            assert!(VAULT.allows(new), "{new:?} would be stripped after renaming");
        }
    }

    #[test]
    fn rename_sources_are_not_allowed() {
        for (old, _) in RENAMES {
            assert!(!VAULT.allows(old));
        }
    }

    #[test]
    fn defaults_are_allowed() {
        for (key, _) in DEFAULTS {
            assert!(VAULT.allows(key));
        }
    }

    #[test]
    fn allowed_set_size() {
        // 6 default keys + 20 extra fields, no overlap
        assert_eq!(VAULT.allowed_keys().count(), 26);
        assert!(VAULT.allowed_keys().all(|k| VAULT.allows(k)));
    }

    #[test]
    fn default_values() {
        assert_eq!(DefaultValue::EmptyString.to_value(), Value::from(""));
        assert_eq!(DefaultValue::Null.to_value(), Value::Null);
        assert_eq!(DefaultValue::EmptyList.to_value(), serde_json::json!([]));
    }
}
