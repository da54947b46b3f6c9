//! Static sidecar corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of JSON documents as they are
//! found in real vaults: legacy keys, stray scraper fields, lists of seasons.

/// Single-object sidecars that use deprecated keys.
pub const CORPUS_LEGACY: &[&str] = &[
    r#"{"description": "A show", "total episodes": 12, "bogusKey": 1}"#,
    r#"{"title": "Naruto", "ranking": 8.1, "year": 2002, "description": "Ninja."}"#,
    r#"{"title": "Bleach", "overview": "old", "description": "new", "genres": ["action"]}"#,
    r#"{"ranking": null, "adminRating": 3}"#,
];

/// Sidecars carrying keys outside the allowed set.
pub const CORPUS_STRAY_KEYS: &[&str] = &[
    r#"{"title": "Frieren", "imdbId": "tt22248376", "scrapedAt": "2024-01-15", "isSeries": true}"#,
    r#"{"kind": "episode", "seasonNumber": 1, "episodeNumber": 3, "thumb": "x.jpg", "runtime": 1440}"#,
    r#"{"posterPath": "poster.jpg", "audios": [{"lang": "jpn"}], "subs": ["eng"], "Title": "case matters"}"#,
];

/// Sidecars that are already normalized.
pub const CORPUS_CLEAN: &[&str] = &[
    r#"{"title": "", "year": null, "overview": "", "genres": [], "tags": [], "adminRating": null}"#,
    r#"{"title": "Mushishi", "year": 2005, "overview": "Ginko wanders.", "genres": ["mystery"], "tags": ["calm"], "adminRating": 9, "userRating": 10, "noSeasons": 2}"#,
];

/// Array documents, including non-object elements.
pub const CORPUS_LISTS: &[&str] = &[
    r#"[{"description": "one"}, {"title": "two", "junk": true}]"#,
    r#"[{"seasonNumber": 1}, 42, "text", null, {"ranking": 5}]"#,
    r#"[]"#,
];

/// Documents that are neither an object nor a list of objects.
pub const CORPUS_SCALARS: &[&str] = &[r#"42"#, r#""just a string""#, r#"null"#, r#"true"#, r#"[1, 2, 3]"#];

/// Text that is not JSON at all.
pub const CORPUS_MALFORMED: &[&str] = &[
    r#"{"title": "unterminated"#,
    r#"{title: "unquoted key"}"#,
    "",
    "// comment\n{}",
];

/// Parse a corpus line. Panics on malformed input; fixtures must be valid.
pub fn parse(doc: &str) -> serde_json::Value {
    serde_json::from_str(doc).unwrap_or_else(|e| panic!("fixture is not JSON ({e}): {doc}"))
}
