//! Title maps: overall episode number → episode title, read from a local
//! JSON object such as `{"296": "Mission: Protect the Waterfall!"}`.

use crate::RenameError;
use std::collections::BTreeMap;
use std::path::Path;

/// Overall episode number → raw (unsanitized) title.
pub type TitleMap = BTreeMap<u32, String>;

/// Read a title map from `path`.
pub fn load_titles(path: &Path) -> Result<TitleMap, RenameError> {
    let raw = std::fs::read_to_string(path).map_err(|source| RenameError::TitleMapRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_titles(&raw).map_err(|e| RenameError::TitleMapInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parse a title map. Keys must be non-negative integers, values strings.
pub fn parse_titles(raw: &str) -> serde_json::Result<TitleMap> {
    serde_json::from_str(raw)
}
