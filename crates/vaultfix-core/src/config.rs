//! Configuration types for vaultfix.
//!
//! [`Config::load`] reads `~/.config/vaultfix/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit file instead. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use crate::standardize::StandardizeOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[standardize]
root        = "Content"
indent      = 2
backup      = false
report_path = "dry_run_report.txt"

[rename]
extensions = ["mp4", "mkv"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/vaultfix/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub standardize: StandardizeConfig,
    #[serde(default)]
    pub rename: RenameConfig,
}

/// `[standardize]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardizeConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default)]
    pub backup: bool,
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
}

fn default_root() -> PathBuf { PathBuf::from("Content") }
fn default_indent() -> usize { 2 }
fn default_report_path() -> PathBuf { PathBuf::from("dry_run_report.txt") }

impl Default for StandardizeConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            indent: default_indent(),
            backup: false,
            report_path: default_report_path(),
        }
    }
}

impl StandardizeConfig {
    /// Runner options seeded from this section. Dry-run is never a config
    /// value; it must be asked for on each invocation.
    pub fn options(&self) -> StandardizeOptions {
        StandardizeOptions {
            root: self.root.clone(),
            dry_run: false,
            backup: self.backup,
            indent: self.indent,
            report_path: self.report_path.clone(),
        }
    }
}

/// `[rename]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RenameConfig {
    /// Video file extensions considered by the episode renamer, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> { vec!["mp4".to_string(), "mkv".to_string()] }

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/vaultfix/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit config file, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::layered(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("vaultfix")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
