//! Command-line surface: clap definitions and dispatch.
//!
//! Flags override the values from the config file; anything not given on the
//! command line falls back to [`Config`].

use crate::render;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use vaultfix_core::config::Config;
use vaultfix_core::standardize::{self, StandardizeOptions};
use vaultfix_episodes::{load_titles, RenameScheme};

#[derive(Debug, Parser)]
#[command(name = "vaultfix", about = "Media vault sidecar and episode tools")]
pub struct Cli {
    /// Verbose logging, appended to vaultfix-debug.log in the temp dir.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Read configuration from this file instead of ~/.config/vaultfix/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize every JSON sidecar under a root folder.
    Standardize(StandardizeArgs),
    /// Rename episode files to their canonical names.
    Rename(RenameArgs),
}

#[derive(Debug, Args)]
pub struct StandardizeArgs {
    /// Root folder to scan [config default: ./Content]
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Write intended changes to the report file instead of modifying files.
    #[arg(long)]
    pub dry_run: bool,

    /// Write a .bak before modifying each file.
    #[arg(long)]
    pub backup: bool,

    /// Indentation for saved JSON [config default: 2]
    #[arg(long)]
    pub indent: Option<usize>,

    /// Dry-run report destination [config default: dry_run_report.txt]
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

impl StandardizeArgs {
    /// Layer these flags over the config-file values.
    pub fn options(&self, config: &Config) -> StandardizeOptions {
        let mut opts = config.standardize.options();
        if let Some(root) = &self.root {
            opts.root = root.clone();
        }
        if let Some(indent) = self.indent {
            opts.indent = indent;
        }
        if let Some(report) = &self.report {
            opts.report_path = report.clone();
        }
        opts.dry_run = self.dry_run;
        opts.backup |= self.backup;
        opts
    }
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Folder holding the episode files; repeat for several [default: .]
    #[arg(long = "dir", value_name = "DIR", global = true)]
    pub dirs: Vec<PathBuf>,

    /// Video extension to consider; repeat for several [config default: mp4, mkv]
    #[arg(long = "ext", value_name = "EXT", global = true)]
    pub extensions: Vec<String>,

    /// Perform the renames (omit for a dry run).
    #[arg(long, global = true)]
    pub apply: bool,

    #[command(subcommand)]
    pub scheme: SchemeArg,
}

#[derive(Debug, Subcommand)]
pub enum SchemeArg {
    /// `…E07 Title.ext` → `<n>_Title.ext`, counting up from --start.
    Sequential {
        /// Overall number of the first episode.
        #[arg(long)]
        start: u32,
    },
    /// `…Episode 12….ext` → `12.ext`.
    Numbered,
    /// `296….ext` → `296_<title>.ext`, titles from a JSON map file.
    Titles {
        /// JSON object of overall episode number → title.
        #[arg(long, value_name = "FILE")]
        map: PathBuf,
    },
}

impl RenameArgs {
    pub fn dirs(&self) -> Vec<PathBuf> {
        if self.dirs.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.dirs.clone()
        }
    }

    pub fn extensions(&self, config: &Config) -> Vec<String> {
        if self.extensions.is_empty() {
            config.rename.extensions.clone()
        } else {
            self.extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect()
        }
    }

    pub fn scheme(&self) -> anyhow::Result<RenameScheme> {
        Ok(match &self.scheme {
            SchemeArg::Sequential { start } => RenameScheme::Sequential { start: *start },
            SchemeArg::Numbered => RenameScheme::Numbered,
            SchemeArg::Titles { map } => RenameScheme::TitleMap(load_titles(map)?),
        })
    }
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("failed to load config {}", path.display())),
            None => Config::load(),
        }
    }
}

/// Execute a parsed command, writing console output to `out`.
pub fn run(command: &Command, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Standardize(args) => {
            let opts = args.options(config);
            let outcome = standardize::run(&opts)?;
            write!(out, "{}", render::standardize_summary(&outcome))?;
        }
        Command::Rename(args) => {
            let scheme = args.scheme()?;
            let plan = vaultfix_episodes::plan(&args.dirs(), &scheme, &args.extensions(config))?;
            write!(out, "{}", render::rename_plan(&plan, args.apply))?;
            if args.apply && !plan.is_aborted() && !plan.renames.is_empty() {
                let outcome = vaultfix_episodes::apply(&plan);
                write!(out, "{}", render::rename_outcome(&outcome, plan.renames.len()))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn standardize_flags_override_config() {
        let cli = Cli::parse_from([
            "vaultfix", "standardize", "--root", "Vault", "--dry-run", "--indent", "4",
        ]);
        let Command::Standardize(args) = &cli.command else {
            panic!("expected standardize");
        };
        let opts = args.options(&Config::defaults());
        assert_eq!(opts.root, PathBuf::from("Vault"));
        assert!(opts.dry_run);
        assert!(!opts.backup);
        assert_eq!(opts.indent, 4);
        assert_eq!(opts.report_path, PathBuf::from("dry_run_report.txt"));
    }

    #[test]
    fn rename_defaults_to_current_dir_and_config_extensions() {
        let cli = Cli::parse_from(["vaultfix", "rename", "numbered"]);
        let Command::Rename(args) = &cli.command else {
            panic!("expected rename");
        };
        assert_eq!(args.dirs(), [PathBuf::from(".")]);
        assert_eq!(args.extensions(&Config::defaults()), ["mp4", "mkv"]);
        assert!(!args.apply);
    }

    #[test]
    fn rename_flags_after_scheme() {
        let cli = Cli::parse_from([
            "vaultfix", "rename", "sequential", "--start", "296", "--dir", "S14", "--dir", "S15",
            "--ext", ".avi", "--apply",
        ]);
        let Command::Rename(args) = &cli.command else {
            panic!("expected rename");
        };
        assert_eq!(args.dirs(), [PathBuf::from("S14"), PathBuf::from("S15")]);
        assert_eq!(args.extensions(&Config::defaults()), ["avi"]);
        assert!(args.apply);
        assert_eq!(args.scheme().unwrap(), RenameScheme::Sequential { start: 296 });
    }
}
