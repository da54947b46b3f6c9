//! vaultfix — batch tools for a local media vault.
//!
//! Two independent tools share this binary:
//!
//! - `standardize` normalizes JSON metadata sidecars (see [`vaultfix_core`]).
//! - `rename` gives episode files canonical names (see [`vaultfix_episodes`]).
//!
//! This crate only holds the command-line surface: argument parsing in
//! [`cli`] and the console text in [`render`]. Integration tests import both
//! directly.

pub mod cli;
pub mod render;

pub use cli::{Cli, Command};
