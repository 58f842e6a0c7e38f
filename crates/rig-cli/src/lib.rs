//! rig CLI - deterministic bundler-configuration generation.
//!
//! This crate wraps `rig-config` in a command-line interface: request
//! values come from a preset file and flag overrides, the environment
//! snapshot is captured once at startup, and the generated document is
//! emitted as JSON on stdout.
//!
//! # Modules
//!
//! - [`cli`] - clap argument definitions
//! - `commands` - subcommand implementations
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - structured logging setup
//! - [`preset`] - preset-file loading
//! - [`ui`] - status messages for the terminal

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod preset;
pub mod ui;

pub use error::{CliError, Result};
