//! Command-line interface definition.
//!
//! Defined with clap v4's derive macros. Both subcommands share the same
//! request-selection arguments, so `check` validates exactly what
//! `generate` would emit.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// rig - build-configuration generation for webpack-style bundlers
#[derive(Parser, Debug)]
#[command(
    name = "rig",
    version,
    about = "Generate bundler configuration from presets and environment flags",
    long_about = "rig turns a preset plus the RIG_* environment flags into a complete\n\
                  bundler configuration document. One parameterized generator replaces\n\
                  a family of hand-maintained per-target configuration files."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors and the document itself
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the configuration document and print it as JSON
    Generate(GenerateArgs),
    /// Validate a request and report the resolved stage without emitting
    /// a document
    Check(CheckArgs),
}

/// Request selection shared by the subcommands.
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Build a deployable production bundle
    ///
    /// Enables minimization, content-hashed output names and CSS
    /// extraction, and drops the dev-server section.
    #[arg(short, long)]
    pub production: bool,

    /// Project root directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Preset name from the preset file
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Preset file path (defaults to rig.toml under the project root)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the bundle entry specifier
    #[arg(long, value_name = "ENTRY")]
    pub entry: Option<String>,

    /// Override the dev-server port
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Override the favicon path
    #[arg(long, value_name = "PATH")]
    pub favicon: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Write the document to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub request: RequestArgs,
}
