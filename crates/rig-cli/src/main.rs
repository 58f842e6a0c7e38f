//! rig CLI - deterministic bundler-configuration generation.
//!
//! Entry point: parses arguments, initializes logging and dispatches to the
//! subcommand implementations.

use clap::Parser;
use miette::Result;
use rig_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics with actionable hints.
    result.map_err(error::into_report)
}
