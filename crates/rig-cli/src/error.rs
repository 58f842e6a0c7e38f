//! CLI error types and their miette conversion.

use std::path::PathBuf;

use rig_config::ConfigError;
use thiserror::Error;

/// Convenience alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfacing at the CLI boundary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The underlying generator rejected the request or the environment.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An explicitly-passed preset file does not exist, or a preset was
    /// requested without a discoverable file.
    #[error("preset file not found: {}", .path.display())]
    PresetFileNotFound { path: PathBuf },

    /// The preset file exists but does not define the requested preset.
    #[error("preset `{name}` not found in {}", .path.display())]
    PresetNotFound {
        name: String,
        path: PathBuf,
        available: Vec<String>,
    },

    /// The preset file could not be parsed.
    #[error("invalid preset file {}: {source}", .path.display())]
    PresetFile {
        path: PathBuf,
        source: figment::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize the document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a CLI error into a miette report with an actionable hint.
pub fn into_report(error: CliError) -> miette::Report {
    let help = match &error {
        CliError::Config(ConfigError::InvalidConfiguration { field, .. }) => Some(format!(
            "adjust `{field}` in the preset file or the matching flag"
        )),
        CliError::PresetFileNotFound { .. } => {
            Some("pass --config or create rig.toml in the project root".to_string())
        }
        CliError::PresetNotFound { available, .. } if !available.is_empty() => {
            Some(format!("available presets: {}", available.join(", ")))
        }
        CliError::PresetNotFound { .. } => {
            Some("define the preset under a [preset.<name>] table".to_string())
        }
        _ => None,
    };

    match help {
        Some(help) => miette::miette!(help = help, "{error}"),
        None => miette::miette!("{error}"),
    }
}
