//! Generate command implementation.
//!
//! Captures the environment snapshot once, resolves the request and prints
//! the generated document as pretty JSON on stdout (or writes it to a
//! file with `--out`).

use std::fs;

use rig_config::{generate, EnvOverrides};

use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::ui;

pub fn execute(args: GenerateArgs) -> Result<()> {
    let env = EnvOverrides::capture()?;
    let request = super::resolve_request(&args.request)?;

    let configuration = generate(&request, &env)?;
    let document = serde_json::to_string_pretty(&configuration)?;

    match args.out {
        Some(path) => {
            fs::write(&path, format!("{document}\n"))?;
            ui::success(&format!("wrote {}", path.display()));
        }
        None => println!("{document}"),
    }
    Ok(())
}
