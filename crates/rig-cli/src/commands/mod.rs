//! Subcommand implementations.

mod check;
mod generate;

pub use check::execute as check_execute;
pub use generate::execute as generate_execute;

use std::env;

use path_clean::PathClean;
use rig_config::BuildRequest;
use tracing::debug;

use crate::cli::RequestArgs;
use crate::error::Result;
use crate::preset::Preset;

/// Build the request from preset values plus flag overrides; flags win.
pub(crate) fn resolve_request(args: &RequestArgs) -> Result<BuildRequest> {
    let cwd = env::current_dir()?;
    let root = match &args.root {
        Some(root) if root.is_absolute() => root.clean(),
        Some(root) => cwd.join(root).clean(),
        None => cwd,
    };
    debug!(
        root = %root.display(),
        preset = args.preset.as_deref().unwrap_or("default"),
        "resolving request"
    );

    let preset = Preset::load(args.config.as_deref(), &root, args.preset.as_deref())?;
    let mut request = preset.into_request(args.production, root);

    if let Some(entry) = &args.entry {
        request = request.with_entry(entry.clone());
    }
    if let Some(port) = args.port {
        request = request.with_dev_server_port(port);
    }
    if let Some(favicon) = &args.favicon {
        request = request.with_favicon(favicon.clone());
    }

    Ok(request)
}
