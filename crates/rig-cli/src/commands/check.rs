//! Check command implementation.
//!
//! Validates the request exactly as `generate` would, then reports the
//! resolved stage so developers can see what the RIG_* flags did before
//! starting a build.

use rig_config::{validate, EnvOverrides, StageFlags};

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::ui;

pub fn execute(args: CheckArgs) -> Result<()> {
    let env = EnvOverrides::capture()?;
    let request = super::resolve_request(&args.request)?;

    validate(&request)?;

    let stage = StageFlags::resolve(request.production, &env);
    ui::info(&format!(
        "stage `{}`: production={} dev_server={} local_backend={} local_socket={} local_checkout={}",
        stage.api_stage,
        stage.effective_production,
        stage.use_dev_server,
        stage.local_backend,
        stage.local_socket,
        stage.local_checkout,
    ));
    if stage.test_prod_build {
        ui::warning("RIG_TEST_PROD_BUILD is set: production output behind the dev server");
    }
    ui::success("configuration is valid");
    Ok(())
}
