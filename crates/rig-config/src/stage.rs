//! Stage-flag resolution.
//!
//! Turns the requested production flag plus the captured environment
//! snapshot into the named, typed flags the rest of the generator consumes.
//! Resolution order matters: the force flag widens production first, and
//! every local-* flag is derived from the widened value.

use serde::Serialize;
use tracing::debug;

use crate::env::{flag_set, EnvOverrides};

/// API stage used when the selector is absent or pinned to `local`.
pub const DEFAULT_API_STAGE: &str = "dev";

/// Selector value that redirects API calls to a locally-served backend.
pub const LOCAL_API_STAGE: &str = "local";

/// The resolved build stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageFlags {
    /// Requested production flag widened by the force-production-test
    /// override.
    pub effective_production: bool,
    /// Deployment tier whose API endpoints the bundle targets.
    pub api_stage: String,
    /// Route API calls to a locally-running backend.
    pub local_backend: bool,
    /// Route socket connections to a locally-running server.
    pub local_socket: bool,
    /// Point the checkout flow at a local service.
    pub local_checkout: bool,
    /// A production bundle is being inspected under the dev server.
    pub test_prod_build: bool,
    /// Whether the document carries a dev-server section and stable
    /// output names.
    pub use_dev_server: bool,
}

impl StageFlags {
    /// Resolve the stage from the request's production flag and the
    /// environment snapshot.
    pub fn resolve(production: bool, env: &EnvOverrides) -> Self {
        let test_prod_build = flag_set(&env.test_prod_build);
        let effective_production = production || test_prod_build;

        let selector = env.api_stage();
        let stage_is_local = selector == Some(LOCAL_API_STAGE);
        let api_stage = match selector {
            Some(stage) if !stage_is_local => stage.to_string(),
            _ => DEFAULT_API_STAGE.to_string(),
        };

        // A local stage implies a local backend even for production builds;
        // the other local flags never survive production.
        let local_backend =
            (!effective_production && flag_set(&env.local_backend)) || stage_is_local;
        let local_socket = !effective_production && flag_set(&env.local_socket);
        let local_checkout = !effective_production && flag_set(&env.local_checkout);

        let use_dev_server = !effective_production || test_prod_build;

        let flags = Self {
            effective_production,
            api_stage,
            local_backend,
            local_socket,
            local_checkout,
            test_prod_build,
            use_dev_server,
        };
        debug!(?flags, "resolved stage flags");
        flags
    }

    /// The subset of flags handed to stage-variable providers.
    pub fn context(&self) -> StageContext {
        StageContext {
            api_stage: self.api_stage.clone(),
            local_backend: self.local_backend,
            local_socket: self.local_socket,
            local_checkout: self.local_checkout,
        }
    }
}

/// Stage information passed to a [`StageVariables`] provider.
///
/// [`StageVariables`]: crate::request::StageVariables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageContext {
    pub api_stage: String,
    pub local_backend: bool,
    pub local_socket: bool,
    pub local_checkout: bool,
}
