//! Deterministic build-configuration generation for webpack-style
//! bundlers.
//!
//! One parameterized generator replaces a family of hand-maintained
//! per-target configuration files. A [`BuildRequest`] carries everything a
//! caller decides; an [`EnvOverrides`] snapshot carries the five
//! environment flags developers use to redirect a build at local
//! services; [`generate`] turns the pair into a serializable
//! [`BuildConfiguration`] document.
//!
//! ```
//! use rig_config::{generate, BuildRequest, EnvOverrides};
//!
//! let root = std::env::temp_dir();
//! let request = BuildRequest::new(root).with_production(true);
//! let config = generate(&request, &EnvOverrides::default()).unwrap();
//!
//! assert!(config.optimization.minimize);
//! assert!(config.dev_server.is_none());
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod generate;
pub mod request;
pub mod stage;
pub mod validation;

pub use config::*;
pub use env::EnvOverrides;
pub use error::{ConfigError, Result};
pub use generate::generate;
pub use request::{
    BuildRequest, NoStageVariables, StageVariables, DEFAULT_DEV_SERVER_PORT, DEFAULT_ENTRY,
    DEFAULT_GLOBAL_STYLESHEETS, DEFAULT_HTML_TEMPLATE, DEFAULT_OUTPUT_DIR,
};
pub use stage::{StageContext, StageFlags};
pub use validation::{validate, validate_schema};
