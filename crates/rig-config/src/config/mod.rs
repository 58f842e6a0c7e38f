//! Bundler-facing configuration document.
//!
//! Models the JSON document a webpack-style engine consumes: camelCase
//! field names on the wire, ordered rule and plugin lists, and the small
//! condition-object grammar used by module rules. Everything serializes
//! with `serde` so the document can be emitted, diffed and round-tripped.

mod dev_server;
mod optimization;
mod output;
mod plugins;
mod resolve_opts;
mod rules;
pub mod styles;

pub use dev_server::DevServerOptions;
pub use optimization::{
    CacheGroup, MinimizerEntry, Optimization, SplitChunks, TerserCoreOptions, TerserOptions,
};
pub use output::OutputOptions;
pub use plugins::{
    CssExtractOptions, DefineValues, HtmlMinifyOptions, HtmlPluginOptions, IgnoreOptions,
    PluginEntry,
};
pub use resolve_opts::ResolveOptions;
pub use rules::{
    AssetGenerator, AssetModuleType, LoaderEntry, ModuleRule, ModuleRules, RuleCondition,
};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Build mode advertised to the bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub fn from_production(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Development
        }
    }
}

/// A document knob that is either disabled or set to a named preset.
///
/// Serializes as the literal `false` when off and as the preset name
/// otherwise, matching the engine's union type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    Off,
    Preset(String),
}

impl Serialize for Toggle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Off => serializer.serialize_bool(false),
            Self::Preset(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for Toggle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => Ok(Self::Off),
            Raw::Flag(true) => Err(D::Error::custom("expected `false` or a preset name")),
            Raw::Name(name) => Ok(Self::Preset(name)),
        }
    }
}

/// Performance-hint policy. The generator always disables hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceOptions {
    pub hints: Toggle,
}

/// The full document handed to the bundler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    pub mode: Mode,
    pub entry: String,
    pub target: String,
    pub output: OutputOptions,
    pub resolve: ResolveOptions,
    pub module: ModuleRules,
    pub plugins: Vec<PluginEntry>,
    pub optimization: Optimization,
    pub devtool: Toggle,
    pub performance: PerformanceOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerOptions>,
}

impl BuildConfiguration {
    /// Serialize the document to a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|err| ConfigError::invalid("configuration", err.to_string()))
    }

    /// Deserialize a document from a JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|err| ConfigError::invalid("configuration", err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(json!(Mode::Development), json!("development"));
        assert_eq!(json!(Mode::Production), json!("production"));
    }

    #[test]
    fn toggle_serializes_as_false_or_name() {
        assert_eq!(json!(Toggle::Off), json!(false));
        assert_eq!(
            json!(Toggle::Preset("source-map".to_string())),
            json!("source-map")
        );
    }

    #[test]
    fn toggle_rejects_a_bare_true() {
        let toggle: std::result::Result<Toggle, _> = serde_json::from_value(json!(true));
        assert!(toggle.is_err());

        let off: Toggle = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(off, Toggle::Off);
    }
}
