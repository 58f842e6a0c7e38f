//! Plugin activations.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One plugin activation: a well-known name plus its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "options", rename_all = "kebab-case")]
pub enum PluginEntry {
    /// Drop module requests matching a pattern inside a matching context.
    Ignore(IgnoreOptions),
    /// Substitute named constants at build time.
    Define(DefineValues),
    /// Extract compiled CSS into standalone files.
    CssExtract(CssExtractOptions),
    /// Emit the HTML shell referencing the produced bundles.
    Html(HtmlPluginOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoreOptions {
    pub resource_reg_exp: String,
    pub context_reg_exp: String,
}

impl IgnoreOptions {
    /// Moment.js pulls in every locale it ships; keep them out of the
    /// bundle.
    pub fn moment_locales() -> Self {
        Self {
            resource_reg_exp: r"^\./locale$".to_string(),
            context_reg_exp: r"moment$".to_string(),
        }
    }
}

/// Build-time constants injected into the bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefineValues(pub IndexMap<String, Value>);

impl DefineValues {
    /// Assemble the define map: `__DEV__` plus the provider's constants.
    ///
    /// The engine substitutes each value as a raw code token, so string
    /// constants are wrapped in an extra layer of quotes to stay string
    /// literals after substitution. Every other JSON value already reads
    /// as the intended token.
    pub fn resolve(production: bool, variables: IndexMap<String, Value>) -> Self {
        let mut values = IndexMap::new();
        values.insert("__DEV__".to_string(), Value::Bool(!production));
        for (key, value) in variables {
            values.insert(key, quote_strings(value));
        }
        Self(values)
    }
}

fn quote_strings(value: Value) -> Value {
    match value {
        Value::String(raw) => {
            let literal = Value::String(raw).to_string();
            Value::String(literal)
        }
        other => other,
    }
}

/// Stable CSS filename used while iterating behind the dev server.
pub const DEV_CSS_FILENAME: &str = "[name].css";

/// Content-hashed CSS filename for deployable builds.
pub const HASHED_CSS_FILENAME: &str = "[name].[contenthash].css";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssExtractOptions {
    pub filename: String,
}

impl CssExtractOptions {
    /// CSS follows the same output-naming policy as JS chunks.
    pub fn resolve(use_dev_server: bool) -> Self {
        let filename = if use_dev_server {
            DEV_CSS_FILENAME
        } else {
            HASHED_CSS_FILENAME
        };
        Self {
            filename: filename.to_string(),
        }
    }
}

/// HTML shell generation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlPluginOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<PathBuf>,
    pub template: String,
    /// Inject script and link tags for the emitted chunks.
    pub inject: bool,
    pub minify: HtmlMinifyOptions,
}

/// HTML minification switches. Comment stripping and whitespace collapsing
/// are always on; the rest follow the effective mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinifyOptions {
    pub remove_comments: bool,
    pub collapse_whitespace: bool,
    pub remove_redundant_attributes: bool,
    pub use_short_doctype: bool,
    pub remove_empty_attributes: bool,
    pub remove_style_link_type_attributes: bool,
    pub keep_closing_slash: bool,
    #[serde(rename = "minifyJS")]
    pub minify_js: bool,
    #[serde(rename = "minifyCSS")]
    pub minify_css: bool,
    #[serde(rename = "minifyURLs")]
    pub minify_urls: bool,
}

impl HtmlMinifyOptions {
    pub fn resolve(production: bool) -> Self {
        Self {
            remove_comments: true,
            collapse_whitespace: true,
            remove_redundant_attributes: production,
            use_short_doctype: production,
            remove_empty_attributes: production,
            remove_style_link_type_attributes: production,
            keep_closing_slash: production,
            minify_js: production,
            minify_css: production,
            minify_urls: production,
        }
    }
}
