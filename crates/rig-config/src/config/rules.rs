//! Module rules and their condition grammar.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Matching predicate for a module rule, in the engine's condition-object
/// form: a bare string is a regular expression over the module path,
/// `{"and": [..]}` requires every branch and `{"not": ..}` negates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleCondition {
    Pattern(String),
    All { and: Vec<RuleCondition> },
    Not { not: Box<RuleCondition> },
}

impl RuleCondition {
    pub fn pattern(source: impl Into<String>) -> Self {
        Self::Pattern(source.into())
    }

    pub fn all(conditions: Vec<RuleCondition>) -> Self {
        Self::All { and: conditions }
    }

    pub fn not(condition: RuleCondition) -> Self {
        Self::Not {
            not: Box::new(condition),
        }
    }

    /// Evaluate the condition against a module path, mirroring the
    /// engine's own evaluation. An unparseable pattern matches nothing.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Pattern(source) => Regex::new(source)
                .map(|pattern| pattern.is_match(path))
                .unwrap_or(false),
            Self::All { and } => and.iter().all(|condition| condition.matches(path)),
            Self::Not { not } => !not.matches(path),
        }
    }
}

/// How an asset-module rule emits files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetModuleType {
    /// Inline small files, emit large ones.
    #[serde(rename = "asset")]
    Asset,
    /// Always emit a separate file.
    #[serde(rename = "asset/resource")]
    Resource,
}

/// Filename template for emitted asset files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetGenerator {
    pub filename: String,
}

/// One entry in a loader chain. Options stay schemaless; each loader
/// defines its own shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderEntry {
    pub loader: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl LoaderEntry {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: None,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options: Some(options),
        }
    }
}

/// A single transform rule: a matcher plus either a loader chain or an
/// asset-module directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    pub test: RuleCondition,
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub loaders: Option<Vec<LoaderEntry>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub module_type: Option<AssetModuleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<AssetGenerator>,
}

impl ModuleRule {
    pub fn with_loaders(test: RuleCondition, loaders: Vec<LoaderEntry>) -> Self {
        Self {
            test,
            loaders: Some(loaders),
            module_type: None,
            generator: None,
        }
    }

    pub fn asset(test: RuleCondition, module_type: AssetModuleType, filename: impl Into<String>) -> Self {
        Self {
            test,
            loaders: None,
            module_type: Some(module_type),
            generator: Some(AssetGenerator {
                filename: filename.into(),
            }),
        }
    }
}

/// The `module` section: an ordered rule list. Order is significant; the
/// scoped stylesheet rule precedes the global one it excludes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRules {
    pub rules: Vec<ModuleRule>,
}
