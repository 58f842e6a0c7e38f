//! Optimization section.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::rules::RuleCondition;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub minimize: bool,
    /// Separate runtime chunk so vendor hashes survive app-only changes.
    pub runtime_chunk: bool,
    pub split_chunks: SplitChunks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimizer: Option<Vec<MinimizerEntry>>,
}

impl Optimization {
    /// Minimize production output. When a production bundle is inspected
    /// under the dev server, override the minimizer to keep symbol names
    /// readable.
    pub fn resolve(effective_production: bool, test_prod_build: bool) -> Self {
        Self {
            minimize: effective_production,
            runtime_chunk: true,
            split_chunks: SplitChunks::vendor_policy(),
            minimizer: test_prod_build
                .then(|| vec![MinimizerEntry::Terser(TerserOptions::unmangled())]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    pub chunks: String,
    pub cache_groups: IndexMap<String, CacheGroup>,
}

impl SplitChunks {
    /// Everything under node_modules lands in a shared `vendor` chunk;
    /// modules imported at least twice land in the fallback group.
    pub fn vendor_policy() -> Self {
        let mut cache_groups = IndexMap::new();
        cache_groups.insert(
            "defaultVendors".to_string(),
            CacheGroup {
                name: Some("vendor".to_string()),
                test: Some(RuleCondition::pattern(r"[\\/]node_modules[\\/]")),
                priority: -10,
                min_chunks: None,
                reuse_existing_chunk: true,
            },
        );
        cache_groups.insert(
            "default".to_string(),
            CacheGroup {
                name: None,
                test: None,
                priority: -20,
                min_chunks: Some(2),
                reuse_existing_chunk: true,
            },
        );
        Self {
            chunks: "all".to_string(),
            cache_groups,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<RuleCondition>,
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_chunks: Option<u32>,
    pub reuse_existing_chunk: bool,
}

/// One entry in an explicit minimizer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "options", rename_all = "lowercase")]
pub enum MinimizerEntry {
    Terser(TerserOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerserOptions {
    pub parallel: bool,
    pub terser_options: TerserCoreOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerserCoreOptions {
    pub mangle: bool,
}

impl TerserOptions {
    /// Parallel minification with mangling off, so stack traces from an
    /// inspected production bundle stay readable.
    pub fn unmangled() -> Self {
        Self {
            parallel: true,
            terser_options: TerserCoreOptions { mangle: false },
        }
    }
}
