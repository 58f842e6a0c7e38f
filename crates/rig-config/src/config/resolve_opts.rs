//! Module-resolution section.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Extensions tried, in order, for extensionless imports.
pub const RESOLVE_EXTENSIONS: [&str; 3] = [".js", ".jsx", ".json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub alias: IndexMap<String, PathBuf>,
    /// Follow symlinks to their real path during resolution.
    pub symlinks: bool,
}

impl ResolveOptions {
    pub fn with_aliases(alias: IndexMap<String, PathBuf>) -> Self {
        Self {
            extensions: RESOLVE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            alias,
            symlinks: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_aliases_are_omitted_from_the_document() {
        let value = serde_json::to_value(ResolveOptions::with_aliases(IndexMap::new())).unwrap();
        assert_eq!(
            value,
            json!({
                "extensions": [".js", ".jsx", ".json"],
                "symlinks": true
            })
        );
    }

    #[test]
    fn aliases_serialize_under_their_literal_names() {
        let mut alias = IndexMap::new();
        alias.insert("@src".to_string(), PathBuf::from("/srv/app/dist"));

        let value = serde_json::to_value(ResolveOptions::with_aliases(alias)).unwrap();
        assert_eq!(value["alias"]["@src"], json!("/srv/app/dist"));
    }
}
