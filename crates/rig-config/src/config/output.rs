//! Output section.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stable filename used while iterating behind the dev server.
pub const DEV_FILENAME: &str = "[name].bundle.js";

/// Content-hashed filename for deployable builds.
pub const HASHED_FILENAME: &str = "[name].[contenthash].bundle.js";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Absolute directory emitted assets land in.
    pub path: PathBuf,
    /// URL prefix the bundle is served under.
    pub public_path: String,
    /// Chunk filename template.
    pub filename: String,
}

impl OutputOptions {
    /// Apply the output-naming policy: stable names under the dev server,
    /// hashed names otherwise.
    pub fn resolve(path: PathBuf, use_dev_server: bool) -> Self {
        let filename = if use_dev_server {
            DEV_FILENAME
        } else {
            HASHED_FILENAME
        };
        Self {
            path,
            public_path: "/".to_string(),
            filename: filename.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_server_builds_get_stable_names() {
        let output = OutputOptions::resolve(PathBuf::from("/srv/app/dist"), true);
        assert_eq!(output.filename, "[name].bundle.js");
        assert_eq!(output.public_path, "/");
    }

    #[test]
    fn deployable_builds_get_hashed_names() {
        let output = OutputOptions::resolve(PathBuf::from("/srv/app/dist"), false);
        assert_eq!(output.filename, "[name].[contenthash].bundle.js");
    }
}
