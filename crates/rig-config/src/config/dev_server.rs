//! Dev-server section, present only for dev-server builds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    /// Serve the shell for unknown paths so client-side routing works.
    pub history_api_fallback: bool,
    pub hot: bool,
    /// Render build errors as a full-screen overlay.
    pub overlay: bool,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_hosts: Vec<String>,
}

impl DevServerOptions {
    pub fn resolve(port: u16, allowed_hosts: Vec<String>) -> Self {
        Self {
            history_api_fallback: true,
            hot: true,
            overlay: true,
            port,
            allowed_hosts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fixed_switches_are_always_on() {
        let server = DevServerOptions::resolve(8004, vec![".example.dev".to_string()]);
        assert!(server.history_api_fallback);
        assert!(server.hot);
        assert!(server.overlay);
        assert_eq!(server.port, 8004);
    }

    #[test]
    fn empty_host_list_is_omitted_from_the_document() {
        let value = serde_json::to_value(DevServerOptions::resolve(8000, Vec::new())).unwrap();
        assert_eq!(
            value,
            json!({
                "historyApiFallback": true,
                "hot": true,
                "overlay": true,
                "port": 8000
            })
        );
    }
}
