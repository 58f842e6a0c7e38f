//! Preset files: named request value-sets.
//!
//! A preset file collects the request values for each build target, so one
//! parameterized generator serves every target:
//!
//! ```toml
//! [preset.app]
//! entry = "./dist/app/index"
//! dev_server_port = 8004
//!
//! [preset.app.stage_variables]
//! APP_NAME = "app"
//! ```
//!
//! Loading goes through figment's TOML provider. Flags passed on the
//! command line override preset values after loading.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::providers::{Format, Toml};
use figment::Figment;
use indexmap::IndexMap;
use rig_config::{
    BuildRequest, StageContext, StageVariables, DEFAULT_DEV_SERVER_PORT, DEFAULT_ENTRY,
    DEFAULT_GLOBAL_STYLESHEETS, DEFAULT_HTML_TEMPLATE, DEFAULT_OUTPUT_DIR,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{CliError, Result};

/// Preset file discovered under the project root.
pub const PRESET_FILE: &str = "rig.toml";

/// Preset consulted when no name is passed.
pub const DEFAULT_PRESET: &str = "default";

/// The parsed preset file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetFile {
    #[serde(default)]
    pub preset: HashMap<String, Preset>,
}

/// One named request value-set. Every field is optional in the file;
/// omitted fields keep the request defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Preset {
    pub entry: String,
    pub output_dir: PathBuf,
    pub html_template: String,
    pub favicon: Option<PathBuf>,
    /// `None` keeps the built-in global-stylesheet list; an explicit empty
    /// list routes everything through the scoped chain.
    pub global_stylesheets: Option<Vec<String>>,
    pub extract_css: bool,
    pub dev_server_port: u16,
    pub allowed_hosts: Vec<String>,
    pub aliases: IndexMap<String, PathBuf>,
    /// Build-time constants for the define section.
    pub stage_variables: IndexMap<String, Value>,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            entry: DEFAULT_ENTRY.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            html_template: DEFAULT_HTML_TEMPLATE.to_string(),
            favicon: None,
            global_stylesheets: None,
            extract_css: false,
            dev_server_port: DEFAULT_DEV_SERVER_PORT,
            allowed_hosts: Vec::new(),
            aliases: IndexMap::new(),
            stage_variables: IndexMap::new(),
        }
    }
}

impl Preset {
    /// Load a named preset.
    ///
    /// An explicit `config` path must exist. Otherwise `rig.toml` under
    /// the project root is used when present; without a file, only the
    /// unnamed default preset is available.
    pub fn load(config: Option<&Path>, root: &Path, name: Option<&str>) -> Result<Self> {
        let path = match config {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::PresetFileNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Some(path.to_path_buf())
            }
            None => {
                let discovered = root.join(PRESET_FILE);
                discovered.is_file().then_some(discovered)
            }
        };

        let Some(path) = path else {
            return match name {
                Some(name) if name != DEFAULT_PRESET => Err(CliError::PresetFileNotFound {
                    path: root.join(PRESET_FILE),
                }),
                _ => Ok(Self::default()),
            };
        };
        debug!(path = %path.display(), "loading preset file");

        let file: PresetFile = Figment::new()
            .merge(Toml::file(&path))
            .extract()
            .map_err(|source| CliError::PresetFile {
                path: path.clone(),
                source,
            })?;

        match name {
            Some(name) => file.preset.get(name).cloned().ok_or_else(|| {
                let mut available: Vec<String> = file.preset.keys().cloned().collect();
                available.sort();
                CliError::PresetNotFound {
                    name: name.to_string(),
                    path,
                    available,
                }
            }),
            None => Ok(file
                .preset
                .get(DEFAULT_PRESET)
                .cloned()
                .unwrap_or_default()),
        }
    }

    /// Realize the preset into a build request rooted at `project_root`.
    pub fn into_request(self, production: bool, project_root: PathBuf) -> BuildRequest {
        let global_stylesheets = self.global_stylesheets.unwrap_or_else(|| {
            DEFAULT_GLOBAL_STYLESHEETS
                .iter()
                .map(|name| name.to_string())
                .collect()
        });

        let mut request = BuildRequest::new(project_root)
            .with_production(production)
            .with_entry(self.entry)
            .with_output_dir(self.output_dir)
            .with_html_template(self.html_template)
            .with_global_stylesheets(global_stylesheets)
            .with_extract_css(self.extract_css)
            .with_dev_server_port(self.dev_server_port)
            .with_allowed_hosts(self.allowed_hosts);

        if let Some(favicon) = self.favicon {
            request = request.with_favicon(favicon);
        }
        for (alias, target) in self.aliases {
            request = request.with_alias(alias, target);
        }
        if !self.stage_variables.is_empty() {
            request = request.with_stage_variables(TableStageVariables::new(self.stage_variables));
        }
        request
    }
}

/// Stage-variable provider backed by a literal table from the preset file.
#[derive(Debug, Clone, Default)]
pub struct TableStageVariables {
    values: IndexMap<String, Value>,
}

impl TableStageVariables {
    pub fn new(values: IndexMap<String, Value>) -> Self {
        Self { values }
    }
}

impl StageVariables for TableStageVariables {
    fn resolve(&self, _production: bool, _context: &StageContext) -> IndexMap<String, Value> {
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_preset_file(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(PRESET_FILE);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn absent_file_yields_the_default_preset() {
        let root = tempfile::tempdir().unwrap();
        let preset = Preset::load(None, root.path(), None).unwrap();
        assert_eq!(preset.entry, DEFAULT_ENTRY);
        assert_eq!(preset.dev_server_port, DEFAULT_DEV_SERVER_PORT);
    }

    #[test]
    fn named_preset_requires_a_file() {
        let root = tempfile::tempdir().unwrap();
        let error = Preset::load(None, root.path(), Some("app")).unwrap_err();
        assert!(matches!(error, CliError::PresetFileNotFound { .. }));
    }

    #[test]
    fn named_presets_load_their_values() {
        let root = tempfile::tempdir().unwrap();
        write_preset_file(
            root.path(),
            r#"
                [preset.app]
                entry = "./dist/app/index"
                dev_server_port = 8004
                global_stylesheets = []

                [preset.app.stage_variables]
                APP_NAME = "app"
            "#,
        );

        let preset = Preset::load(None, root.path(), Some("app")).unwrap();
        assert_eq!(preset.entry, "./dist/app/index");
        assert_eq!(preset.dev_server_port, 8004);
        assert_eq!(preset.global_stylesheets.as_deref(), Some(&[][..]));
        assert_eq!(preset.stage_variables["APP_NAME"], "app");
        // Unset fields keep their defaults.
        assert_eq!(preset.html_template, DEFAULT_HTML_TEMPLATE);
    }

    #[test]
    fn unknown_preset_lists_the_alternatives() {
        let root = tempfile::tempdir().unwrap();
        write_preset_file(
            root.path(),
            "[preset.app]\n[preset.main]\ndev_server_port = 8004\n",
        );

        let error = Preset::load(None, root.path(), Some("widget")).unwrap_err();
        match error {
            CliError::PresetNotFound { name, available, .. } => {
                assert_eq!(name, "widget");
                assert_eq!(available, vec!["app".to_string(), "main".to_string()]);
            }
            other => panic!("expected PresetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn malformed_files_are_reported_with_their_path() {
        let root = tempfile::tempdir().unwrap();
        let path = write_preset_file(root.path(), "[preset.app\n");

        let error = Preset::load(None, root.path(), Some("app")).unwrap_err();
        assert!(error.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn presets_realize_into_requests() {
        let root = tempfile::tempdir().unwrap();
        let preset = Preset {
            entry: "./src/index".to_string(),
            global_stylesheets: Some(vec!["grid".to_string()]),
            ..Preset::default()
        };

        let request = preset.into_request(true, root.path().to_path_buf());
        assert!(request.production);
        assert_eq!(request.entry, "./src/index");
        assert_eq!(request.global_stylesheet_names, vec!["grid".to_string()]);
    }
}
