//! Build-request model.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

use crate::stage::StageContext;

/// Stylesheet names routed through the global (unscoped) chain when a
/// request does not override the list.
pub const DEFAULT_GLOBAL_STYLESHEETS: [&str; 4] = ["grid", "global", "toastr", "piller"];

/// Dev-server port used when a request does not pick one.
pub const DEFAULT_DEV_SERVER_PORT: u16 = 8000;

/// Bundle entry specifier used when a request does not pick one.
pub const DEFAULT_ENTRY: &str = "./dist/index";

/// Output directory, relative to the project root, used when a request
/// does not pick one.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// HTML shell template, relative to the project root, used when a request
/// does not pick one.
pub const DEFAULT_HTML_TEMPLATE: &str = "src/app/index.ejs";

/// Resolves the named build-time constants injected into the bundle.
///
/// Invoked once per generation with the effective production flag and the
/// resolved stage context. String values are quoted into string literals
/// during assembly; other JSON values pass through as code tokens.
pub trait StageVariables {
    fn resolve(&self, production: bool, context: &StageContext) -> IndexMap<String, Value>;
}

impl<F> StageVariables for F
where
    F: Fn(bool, &StageContext) -> IndexMap<String, Value>,
{
    fn resolve(&self, production: bool, context: &StageContext) -> IndexMap<String, Value> {
        self(production, context)
    }
}

/// Provider used when a request supplies no build-time constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStageVariables;

impl StageVariables for NoStageVariables {
    fn resolve(&self, _production: bool, _context: &StageContext) -> IndexMap<String, Value> {
        IndexMap::new()
    }
}

/// Everything a caller decides about a build.
///
/// The request and the captured [`EnvOverrides`] are the only inputs to
/// [`generate`]; two equal pairs produce structurally equal documents.
///
/// [`EnvOverrides`]: crate::env::EnvOverrides
/// [`generate`]: crate::generate
pub struct BuildRequest {
    /// Build a deployable bundle rather than a development one.
    pub production: bool,
    /// Absolute directory all relative paths resolve against.
    pub project_root: PathBuf,
    /// Favicon wired into the generated HTML shell.
    pub favicon: Option<PathBuf>,
    /// Bundle entry specifier.
    pub entry: String,
    /// Output directory for emitted assets, relative to the root unless
    /// absolute.
    pub output_dir: PathBuf,
    /// HTML shell template path.
    pub html_template: String,
    /// Stylesheet names compiled without class-name scoping.
    pub global_stylesheet_names: Vec<String>,
    /// Extract compiled CSS to files instead of injecting style tags.
    /// Production builds always extract.
    pub extract_css: bool,
    /// Port for the dev-server section.
    pub dev_server_port: u16,
    /// Host patterns the dev server accepts.
    pub allowed_hosts: Vec<String>,
    /// Import-path aliases, resolved against the root unless absolute.
    pub path_aliases: IndexMap<String, PathBuf>,
    /// Provider for build-time constants.
    pub stage_variables: Box<dyn StageVariables + Send + Sync>,
}

impl BuildRequest {
    /// A development request with every default in place.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            production: false,
            project_root: project_root.into(),
            favicon: None,
            entry: DEFAULT_ENTRY.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            html_template: DEFAULT_HTML_TEMPLATE.to_string(),
            global_stylesheet_names: DEFAULT_GLOBAL_STYLESHEETS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            extract_css: false,
            dev_server_port: DEFAULT_DEV_SERVER_PORT,
            allowed_hosts: Vec::new(),
            path_aliases: IndexMap::new(),
            stage_variables: Box::new(NoStageVariables),
        }
    }

    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    pub fn with_favicon(mut self, favicon: impl Into<PathBuf>) -> Self {
        self.favicon = Some(favicon.into());
        self
    }

    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_html_template(mut self, template: impl Into<String>) -> Self {
        self.html_template = template.into();
        self
    }

    /// Replace the global-stylesheet list. An empty list routes every
    /// stylesheet through the scoped chain.
    pub fn with_global_stylesheets(mut self, names: Vec<String>) -> Self {
        self.global_stylesheet_names = names;
        self
    }

    pub fn with_extract_css(mut self, extract: bool) -> Self {
        self.extract_css = extract;
        self
    }

    pub fn with_dev_server_port(mut self, port: u16) -> Self {
        self.dev_server_port = port;
        self
    }

    pub fn with_allowed_hosts(mut self, hosts: Vec<String>) -> Self {
        self.allowed_hosts = hosts;
        self
    }

    /// Register one import-path alias.
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        self.path_aliases.insert(alias.into(), target.into());
        self
    }

    pub fn with_stage_variables(
        mut self,
        provider: impl StageVariables + Send + Sync + 'static,
    ) -> Self {
        self.stage_variables = Box::new(provider);
        self
    }

    /// The output directory resolved against the project root.
    pub fn resolved_output_dir(&self) -> PathBuf {
        resolve_against(&self.project_root, &self.output_dir)
    }

    /// The favicon path resolved against the project root.
    pub fn resolved_favicon(&self) -> Option<PathBuf> {
        self.favicon
            .as_deref()
            .map(|favicon| resolve_against(&self.project_root, favicon))
    }

    /// Alias targets resolved against the project root, preserving
    /// insertion order.
    pub fn resolved_aliases(&self) -> IndexMap<String, PathBuf> {
        self.path_aliases
            .iter()
            .map(|(alias, target)| (alias.clone(), resolve_against(&self.project_root, target)))
            .collect()
    }
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

impl fmt::Debug for BuildRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The provider is opaque; report everything else.
        f.debug_struct("BuildRequest")
            .field("production", &self.production)
            .field("project_root", &self.project_root)
            .field("favicon", &self.favicon)
            .field("entry", &self.entry)
            .field("output_dir", &self.output_dir)
            .field("html_template", &self.html_template)
            .field("global_stylesheet_names", &self.global_stylesheet_names)
            .field("extract_css", &self.extract_css)
            .field("dev_server_port", &self.dev_server_port)
            .field("allowed_hosts", &self.allowed_hosts)
            .field("path_aliases", &self.path_aliases)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_constants() {
        let request = BuildRequest::new("/srv/app");
        assert!(!request.production);
        assert_eq!(request.entry, DEFAULT_ENTRY);
        assert_eq!(request.dev_server_port, DEFAULT_DEV_SERVER_PORT);
        assert_eq!(request.global_stylesheet_names, DEFAULT_GLOBAL_STYLESHEETS);
        assert!(request.path_aliases.is_empty());
    }

    #[test]
    fn relative_paths_resolve_against_the_root() {
        let request = BuildRequest::new("/srv/app")
            .with_output_dir("dist/main")
            .with_favicon("src/favicon.ico")
            .with_alias("@src", "dist")
            .with_alias("@cmpts", "/opt/shared/components");

        assert_eq!(request.resolved_output_dir(), PathBuf::from("/srv/app/dist/main"));
        assert_eq!(
            request.resolved_favicon(),
            Some(PathBuf::from("/srv/app/src/favicon.ico"))
        );

        let aliases = request.resolved_aliases();
        assert_eq!(aliases["@src"], PathBuf::from("/srv/app/dist"));
        // Absolute targets are kept verbatim.
        assert_eq!(aliases["@cmpts"], PathBuf::from("/opt/shared/components"));
    }

    #[test]
    fn debug_output_elides_the_provider() {
        let request = BuildRequest::new("/srv/app");
        let rendered = format!("{request:?}");
        assert!(rendered.contains("project_root"));
        assert!(rendered.ends_with(".. }"));
    }
}
