//! End-to-end generator behavior.

use indexmap::IndexMap;
use rig_config::{
    generate, BuildConfiguration, BuildRequest, EnvOverrides, Mode, PluginEntry, StageContext,
};
use serde_json::{json, Value};
use tempfile::TempDir;

fn project_root() -> TempDir {
    tempfile::tempdir().expect("temp project root")
}

fn define_values(config: &BuildConfiguration) -> &IndexMap<String, Value> {
    config
        .plugins
        .iter()
        .find_map(|plugin| match plugin {
            PluginEntry::Define(values) => Some(&values.0),
            _ => None,
        })
        .expect("define plugin present")
}

fn css_extract_filename(config: &BuildConfiguration) -> &str {
    config
        .plugins
        .iter()
        .find_map(|plugin| match plugin {
            PluginEntry::CssExtract(options) => Some(options.filename.as_str()),
            _ => None,
        })
        .expect("css-extract plugin present")
}

#[test]
fn generation_is_pure() {
    let root = project_root();
    let request = BuildRequest::new(root.path()).with_production(true);
    let env = EnvOverrides {
        api_stage: Some("staging".to_string()),
        ..EnvOverrides::default()
    };

    let first = generate(&request, &env).unwrap();
    let second = generate(&request, &env).unwrap();
    assert_eq!(first, second);
}

#[test]
fn development_defaults() {
    let root = project_root();
    let config = generate(&BuildRequest::new(root.path()), &EnvOverrides::default()).unwrap();

    assert_eq!(config.mode, Mode::Development);
    assert_eq!(config.entry, "./dist/index");
    assert_eq!(config.output.filename, "[name].bundle.js");
    assert_eq!(config.output.path, root.path().join("dist"));
    assert!(!config.optimization.minimize);
    assert_eq!(config.optimization.minimizer, None);

    let server = config.dev_server.as_ref().expect("dev server section");
    assert_eq!(server.port, 8000);

    assert_eq!(define_values(&config)["__DEV__"], json!(true));
    assert_eq!(css_extract_filename(&config), "[name].css");
}

#[test]
fn production_builds_hash_names_and_drop_the_dev_server() {
    let root = project_root();
    let request = BuildRequest::new(root.path()).with_production(true);
    let config = generate(&request, &EnvOverrides::default()).unwrap();

    assert_eq!(config.mode, Mode::Production);
    assert_eq!(config.output.filename, "[name].[contenthash].bundle.js");
    assert_eq!(css_extract_filename(&config), "[name].[contenthash].css");
    assert!(config.dev_server.is_none());
    assert!(config.optimization.minimize);
    assert_eq!(define_values(&config)["__DEV__"], json!(false));

    // Production always extracts CSS, whatever the request asked.
    let scss_rule = &config.module.rules[3];
    let loaders = scss_rule.loaders.as_ref().unwrap();
    assert_eq!(loaders[0].loader, "mini-css-extract-plugin/loader");
}

#[test]
fn force_flag_builds_production_behind_the_dev_server() {
    let root = project_root();
    let env = EnvOverrides {
        test_prod_build: Some("1".to_string()),
        ..EnvOverrides::default()
    };
    let config = generate(&BuildRequest::new(root.path()), &env).unwrap();

    // Production semantics with dev-server ergonomics.
    assert_eq!(config.mode, Mode::Production);
    assert!(config.optimization.minimize);
    assert!(config.dev_server.is_some());
    assert_eq!(config.output.filename, "[name].bundle.js");

    // The explicit minimizer keeps symbol names readable.
    let minimizer = config.optimization.minimizer.as_ref().unwrap();
    assert_eq!(
        serde_json::to_value(minimizer).unwrap(),
        json!([{
            "name": "terser",
            "options": { "parallel": true, "terserOptions": { "mangle": false } }
        }])
    );
}

#[test]
fn stage_variables_receive_the_resolved_context() {
    let root = project_root();
    let request = BuildRequest::new(root.path()).with_stage_variables(
        |production: bool, context: &StageContext| {
            let mut values = IndexMap::new();
            values.insert("API_STAGE".to_string(), json!(context.api_stage));
            values.insert("LOCAL_BACKEND".to_string(), json!(context.local_backend));
            values.insert("IS_PROD".to_string(), json!(production));
            values
        },
    );
    let env = EnvOverrides {
        api_stage: Some("local".to_string()),
        ..EnvOverrides::default()
    };

    let config = generate(&request, &env).unwrap();
    let defines = define_values(&config);

    // The local selector resolved to the dev stage. Strings arrive quoted
    // for literal substitution; booleans pass through.
    assert_eq!(defines["API_STAGE"], json!("\"dev\""));
    assert_eq!(defines["LOCAL_BACKEND"], json!(true));
    assert_eq!(defines["IS_PROD"], json!(false));
}

#[test]
fn stylesheet_rules_route_names_exclusively() {
    let root = project_root();
    let request = BuildRequest::new(root.path())
        .with_global_stylesheets(vec!["grid".to_string(), "global".to_string()]);
    let config = generate(&request, &EnvOverrides::default()).unwrap();

    // template, fonts, images, scoped scss, global scss, plain css.
    assert_eq!(config.module.rules.len(), 6);
    let scoped = &config.module.rules[3].test;
    let global = &config.module.rules[4].test;

    assert!(global.matches("src/styles/grid.scss"));
    assert!(!scoped.matches("src/styles/grid.scss"));

    assert!(scoped.matches("src/components/button.scss"));
    assert!(!global.matches("src/components/button.scss"));

    // The global chain compiles without name scoping.
    let global_loaders = config.module.rules[4].loaders.as_ref().unwrap();
    assert_eq!(global_loaders[1].options.as_ref().unwrap()["modules"], json!(false));
}

#[test]
fn empty_global_list_routes_everything_through_the_scoped_chain() {
    let root = project_root();
    let request = BuildRequest::new(root.path()).with_global_stylesheets(Vec::new());
    let config = generate(&request, &EnvOverrides::default()).unwrap();

    assert_eq!(config.module.rules.len(), 5);
    let scoped = &config.module.rules[3].test;
    assert!(scoped.matches("src/styles/grid.scss"));
    assert!(scoped.matches("src/components/button.scss"));
}

#[test]
fn favicon_lands_in_the_html_plugin_resolved_against_the_root() {
    let root = project_root();
    std::fs::write(root.path().join("favicon.ico"), b"icon").unwrap();

    let request = BuildRequest::new(root.path()).with_favicon("favicon.ico");
    let config = generate(&request, &EnvOverrides::default()).unwrap();

    let html = config
        .plugins
        .iter()
        .find_map(|plugin| match plugin {
            PluginEntry::Html(options) => Some(options),
            _ => None,
        })
        .expect("html plugin present");
    assert_eq!(html.favicon, Some(root.path().join("favicon.ico")));
    assert!(html.inject);
    assert!(html.minify.remove_comments);
    assert!(!html.minify.minify_js);
}

#[test]
fn aliases_and_hosts_flow_into_the_document() {
    let root = project_root();
    let request = BuildRequest::new(root.path())
        .with_alias("@src", "dist")
        .with_allowed_hosts(vec![".example.dev".to_string()]);
    let config = generate(&request, &EnvOverrides::default()).unwrap();

    assert_eq!(config.resolve.alias["@src"], root.path().join("dist"));
    let server = config.dev_server.as_ref().unwrap();
    assert_eq!(server.allowed_hosts, vec![".example.dev".to_string()]);
}

#[test]
fn documents_round_trip_through_json() {
    let root = project_root();
    let request = BuildRequest::new(root.path())
        .with_production(true)
        .with_alias("@src", "dist");
    let config = generate(&request, &EnvOverrides::default()).unwrap();

    let value = config.to_value().unwrap();
    let restored = BuildConfiguration::from_value(value).unwrap();
    assert_eq!(config, restored);
}
