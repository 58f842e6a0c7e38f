//! The configuration generator.

use serde_json::json;
use tracing::debug;

use crate::config::styles;
use crate::config::{
    AssetModuleType, BuildConfiguration, CssExtractOptions, DefineValues, DevServerOptions,
    HtmlMinifyOptions, HtmlPluginOptions, IgnoreOptions, LoaderEntry, Mode, ModuleRule,
    ModuleRules, Optimization, OutputOptions, PerformanceOptions, PluginEntry, ResolveOptions,
    RuleCondition, Toggle,
};
use crate::env::EnvOverrides;
use crate::error::Result;
use crate::request::BuildRequest;
use crate::stage::StageFlags;
use crate::validation;

/// Produce the configuration document for a request against a captured
/// environment snapshot.
///
/// Deterministic: equal request and snapshot values yield structurally
/// equal documents. The environment is never read here; filesystem access
/// is limited to the validation checks.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] when a request field
/// violates one of its invariants; nothing is generated on error.
///
/// [`ConfigError::InvalidConfiguration`]: crate::error::ConfigError::InvalidConfiguration
pub fn generate(request: &BuildRequest, env: &EnvOverrides) -> Result<BuildConfiguration> {
    validation::validate(request)?;

    let stage = StageFlags::resolve(request.production, env);
    let extract_css = request.extract_css || stage.effective_production;

    let configuration = BuildConfiguration {
        mode: Mode::from_production(stage.effective_production),
        entry: request.entry.clone(),
        target: "web".to_string(),
        output: OutputOptions::resolve(request.resolved_output_dir(), stage.use_dev_server),
        resolve: ResolveOptions::with_aliases(request.resolved_aliases()),
        module: ModuleRules {
            rules: module_rules(request, extract_css),
        },
        plugins: plugins(request, &stage),
        optimization: Optimization::resolve(stage.effective_production, stage.test_prod_build),
        devtool: Toggle::Off,
        performance: PerformanceOptions { hints: Toggle::Off },
        dev_server: stage
            .use_dev_server
            .then(|| DevServerOptions::resolve(request.dev_server_port, request.allowed_hosts.clone())),
    };

    debug!(
        mode = ?configuration.mode,
        rules = configuration.module.rules.len(),
        plugins = configuration.plugins.len(),
        dev_server = configuration.dev_server.is_some(),
        "assembled configuration"
    );
    Ok(configuration)
}

/// The ordered rule list: template, assets, then the three stylesheet
/// rules.
fn module_rules(request: &BuildRequest, extract_css: bool) -> Vec<ModuleRule> {
    let mut rules = vec![template_rule(), font_rule(), image_rule()];

    let global = styles::global_pattern(&request.global_stylesheet_names);
    // The global matcher doubles as an exclusion on the scoped rule, so a
    // stylesheet can never take both chains.
    let scoped_test = match &global {
        Some(pattern) => RuleCondition::all(vec![
            RuleCondition::pattern(r"\.scss$"),
            RuleCondition::not(pattern.clone()),
        ]),
        None => RuleCondition::pattern(r"\.scss$"),
    };
    rules.push(ModuleRule::with_loaders(
        scoped_test,
        styles::scoped_chain(extract_css),
    ));
    if let Some(pattern) = global {
        rules.push(ModuleRule::with_loaders(
            pattern,
            styles::global_chain(extract_css),
        ));
    }
    rules.push(ModuleRule::with_loaders(
        RuleCondition::pattern(r"\.css$"),
        styles::plain_css_chain(extract_css),
    ));

    rules
}

fn template_rule() -> ModuleRule {
    ModuleRule::with_loaders(
        RuleCondition::pattern(r"\.ejs$"),
        vec![LoaderEntry::with_options(
            "ejs-compiled-loader",
            json!({
                "htmlmin": true,
                "htmlminOptions": { "removeComments": true }
            }),
        )],
    )
}

fn font_rule() -> ModuleRule {
    ModuleRule::asset(
        RuleCondition::pattern(r"\.(eot|woff2?|ttf|otf|svg)(\?v=\d+\.\d+\.\d+)?$"),
        AssetModuleType::Asset,
        "assets/fonts/[path][name][ext]",
    )
}

fn image_rule() -> ModuleRule {
    ModuleRule::asset(
        RuleCondition::pattern(r"(?i)\.(jpe?g|png|gif|pdf|ico)$"),
        AssetModuleType::Resource,
        "assets/images/[name][ext]",
    )
}

fn plugins(request: &BuildRequest, stage: &StageFlags) -> Vec<PluginEntry> {
    let variables = request
        .stage_variables
        .resolve(stage.effective_production, &stage.context());

    vec![
        PluginEntry::Ignore(IgnoreOptions::moment_locales()),
        PluginEntry::Define(DefineValues::resolve(stage.effective_production, variables)),
        PluginEntry::CssExtract(CssExtractOptions::resolve(stage.use_dev_server)),
        PluginEntry::Html(HtmlPluginOptions {
            favicon: request.resolved_favicon(),
            template: request.html_template.clone(),
            inject: true,
            minify: HtmlMinifyOptions::resolve(stage.effective_production),
        }),
    ]
}
