//! Stylesheet loader chains.
//!
//! Three chains cover the stylesheet surface. Component `.scss` files go
//! through CSS modules so class names are scoped per file; the shared
//! stylesheets a request names stay unscoped; plain `.css` files compile
//! without the Sass step. All three derive from one base chain so loader
//! versions and common options never drift apart.

use serde_json::json;

use super::rules::{LoaderEntry, RuleCondition};

/// Regular-expression condition matching any stylesheet whose path ends
/// with one of the given names plus `.scss`.
///
/// Returns `None` for an empty list: nothing is global and the scoped
/// chain takes every stylesheet.
pub fn global_pattern(names: &[String]) -> Option<RuleCondition> {
    if names.is_empty() {
        return None;
    }
    let escaped: Vec<String> = names.iter().map(|name| regex::escape(name)).collect();
    Some(RuleCondition::pattern(format!(
        r"({})\.scss$",
        escaped.join("|")
    )))
}

/// Chain for component stylesheets. CSS modules scope every class name to
/// its file.
pub fn scoped_chain(extract: bool) -> Vec<LoaderEntry> {
    vec![
        chain_head(extract),
        LoaderEntry::with_options(
            "css-loader",
            json!({
                "esModule": true,
                "modules": {
                    "namedExport": true,
                    "localIdentName": "[name]__[local]___[hash:base64:5]"
                },
                "sourceMap": false,
                "importLoaders": 1
            }),
        ),
        postcss(),
        resolve_url(),
        sass(),
    ]
}

/// Chain for the shared stylesheets named by the request: same pipeline,
/// no name scoping.
pub fn global_chain(extract: bool) -> Vec<LoaderEntry> {
    let mut chain = scoped_chain(extract);
    chain[1] = LoaderEntry::with_options(
        "css-loader",
        json!({
            "modules": false,
            "sourceMap": true,
            "importLoaders": 1
        }),
    );
    chain
}

/// Chain for plain CSS: the global chain without the Sass compiler.
pub fn plain_css_chain(extract: bool) -> Vec<LoaderEntry> {
    let mut chain = global_chain(extract);
    chain.retain(|entry| entry.loader != "sass-loader");
    chain
}

/// Head of every chain: inject style tags in development, extract files
/// when the build extracts CSS. The head's module-export options must
/// agree with the css-loader behind it or named exports break.
fn chain_head(extract: bool) -> LoaderEntry {
    let loader = if extract {
        "mini-css-extract-plugin/loader"
    } else {
        "style-loader"
    };
    LoaderEntry::with_options(
        loader,
        json!({
            "esModule": true,
            "modules": { "namedExport": true }
        }),
    )
}

fn postcss() -> LoaderEntry {
    LoaderEntry::with_options(
        "postcss-loader",
        json!({
            "postcssOptions": { "plugins": ["autoprefixer"] },
            "sourceMap": false
        }),
    )
}

fn resolve_url() -> LoaderEntry {
    LoaderEntry::with_options("resolve-url-loader", json!({ "sourceMap": false }))
}

fn sass() -> LoaderEntry {
    LoaderEntry::with_options("sass-loader", json!({ "sourceMap": true }))
}
