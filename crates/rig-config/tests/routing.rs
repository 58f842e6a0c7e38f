//! Property tests for stylesheet routing.

use proptest::collection::vec;
use proptest::prelude::*;
use rig_config::{generate, BuildRequest, EnvOverrides, RuleCondition};

/// The scoped and (optional) global stylesheet conditions from a generated
/// document. Rule order is fixed: the scoped rule follows the asset rules,
/// the global rule follows the scoped one when present.
fn stylesheet_conditions(names: Vec<String>) -> (RuleCondition, Option<RuleCondition>) {
    let root = tempfile::tempdir().expect("temp project root");
    let request = BuildRequest::new(root.path()).with_global_stylesheets(names);
    let config = generate(&request, &EnvOverrides::default()).expect("generate");

    let scoped = config.module.rules[3].test.clone();
    let global = (config.module.rules.len() == 6).then(|| config.module.rules[4].test.clone());
    (scoped, global)
}

proptest! {
    /// Every `.scss` path takes exactly one of the two chains.
    #[test]
    fn every_stylesheet_takes_exactly_one_chain(
        names in vec("[a-z]{1,8}", 0..4),
        dir in "[a-z]{1,6}",
        stem in "[a-z]{1,8}",
    ) {
        let (scoped, global) = stylesheet_conditions(names);
        let path = format!("{dir}/{stem}.scss");

        let in_global = global.as_ref().is_some_and(|condition| condition.matches(&path));
        let in_scoped = scoped.matches(&path);
        prop_assert!(in_scoped != in_global, "path {path} matched {}",
            if in_scoped { "both chains" } else { "neither chain" });
    }

    /// Paths named by the request always take the global chain.
    #[test]
    fn named_stylesheets_take_the_global_chain(
        names in vec("[a-z]{1,8}", 1..4),
        dir in "[a-z]{1,6}",
        pick in any::<prop::sample::Index>(),
    ) {
        let name = names[pick.index(names.len())].clone();
        let (scoped, global) = stylesheet_conditions(names);
        let path = format!("{dir}/{name}.scss");

        let global = global.expect("non-empty list yields a global rule");
        prop_assert!(global.matches(&path));
        prop_assert!(!scoped.matches(&path));
    }

    /// Non-Sass paths match neither stylesheet chain.
    #[test]
    fn other_files_match_neither_chain(
        names in vec("[a-z]{1,8}", 0..4),
        stem in "[a-z]{1,8}",
        ext in "(js|jsx|json|css|png)",
    ) {
        let (scoped, global) = stylesheet_conditions(names);
        let path = format!("src/{stem}.{ext}");

        prop_assert!(!scoped.matches(&path));
        prop_assert!(!global.is_some_and(|condition| condition.matches(&path)));
    }
}
