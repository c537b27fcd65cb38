//! Property-based tests for the import rewriter using proptest.
//!
//! Run with: cargo test --package fob-plugin-es-toolkit --test properties

use fob_plugin_es_toolkit::{NamedImport, RewriteDiagnostic, Rewriter, SupportedFunctions};
use proptest::prelude::*;

/// Strategy for plain JavaScript identifiers
///
/// `as` is the rename keyword, and names containing `lodash` would trip the
/// containment pre-check on rewritten output.
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_$][a-zA-Z0-9_$]{0,12}"
        .prop_filter("not a usable binding", |s| s != "as" && !s.contains("lodash"))
}

/// Strategy for list entries with an optional rename clause
fn named_import_strategy() -> impl Strategy<Value = NamedImport> {
    (identifier_strategy(), prop::option::of(identifier_strategy())).prop_map(
        |(actual, custom)| match custom {
            Some(custom) => NamedImport::renamed(actual, custom),
            None => NamedImport::new(actual),
        },
    )
}

fn rewrite(rewriter: &Rewriter, code: &str) -> Option<String> {
    let mut diagnostics: Vec<RewriteDiagnostic> = Vec::new();
    rewriter
        .rewrite(code, &mut diagnostics)
        .expect("well-formed input")
        .map(|rewrite| rewrite.code)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: membership answers match the backing list and are stable
    #[test]
    fn prop_classifier_matches_membership(
        names in prop::collection::vec(identifier_strategy(), 0..20),
        probe in identifier_strategy(),
    ) {
        let supported = SupportedFunctions::from_names(names.clone());
        let expected = names.contains(&probe);

        prop_assert_eq!(supported.is_supported(&probe), expected);
        prop_assert_eq!(supported.is_supported(&probe), expected);
        prop_assert_eq!(supported.is_unsupported(&probe), !expected);
    }

    /// Property: render(parse(token)) == token for canonical tokens
    #[test]
    fn prop_parse_render_round_trip(import in named_import_strategy()) {
        let token = import.render();
        let parsed = NamedImport::parse(&token).unwrap();
        prop_assert_eq!(parsed.render(), token);
    }

    /// Property: a fully supported list keeps its order in the rewritten import
    #[test]
    fn prop_named_list_preserves_order(
        imports in prop::collection::vec(named_import_strategy(), 1..8),
    ) {
        let names: Vec<String> = imports.iter().map(|i| i.actual_name.clone()).collect();
        let rewriter = Rewriter::new(SupportedFunctions::from_names(names)).unwrap();

        let list = fob_plugin_es_toolkit::render_list(&imports);
        let code = format!("import {{ {} }} from 'lodash';", list);
        let rewritten = rewrite(&rewriter, &code).unwrap();

        prop_assert_eq!(
            rewritten,
            format!("import {{ {} }} from 'es-toolkit/compat';", list)
        );
    }

    /// Property: rewriting supported-only output again is a no-op
    #[test]
    fn prop_supported_output_is_idempotent(
        imports in prop::collection::vec(named_import_strategy(), 1..8),
        binding in identifier_strategy(),
        symbol in identifier_strategy(),
    ) {
        let mut names: Vec<String> = imports.iter().map(|i| i.actual_name.clone()).collect();
        names.push(symbol.clone());
        let rewriter = Rewriter::new(SupportedFunctions::from_names(names)).unwrap();

        let code = format!(
            "import {{ {} }} from 'lodash';\nimport {} from 'lodash/{}';\n",
            fob_plugin_es_toolkit::render_list(&imports),
            binding,
            symbol
        );
        let first = rewrite(&rewriter, &code).unwrap();

        prop_assert!(rewrite(&rewriter, &first).is_none());
    }
}
