//! Grammar invariant tests using property-based testing
//!
//! These tests verify that certain properties hold for ANY input to the
//! annotation grammar:
//! - the grammar never panics and is deterministic
//! - emitted attributes follow the canonical order with unique, non-empty
//!   entries
//! - table geometry never leaks out of its gating context

use proptest::prelude::*;

use crate::{model::ElementContext, parse_attributes};

use super::generators::*;

const CANONICAL_ORDER: [&str; 8] = [
    "style", "class", "id", "lang", "colspan", "rowspan", "span", "width",
];

// Configuration for proptest - can be overridden with PROPTEST_CASES env var
proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000, // Default for local dev
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    /// The grammar should never panic on any input, no matter how
    /// malformed. Unrecognized tokens must degrade to "nothing found".
    #[test]
    fn grammar_never_panics(
        input in any_annotation_string(),
        context in any_context(),
        include_id in any::<bool>(),
    ) {
        let _ = parse_attributes(&input, context, include_id);
    }

    /// Parsing twice gives identical results; nothing about the grammar
    /// is stateful.
    #[test]
    fn parsing_is_deterministic(input in annotation_soup(), context in any_context()) {
        prop_assert_eq!(
            parse_attributes(&input, context, true),
            parse_attributes(&input, context, true)
        );
    }

    /// Every emitted name is canonical and the emission order follows the
    /// canonical sequence.
    #[test]
    fn canonical_order_holds(input in annotation_soup(), context in any_context()) {
        let attrs = parse_attributes(&input, context, true);
        let positions: Vec<Option<usize>> = attrs
            .iter()
            .map(|(name, _)| CANONICAL_ORDER.iter().position(|c| c == name))
            .collect();
        prop_assert!(positions.iter().all(Option::is_some));
        let positions: Vec<usize> = positions.into_iter().flatten().collect();
        prop_assert!(positions.is_sorted());
    }

    /// Names are unique within one parse result.
    #[test]
    fn names_are_unique(input in annotation_soup(), context in any_context()) {
        let attrs = parse_attributes(&input, context, true);
        let names: Vec<&str> = attrs.iter().map(|(name, _)| name.as_str()).collect();
        let deduplicated: std::collections::BTreeSet<&str> = names.iter().copied().collect();
        prop_assert_eq!(names.len(), deduplicated.len());
    }

    /// A present attribute always carries a non-empty value.
    #[test]
    fn values_are_never_empty(input in annotation_soup(), context in any_context()) {
        for (name, value) in parse_attributes(&input, context, true).iter() {
            prop_assert!(!value.is_empty(), "empty value for {name}");
        }
    }

    /// The id attribute only appears when the caller opted in.
    #[test]
    fn id_requires_opt_in(input in annotation_soup(), context in any_context()) {
        let attrs = parse_attributes(&input, context, false);
        prop_assert!(!attrs.contains_key("id"));
    }

    /// Table geometry stays inside its gating context.
    #[test]
    fn generic_context_never_yields_table_geometry(input in annotation_soup()) {
        let attrs = parse_attributes(&input, ElementContext::Generic, true);
        for key in ["colspan", "rowspan", "span", "width"] {
            prop_assert!(!attrs.contains_key(key));
        }
    }

    /// A style value always closes with a semicolon.
    #[test]
    fn style_always_ends_with_a_semicolon(input in annotation_soup(), context in any_context()) {
        if let Some(style) = parse_attributes(&input, context, true).get("style") {
            prop_assert!(style.ends_with(';'));
        }
    }
}
