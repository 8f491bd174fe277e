//! Input generators for the annotation grammar property tests
//!
//! The soup generator leans on annotation-shaped chunks so the interesting
//! grammar paths are hit far more often than uniform random strings would
//! manage.
#![allow(clippy::expect_used)]
use proptest::prelude::*;

use crate::model::ElementContext;

/// Generate any string including edge cases like empty, very long, or
/// full of control characters.
pub fn any_annotation_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(".*").expect("Failed to create any string strategy")
}

/// Generate strings assembled from annotation tokens and plain text.
pub fn annotation_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("{color:red}".to_string()),
            Just("{padding:1px;margin:2px}".to_string()),
            Just("{}".to_string()),
            Just("(note#intro)".to_string()),
            Just("(wide)".to_string()),
            Just("[en]".to_string()),
            Just("[fr-CA]".to_string()),
            Just(r"\2".to_string()),
            Just("/3".to_string()),
            Just("^".to_string()),
            Just("~".to_string()),
            Just("-".to_string()),
            Just("<>".to_string()),
            Just("<".to_string()),
            Just(">".to_string()),
            Just("=".to_string()),
            Just("(((".to_string()),
            Just(")))".to_string()),
            Just("40".to_string()),
            prop::string::string_regex("[a-zA-Z0-9 ]{0,8}").expect("Failed to create text chunk"),
        ],
        0..8,
    )
    .prop_map(|chunks| chunks.join(""))
}

/// Generate any of the four element contexts.
pub fn any_context() -> impl Strategy<Value = ElementContext> {
    prop_oneof![
        Just(ElementContext::Generic),
        Just(ElementContext::TableCell),
        Just(ElementContext::TableRow),
        Just(ElementContext::TableColumn),
    ]
}
