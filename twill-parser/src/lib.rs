//! Parser for the Textile attribute-annotation mini-language, plus the
//! small string predicates the conversion pipeline runs around it.

mod grammar;
mod lists;
mod model;
mod preprocess;
#[cfg(test)]
mod proptests;
mod urls;

pub use grammar::parse_attributes;
pub use lists::ListKind;
pub use model::{
    AttributeList, AttributeName, ElementContext, HorizontalAlignment, VerticalAlignment,
};
pub use preprocess::{has_unwrapped_text, normalize_newlines};
pub use urls::{has_url_scheme, is_relative_url};
