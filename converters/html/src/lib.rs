//! HTML serialization layer for Textile conversion.
//!
//! This crate turns parsed attribute annotations into markup text:
//!
//! - [`render_attributes`] serializes an ordered attribute list into the
//!   inline ` key="value"` form block formatters splice after a tag name
//! - [`generate_tag`] and [`write_tag`] build complete HTML fragments with
//!   escaped attribute values and verbatim content
//! - [`escape`] holds the character escaping and the numeric
//!   character-reference codec
//!
//! Content handed to the tag builder is emitted verbatim. Earlier pipeline
//! stages may already have produced resolved inline HTML, and re-escaping
//! it here would corrupt that work; only attribute values are escaped.

pub mod escape;
mod tag;

pub use tag::{generate_tag, render_attributes, write_tag};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
