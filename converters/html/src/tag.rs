//! Minimal HTML tag serialization.

use std::fmt::Write as _;
use std::io::Write;

use tracing::instrument;
use twill_parser::AttributeList;

use crate::Error;
use crate::escape::{EscapeMode, escape_html};

/// Render an attribute list as inline `key="value"` pairs.
///
/// The result carries one leading space when the list is non-empty, so it
/// can be spliced directly after a tag name; an empty list renders as the
/// empty string. Values are spliced in verbatim, without escaping.
#[must_use]
pub fn render_attributes(attributes: &AttributeList) -> String {
    let mut out = String::new();
    for (name, value) in attributes.iter() {
        let _ = write!(out, " {name}=\"{value}\"");
    }
    out
}

/// Build a complete HTML fragment from a tag name, verbatim content, and
/// an attribute list.
///
/// Attribute values go through attribute-mode escaping. `content` is
/// emitted byte for byte: by the time it reaches this function it may
/// already contain resolved inline HTML, and re-escaping would corrupt
/// that work. The caller keeps `tag` and attribute names free of
/// characters needing escape, and void elements are not produced here.
#[must_use]
#[instrument(level = "trace", skip(content))]
pub fn generate_tag(tag: &str, content: &str, attributes: &AttributeList) -> String {
    let mut out = String::with_capacity(2 * tag.len() + content.len() + 16);
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes.iter() {
        let _ = write!(
            out,
            " {name}=\"{}\"",
            escape_html(value, EscapeMode::Attribute)
        );
    }
    out.push('>');
    out.push_str(content);
    let _ = write!(out, "</{tag}>");
    out
}

/// Stream [`generate_tag`] output into a writer.
///
/// # Errors
///
/// Returns an error when the writer fails.
pub fn write_tag<W: Write + ?Sized>(
    w: &mut W,
    tag: &str,
    content: &str,
    attributes: &AttributeList,
) -> Result<(), Error> {
    w.write_all(generate_tag(tag, content, attributes).as_bytes())?;
    Ok(())
}
