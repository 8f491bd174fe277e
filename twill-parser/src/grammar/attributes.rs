//! The attribute-annotation grammar.
//!
//! Authors decorate markup with a compact annotation syntax: `{color:red}`
//! style declarations, `(note#intro)` class and id, `[en]` a language tag,
//! span digits and alignment glyphs on table geometry, and runs of
//! parentheses for padding. This module extracts those tokens into an
//! ordered [`AttributeList`].

use regex::Regex;
use tracing::instrument;

use super::patterns;
use crate::model::{AttributeList, ElementContext, HorizontalAlignment, VerticalAlignment};

/// Parse a compact attribute annotation into an ordered [`AttributeList`].
///
/// `context` gates the table-geometry token classes: span digits are
/// honoured on cells, vertical alignment on cells and rows, and span/width
/// digits on column definitions. `include_id` controls whether a `#id`
/// suffix inside a class token may produce an `id` attribute.
///
/// Malformed or unrecognized tokens never fail the parse; they contribute
/// nothing. Attributes come out in the canonical `style, class, id, lang,
/// colspan, rowspan, span, width` order no matter where their tokens sat
/// in the annotation.
#[must_use]
#[allow(clippy::too_many_lines)]
#[instrument(level = "trace")]
pub fn parse_attributes(raw: &str, context: ElementContext, include_id: bool) -> AttributeList {
    let mut result = AttributeList::default();
    if raw.is_empty() {
        return result;
    }

    let mut style: Vec<String> = Vec::new();

    // Span digits and alignment glyphs are looked up in the annotation as
    // written. Their matches are not erased, so later token classes can
    // see the same characters again.
    let mut colspan = None;
    let mut rowspan = None;
    if context == ElementContext::TableCell {
        colspan = first_group(&patterns::COLUMN_SPAN, raw);
        rowspan = first_group(&patterns::ROW_SPAN, raw);
    }

    if matches!(context, ElementContext::TableCell | ElementContext::TableRow)
        && let Some(m) = patterns::VERTICAL_ALIGNMENT.find(raw)
        && let Some(alignment) = VerticalAlignment::from_token(m.as_str())
    {
        style.push(format!("vertical-align:{}", alignment.css_value()));
    }

    // Delimited tokens are erased as they match. Erasure removes every
    // copy of the matched text, so a repeated identical token is consumed
    // together with the first.
    let mut remaining = raw.to_string();

    if let Some((matched, declarations)) = first_match(&patterns::STYLE_SPAN, &remaining) {
        for declaration in declarations.trim_end_matches(';').split(';') {
            let declaration = declaration.trim();
            if !declaration.is_empty() {
                style.push(declaration.to_string());
            }
        }
        remaining = remaining.replace(&matched, "");
    }

    let mut language = String::new();
    if let Some((matched, tag)) = first_match(&patterns::LANGUAGE_SPAN, &remaining) {
        language = tag;
        remaining = remaining.replace(&matched, "");
    }

    let mut class = String::new();
    if let Some((matched, token)) = first_match(&patterns::CLASS_SPAN, &remaining) {
        class = token;
        remaining = remaining.replace(&matched, "");
    }

    if let Some(m) = patterns::LEFT_PADDING.find(&remaining) {
        style.push(format!("padding-left:{}em", m.len()));
        let matched = m.as_str().to_string();
        remaining = remaining.replace(&matched, "");
    }

    if let Some(m) = patterns::RIGHT_PADDING.find(&remaining) {
        style.push(format!("padding-right:{}em", m.len()));
        let matched = m.as_str().to_string();
        remaining = remaining.replace(&matched, "");
    }

    if let Some(m) = patterns::HORIZONTAL_ALIGNMENT.find(&remaining)
        && let Some(alignment) = HorizontalAlignment::from_token(m.as_str())
    {
        style.push(format!("text-align:{}", alignment.css_value()));
    }

    // A `#` inside the class token splits it into class and id at the
    // first occurrence. The id is computed even when `include_id` is off,
    // so the class never keeps a stray suffix.
    let (class, id) = match class.split_once('#') {
        Some((prefix, suffix)) => (prefix.to_string(), suffix.to_string()),
        None => (class, String::new()),
    };

    let mut span = None;
    let mut width = None;
    if context == ElementContext::TableColumn
        && let Some(caps) = patterns::COLUMN_GEOMETRY.captures(&remaining)
    {
        span = caps.get(1).map(|m| m.as_str().to_string());
        width = caps.get(2).map(|m| m.as_str().to_string());
    }

    if !style.is_empty() {
        result.insert("style".to_string(), format!("{};", style.join("; ")));
    }
    if !class.is_empty() {
        result.insert("class".to_string(), class);
    }
    if include_id && !id.is_empty() {
        result.insert("id".to_string(), id);
    }
    if !language.is_empty() {
        result.insert("lang".to_string(), language);
    }
    if let Some(value) = colspan {
        result.insert("colspan".to_string(), value.to_string());
    }
    if let Some(value) = rowspan {
        result.insert("rowspan".to_string(), value.to_string());
    }
    if let Some(value) = span {
        result.insert("span".to_string(), value);
    }
    if let Some(value) = width {
        result.insert("width".to_string(), value);
    }

    tracing::trace!(?result, "parsed annotation");
    result
}

fn first_group<'h>(re: &Regex, haystack: &'h str) -> Option<&'h str> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// First match as owned (full text, first group) so the haystack can be
// rewritten afterwards.
fn first_match(re: &Regex, haystack: &str) -> Option<(String, String)> {
    let caps = re.captures(haystack)?;
    let full = caps.get(0)?.as_str().to_string();
    let group = caps.get(1)?.as_str().to_string();
    Some((full, group))
}
