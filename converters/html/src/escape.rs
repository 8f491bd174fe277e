//! HTML character escaping and numeric reference handling.
//!
//! This module provides the escaping applied to double-quoted attribute
//! values, together with the numeric character-reference codec the inline
//! formatter uses for glyphs outside ASCII.

use std::borrow::Cow;

/// Escape modes for the two places escaped text ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Escape `&`, `<` and `>` only.
    /// For text that ends up between tags.
    #[default]
    Content,

    /// Additionally escape `'` and `"`.
    /// For text placed inside double-quoted attribute values.
    Attribute,
}

/// Escape text for safe inclusion in HTML output.
///
/// Replacements happen in one pass over the input, which is equivalent to
/// replacing `&` first: an ampersand introduced by one replacement is
/// never re-escaped by a later one.
#[must_use]
pub fn escape_html(text: &str, mode: EscapeMode) -> Cow<'_, str> {
    // Fast path: check if any escaping is needed
    if !needs_escaping(text, mode) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + text.len() / 4);

    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\'' if mode == EscapeMode::Attribute => result.push_str("&#39;"),
            '"' if mode == EscapeMode::Attribute => result.push_str("&#34;"),
            _ => result.push(ch),
        }
    }

    Cow::Owned(result)
}

/// Check if text needs any escaping.
fn needs_escaping(text: &str, mode: EscapeMode) -> bool {
    text.chars().any(|ch| match ch {
        '&' | '<' | '>' => true,
        '\'' | '"' => mode == EscapeMode::Attribute,
        _ => false,
    })
}

/// The Unicode code point of a character, for building a numeric character
/// reference.
#[must_use]
pub fn codepoint(ch: char) -> u32 {
    u32::from(ch)
}

/// Resolve the decimal character reference (`&#NNN;`) built from `digits`.
///
/// Zero, surrogate and out-of-range code points resolve to U+FFFD
/// REPLACEMENT CHARACTER. Input that is not a run of decimal digits cannot
/// be resolved; the constructed reference text comes back unchanged so the
/// caller can emit it verbatim.
#[must_use]
pub fn decode_numeric_reference(digits: &str) -> String {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        tracing::trace!(digits, "not a decimal reference, keeping it verbatim");
        return format!("&#{digits};");
    }

    let ch = match digits.parse::<u32>() {
        // NUL never resolves, and a parse overflow means the number is
        // larger than any code point.
        Ok(0) | Err(_) => '\u{FFFD}',
        // `from_u32` rejects surrogates and values beyond U+10FFFF.
        Ok(value) => char::from_u32(value).unwrap_or('\u{FFFD}'),
    };
    ch.to_string()
}
