//! Compiled token patterns for the annotation mini-language.
//!
//! Each pattern is compiled once on first use and shared by every parse
//! call; the cells are thread-safe.
#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// `\N`: column-span digits on a table cell.
pub(crate) static COLUMN_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(\d+)").expect("valid pattern"));

/// `/N`: row-span digits on a table cell.
pub(crate) static ROW_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)").expect("valid pattern"));

/// One vertical-alignment glyph.
pub(crate) static VERTICAL_ALIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-^~]").expect("valid pattern"));

/// A `{...}` span of style declarations; interior free of `}`.
pub(crate) static STYLE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]*)\}").expect("valid pattern"));

/// A `[...]` language tag; interior non-empty and free of `]`.
pub(crate) static LANGUAGE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("valid pattern"));

/// A `(...)` class token (optionally `class#id`); no nested parentheses.
pub(crate) static CLASS_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]+)\)").expect("valid pattern"));

/// A run of literal `(` characters requesting left padding.
pub(crate) static LEFT_PADDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(]+").expect("valid pattern"));

/// A run of literal `)` characters requesting right padding.
pub(crate) static RIGHT_PADDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[)]+").expect("valid pattern"));

/// One horizontal-alignment token. `<>` comes first in the alternation so
/// the justify pair beats its halves at the same position.
pub(crate) static HORIZONTAL_ALIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<>|<|>|=").expect("valid pattern"));

/// Optional `\N` span digits, whitespace, optional width digits; anchored
/// at the start of what is left of a column-definition annotation.
pub(crate) static COLUMN_GEOMETRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\\(\d+))?\s*(\d+)?").expect("valid pattern"));
