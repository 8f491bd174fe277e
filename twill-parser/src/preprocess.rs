//! Document-level cleanup run before block formatting.
#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid pattern"));

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid pattern"));

// `pre` must come before `p` in the alternation or the match stops at the
// `p` inside `<pre`.
static WRAPPED_BLOCKS: LazyLock<Regex> = LazyLock::new(|| {
    let tags = [
        "pre", "p", "blockquote", "div", "form", "table", "ul", "ol", "dl", "h1", "h2", "h3",
        "h4", "h5", "h6",
    ];
    let alternatives: Vec<String> = tags
        .iter()
        .map(|tag| format!("<{tag}[^>]*?>.*</{tag}>"))
        .collect();
    Regex::new(&format!("(?s){}", alternatives.join("|"))).expect("valid pattern")
});

static SELF_CLOSED_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(?:hr|br)[^>]*?/>").expect("valid pattern"));

/// Normalize the newlines of a whole document before block splitting.
///
/// Trims surrounding whitespace, folds `\r\n` to `\n`, collapses runs of
/// blank lines to a single blank line, and appends a space after a
/// document-final double quote so the closing quote cannot glue itself to
/// whatever the formatter emits next.
#[must_use]
pub fn normalize_newlines(text: &str) -> String {
    let out = text.trim().replace("\r\n", "\n");
    let out = EXCESS_NEWLINES.replace_all(&out, "\n\n");
    let out = BLANK_LINES.replace_all(&out, "\n\n");
    let mut out = out.into_owned();
    if out.ends_with('"') {
        out.push(' ');
    }
    out
}

/// True when `text` still contains content not already wrapped in a
/// block-level element, meaning the block formatter has work left to do.
#[must_use]
pub fn has_unwrapped_text(text: &str) -> bool {
    let stripped = WRAPPED_BLOCKS.replace_all(text.trim(), "");
    let stripped = SELF_CLOSED_BREAKS.replace_all(stripped.trim(), "");
    !stripped.is_empty()
}
