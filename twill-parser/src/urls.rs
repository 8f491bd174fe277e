use url::{ParseError, Url};

/// True when `url` names neither a scheme nor an authority, so a base
/// document location is needed to resolve it.
///
/// Protocol-relative references (`//host/path`) carry an authority and are
/// not relative in this sense.
#[must_use]
pub fn is_relative_url(url: &str) -> bool {
    matches!(Url::parse(url), Err(ParseError::RelativeUrlWithoutBase)) && !url.starts_with("//")
}

/// True when `url` starts with a scheme (`https:`, `mailto:`, ...), even
/// if the remainder fails to parse as a well-formed URL.
#[must_use]
pub fn has_url_scheme(url: &str) -> bool {
    !matches!(Url::parse(url), Err(ParseError::RelativeUrlWithoutBase))
}
