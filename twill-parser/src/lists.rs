use serde::{Deserialize, Serialize};

/// The flavour of list a marker string requests.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// `*` markers.
    Unordered,
    /// `#` markers.
    Ordered,
    /// Anything else, rendered as a definition list.
    Definition,
}

impl ListKind {
    /// Classify a list-marker string by its leading character.
    #[must_use]
    pub fn from_marker(marker: &str) -> Self {
        if marker.starts_with('*') {
            ListKind::Unordered
        } else if marker.starts_with('#') {
            ListKind::Ordered
        } else {
            ListKind::Definition
        }
    }

    /// The HTML element housing a list of this kind.
    #[must_use]
    pub fn element_name(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
            ListKind::Definition => "dl",
        }
    }
}
