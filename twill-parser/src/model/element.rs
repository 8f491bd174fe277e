//! Element-context and alignment types for attribute annotations.

use serde::{Deserialize, Serialize};

/// Which structural position an annotation decorates.
///
/// The context gates which token classes the grammar honours: cell spans
/// only make sense on table cells, width digits only on column
/// definitions, and so on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementContext {
    /// Any block or inline element without table geometry.
    #[default]
    Generic,
    /// A `td`/`th` cell: column/row spans and vertical alignment apply.
    TableCell,
    /// A `tr` row: vertical alignment applies.
    TableRow,
    /// A `col` definition: span and width digits apply.
    TableColumn,
}

/// Horizontal alignment requested by an annotation glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl HorizontalAlignment {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "<" => Some(HorizontalAlignment::Left),
            "=" => Some(HorizontalAlignment::Center),
            ">" => Some(HorizontalAlignment::Right),
            "<>" => Some(HorizontalAlignment::Justify),
            _ => None,
        }
    }

    /// The CSS `text-align` value for this alignment.
    #[must_use]
    pub fn css_value(self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::Justify => "justify",
        }
    }
}

/// Vertical alignment requested by an annotation glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAlignment {
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "^" => Some(VerticalAlignment::Top),
            "-" => Some(VerticalAlignment::Middle),
            "~" => Some(VerticalAlignment::Bottom),
            _ => None,
        }
    }

    /// The CSS `vertical-align` value for this alignment.
    #[must_use]
    pub fn css_value(self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Middle => "middle",
            VerticalAlignment::Bottom => "bottom",
        }
    }
}
