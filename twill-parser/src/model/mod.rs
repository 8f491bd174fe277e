//! The data models for parsed attribute annotations.

mod attributes;
mod element;

pub use attributes::*;
pub use element::*;
