mod attributes;
mod patterns;

pub use attributes::parse_attributes;
