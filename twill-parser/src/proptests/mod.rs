//! Property-based tests for the annotation grammar
//!
//! These tests verify invariants that should hold for ANY input, not just
//! specific fixtures. They complement the example-based tests by finding
//! edge cases and ensuring the grammar is robust against unexpected inputs.

mod generators;
mod invariants;
