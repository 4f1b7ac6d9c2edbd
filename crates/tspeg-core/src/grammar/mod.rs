//! Grammar types for PEG grammars.
//!
//! The host compiler hands over its parsed grammar as a `type`-tagged JSON
//! AST. This module deserializes that dump into a compact expression tree,
//! erasing host-only decoration (source locations, action code bodies) that
//! type extraction never looks at.

mod json;
mod types;

#[cfg(test)]
mod types_tests;

pub use json::GrammarError;
pub use types::{Expression, Grammar, PredicateKind, Rule};
