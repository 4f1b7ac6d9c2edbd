//! tspeg: typed-module generation for PEG parser compilers.
//!
//! Two stages run in sequence per compilation request:
//!
//! - [`TypeExtractor`] infers a static TypeScript type for every grammar
//!   rule and renders one exported type alias per rule.
//! - [`splice`] wraps the host compiler's untyped generated parser in a
//!   statically typed module exposing a typed `parse` entry point, the
//!   configured error type, and the inferred aliases.
//!
//! Both stages are pure functions of their inputs; nothing is cached across
//! requests, so independent requests can run concurrently without
//! coordination.
//!
//! # Example
//!
//! ```
//! use tspeg_core::grammar::Grammar;
//! use tspeg_core::source::SourceTree;
//! use tspeg_lib::{TspegOptions, TypeExtractor, splice};
//!
//! let grammar = Grammar::from_json(
//!     r#"{"rules": [{"name": "digit", "expression": {"type": "class"}}]}"#,
//! )
//! .unwrap();
//! let options = TspegOptions::default();
//!
//! let extractor = TypeExtractor::new(&grammar, options.camel_case_type_names);
//! let extraction = extractor
//!     .extract(None, &options.return_types)
//!     .expect("extraction failed");
//!
//! let code = SourceTree::from_source("(function() { /* generated */ })()");
//! let module = splice(&grammar, Some(code), Some(&extraction), &options)
//!     .expect("splicing failed");
//! assert!(module.to_string().contains("export type Digit = string;"));
//! ```

pub mod infer;
pub mod options;
pub mod splice;

pub use infer::{Extraction, TypeExtractor};
pub use options::{DEFAULT_ERROR_NAME, TspegOptions};
pub use splice::splice;

/// Errors that abort the current compilation request.
///
/// Both kinds are unrecoverable for the request: generation is a pure
/// function of its inputs, so retrying without changing them never succeeds,
/// and no partial output is produced.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The request's configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The host compiler handed over no generated parser source. This is an
    /// integration invariant violation, not a user input error.
    #[error("the host compiler produced no generated parser source to wrap")]
    MissingImplementation,
}

/// Invalid configuration for a compilation request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// An allowed start rule does not exist in the grammar.
    #[error("allowed start rule {0:?} is not defined in the grammar")]
    UnknownStartRule(String),

    /// A per-rule type override targets a rule that does not exist.
    #[error("type override targets unknown rule {0:?}")]
    UnknownTypeOverride(String),

    /// The configured error-type name is not a legal identifier.
    #[error("{0:?} is not a valid TypeScript identifier")]
    InvalidErrorName(String),

    /// The grammar has no rules and no start rule was configured.
    #[error("could not determine the default start rule")]
    NoDefaultStartRule,
}

/// Result type for generation stages.
pub type Result<T> = std::result::Result<T, Error>;
