//! Core data structures for tspeg.
//!
//! Three pieces, all free of generation logic:
//! - [`grammar`]: the PEG grammar model and its JSON deserialization layer
//! - [`source`]: the owned tree of text nodes modeling the host compiler's
//!   generated parser source
//! - [`ident`]: naming helpers shared by the extractor and the splicer

pub mod grammar;
pub mod ident;
pub mod source;
