//! Highlighting Pipeline
//!
//! Thin wrapper over the syntect tokenizer: raw text plus a language
//! identifier in, one HTML string of classed spans out. Lookups fail open;
//! an unknown language degrades to the unmodified input text.

pub mod engine;

pub use engine::HighlightEngine;
