//! Language Catalog
//!
//! Data-driven language definitions: TOML files mapping a language
//! identifier to a display label and a highlighter grammar token.

pub mod registry;
pub mod schema;

pub use registry::LanguageCatalog;
pub use schema::{LanguageDef, LanguageEntry, LanguageFile};
