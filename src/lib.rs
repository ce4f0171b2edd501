//! Snippet Block
//!
//! Syntax-highlighted code snippet blocks with terminal window chrome.
//!
//! This library provides:
//! - A typed attribute record for one snippet instance, with the
//!   host-compatible serialization schema
//! - A fail-open highlighting pipeline over an injected language catalog
//! - HTML assembly for the editor and export renderings
//! - Configuration management for the `snippet-render` binary

pub mod config;
pub mod highlight;
pub mod language;
pub mod render;
pub mod snippet;

// Re-exports for clean public API
pub use config::Config;
pub use highlight::HighlightEngine;
pub use language::{LanguageCatalog, LanguageDef};
pub use render::{render_chrome, ChromeStyle, SnippetView};
pub use snippet::{SnippetError, SnippetState};
