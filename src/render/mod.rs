//! HTML Rendering
//!
//! Window chrome decorations and the snippet view assembly.

pub mod chrome;
pub mod view;

pub use chrome::{render_chrome, ChromeStyle};
pub use view::SnippetView;
