//! Snippet State
//!
//! The attribute record for one embedded snippet instance and its mode
//! transitions. The serialized field names are the host document model's
//! attribute schema; hosts may omit any field and get the default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::highlight::HighlightEngine;
use crate::render::ChromeStyle;

/// Errors from snippet state transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnippetError {
    /// Content edits are only valid in the raw view; callers must switch
    /// back with [`SnippetState::switch_to_html`] first.
    #[error("content edits are only valid in the raw HTML view")]
    EditWhilePreviewing,
}

/// Attribute record for one snippet instance
///
/// `formatted_content` is derived from `(content, code_language)` by
/// [`format_code`](Self::format_code) and by nothing else. Editing the
/// content does not refresh it; the derived HTML is stale until the next
/// explicit format action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnippetState {
    /// Raw, unhighlighted source text
    pub content: String,
    /// Derived HTML, written only by `format_code`
    pub formatted_content: String,
    /// Language identifier resolved through the catalog
    pub code_language: String,
    /// Window chrome drawn above the rendered snippet
    pub operating_system: ChromeStyle,
    /// Optional CSS background color for the code block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_background_color: Option<String>,
    /// Optional CSS foreground color for the code block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_font_color: Option<String>,
    /// Show line numbers in the rendered block
    pub line_numbers: bool,
    /// `false` = raw-text editing, `true` = rendered preview
    pub is_preview: bool,
}

impl Default for SnippetState {
    fn default() -> Self {
        Self {
            content: String::new(),
            formatted_content: String::new(),
            code_language: "javascript".to_string(),
            operating_system: ChromeStyle::MacOs,
            code_background_color: None,
            code_font_color: None,
            line_numbers: false,
            is_preview: false,
        }
    }
}

impl SnippetState {
    /// Fresh snippet with all fields at their defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to the rendered preview; no other field changes
    pub fn switch_to_preview(&mut self) {
        self.is_preview = true;
    }

    /// Switch back to raw-text editing; no other field changes
    pub fn switch_to_html(&mut self) {
        self.is_preview = false;
    }

    /// Recompute `formatted_content` and force the preview
    ///
    /// This is the only path that mutates `formatted_content`.
    pub fn format_code(&mut self, engine: &HighlightEngine) {
        self.formatted_content = engine.highlight(&self.content, &self.code_language);
        self.is_preview = true;
    }

    /// Replace the raw content
    ///
    /// Valid only while in the raw view; editing a rendered preview is
    /// rejected rather than silently desynchronizing the derived HTML.
    pub fn edit_content(&mut self, content: impl Into<String>) -> Result<(), SnippetError> {
        if self.is_preview {
            return Err(SnippetError::EditWhilePreviewing);
        }

        self.content = content.into();
        Ok(())
    }

    /// Change the language and re-run formatting
    ///
    /// A language change always re-highlights; the stale-preview window of
    /// a plain content edit does not apply here.
    pub fn set_language(&mut self, language: impl Into<String>, engine: &HighlightEngine) {
        self.code_language = language.into();
        self.format_code(engine);
    }

    pub fn set_chrome(&mut self, style: ChromeStyle) {
        self.operating_system = style;
    }

    pub fn set_background_color(&mut self, color: Option<String>) {
        self.code_background_color = color;
    }

    pub fn set_font_color(&mut self, color: Option<String>) {
        self.code_font_color = color;
    }

    pub fn set_line_numbers(&mut self, enabled: bool) {
        self.line_numbers = enabled;
    }
}
