//! Snippet View
//!
//! Assembles the editor and export renderings: window container, chrome
//! decoration, and the highlighted `<pre>` block with the composed class
//! string and color styles.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::highlight::HighlightEngine;
use crate::render::chrome::render_chrome;
use crate::snippet::SnippetState;

/// Accepted CSS color shapes: hex, color functions, or a bare keyword.
/// Anything else is dropped before reaching the `style` attribute.
static CSS_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:#[0-9a-fA-F]{3,8}|(?:rgb|rgba|hsl|hsla)\([0-9,.%\s/]*\)|[a-zA-Z]+)$")
        .expect("valid color pattern")
});

/// Renders one snippet instance to HTML
///
/// Holds the engine reference only to reach the catalog: the view never
/// re-highlights, it composes what `format_code` already derived.
pub struct SnippetView<'a> {
    engine: &'a HighlightEngine,
    extra_class: Option<String>,
}

impl<'a> SnippetView<'a> {
    pub fn new(engine: &'a HighlightEngine) -> Self {
        Self {
            engine,
            extra_class: None,
        }
    }

    /// Append an externally supplied class to the `<pre>` class string
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.extra_class = Some(class.into());
        self
    }

    /// Editor rendering: raw-text editing surface or decorated preview,
    /// depending on `is_preview`
    pub fn render_editor(&self, state: &SnippetState) -> String {
        if state.is_preview {
            self.render_block(state, false)
        } else {
            format!(
                "<textarea class=\"plain-text\" style=\"font-family:monospace\" \
                 aria-label=\"HTML\" placeholder=\"Write HTML\u{2026}\">{}</textarea>",
                escape_html(&state.content)
            )
        }
    }

    /// Export rendering: the static published markup, independent of the
    /// editing mode
    pub fn render_export(&self, state: &SnippetState) -> String {
        self.render_block(state, true)
    }

    /// Class string for the `<pre>` block
    ///
    /// `language-{id}`, then the external class if any, then
    /// `line-numbers` when the flag is set.
    pub fn class_string(&self, state: &SnippetState) -> String {
        let mut classes = format!("language-{}", state.code_language);

        if let Some(extra) = &self.extra_class {
            classes.push(' ');
            classes.push_str(extra);
        }

        if state.line_numbers {
            classes.push_str(" line-numbers");
        }

        classes
    }

    fn render_block(&self, state: &SnippetState, export: bool) -> String {
        let mut html = String::new();

        html.push_str("<div class=\"snippet-container\">");
        html.push_str(&format!(
            "<div class=\"window-container--{}\">",
            state.operating_system.name()
        ));

        if let Some(chrome) = render_chrome(state.operating_system) {
            html.push_str(chrome);
        }

        html.push_str(&format!(
            "<pre class=\"{}\"",
            escape_attr(&self.class_string(state))
        ));
        if export {
            // The host reads the raw source back out of this attribute
            html.push_str(&format!(" content=\"{}\"", escape_attr(&state.content)));
        }
        if let Some(style) = self.style_attribute(state) {
            html.push_str(&format!(" style=\"{style}\""));
        }
        html.push('>');
        html.push_str(&self.block_body(state));
        html.push_str("</pre>");

        html.push_str("</div></div>");
        html
    }

    /// Body of the `<pre>` block
    ///
    /// The derived HTML is trusted only when the language resolved through
    /// the catalog; the fail-open passthrough text is escaped so it never
    /// lands in markup verbatim.
    fn block_body(&self, state: &SnippetState) -> String {
        if self.engine.catalog().resolve(&state.code_language).is_some() {
            state.formatted_content.clone()
        } else {
            escape_html(&state.formatted_content)
        }
    }

    fn style_attribute(&self, state: &SnippetState) -> Option<String> {
        let mut rules = Vec::new();

        if let Some(color) = checked_color(state.code_background_color.as_deref()) {
            rules.push(format!("background-color:{color}"));
        }
        if let Some(color) = checked_color(state.code_font_color.as_deref()) {
            rules.push(format!("color:{color}"));
        }

        if rules.is_empty() {
            None
        } else {
            Some(rules.join(";"))
        }
    }
}

/// Validate a user-selected color before interpolating it into a style
/// attribute; invalid values are dropped with a warning.
fn checked_color(value: Option<&str>) -> Option<&str> {
    let value = value?;
    if CSS_COLOR.is_match(value) {
        Some(value)
    } else {
        log::warn!("Dropping invalid CSS color value: {value:?}");
        None
    }
}

/// Escape text content for HTML
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape a double-quoted HTML attribute value
fn escape_attr(s: &str) -> String {
    escape_html(s)
}
