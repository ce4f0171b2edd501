//! Highlight Engine
//!
//! Resolves a language identifier through the injected catalog, tokenizes
//! the snippet with syntect, and emits class-annotated HTML.

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::language::LanguageCatalog;

/// Highlighter with an injected language catalog and grammar set
///
/// Immutable after construction; one engine can serve any number of
/// snippet instances.
#[derive(Debug)]
pub struct HighlightEngine {
    catalog: LanguageCatalog,
    syntax_set: SyntaxSet,
}

impl HighlightEngine {
    /// Engine over an explicit catalog and grammar set
    pub fn new(catalog: LanguageCatalog, syntax_set: SyntaxSet) -> Self {
        Self {
            catalog,
            syntax_set,
        }
    }

    /// Engine over the embedded catalog and the default grammar set
    pub fn with_defaults() -> Self {
        Self::new(LanguageCatalog::builtin(), SyntaxSet::load_defaults_newlines())
    }

    /// The catalog this engine resolves identifiers against
    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    /// Highlight `content` as `language`, returning one HTML string
    ///
    /// Recognized tokens are wrapped in classed `<span>`s and all text is
    /// HTML-escaped. If the language or its grammar cannot be resolved the
    /// input is returned unchanged; this never returns an error and never
    /// panics. Empty content yields an empty string.
    pub fn highlight(&self, content: &str, language: &str) -> String {
        let Some(def) = self.catalog.resolve(language) else {
            log::warn!("Unknown language '{language}', leaving snippet unhighlighted");
            return content.to_string();
        };

        let Some(syntax) = self.syntax_set.find_syntax_by_token(&def.syntax) else {
            log::warn!(
                "No grammar named '{}' for language '{}', leaving snippet unhighlighted",
                def.syntax,
                def.id
            );
            return content.to_string();
        };

        match self.generate_html(content, syntax) {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Highlighting failed for language '{}': {e}", def.id);
                content.to_string()
            }
        }
    }

    fn generate_html(
        &self,
        content: &str,
        syntax: &SyntaxReference,
    ) -> Result<String, syntect::Error> {
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, ClassStyle::Spaced);

        for line in LinesWithEndings::from(content) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(generator.finalize())
    }
}
