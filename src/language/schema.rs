//! Language Definition Schema
//!
//! Serialization types for language definition TOML files.

use serde::Deserialize;

/// Root language file structure (matches TOML)
///
/// One file may define any number of languages:
///
/// ```toml
/// [[languages]]
/// id = "javascript"
/// label = "JavaScript"
/// syntax = "JavaScript"
/// aliases = ["js"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LanguageFile {
    pub languages: Vec<LanguageEntry>,
}

/// One language entry as written in TOML
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LanguageEntry {
    /// Stable identifier, also the value stored in snippet state
    pub id: String,
    /// Human-readable label for selector UIs
    pub label: String,
    /// Grammar token handed to the highlighter (name or file extension)
    pub syntax: Option<String>,
    /// Alternate identifiers resolving to this language
    pub aliases: Option<Vec<String>>,
}

/// Runtime language definition (normalized for lookups)
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageDef {
    pub id: String,
    pub label: String,
    pub syntax: String,
    pub aliases: Vec<String>,
}

impl From<LanguageEntry> for LanguageDef {
    fn from(entry: LanguageEntry) -> Self {
        // The grammar token defaults to the id itself, which works for
        // most languages the highlighter knows by name.
        let syntax = entry.syntax.unwrap_or_else(|| entry.id.clone());

        Self {
            id: entry.id.to_lowercase(),
            label: entry.label,
            syntax,
            aliases: entry
                .aliases
                .unwrap_or_default()
                .into_iter()
                .map(|a| a.to_lowercase())
                .collect(),
        }
    }
}

impl LanguageDef {
    /// Check if this definition matches an identifier (including aliases)
    pub fn matches_id(&self, id: &str) -> bool {
        if self.id.eq_ignore_ascii_case(id) {
            return true;
        }

        self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(id))
    }
}
