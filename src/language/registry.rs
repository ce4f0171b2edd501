//! Language Catalog
//!
//! In-memory registry of language definitions, shared read-only by the
//! selector UI and the highlighting pipeline.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::schema::{LanguageDef, LanguageFile};

/// Read-only catalog of known languages, keyed by lowercase identifier
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    languages: HashMap<String, LanguageDef>,
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageCatalog {
    pub fn new() -> Self {
        Self {
            languages: HashMap::new(),
        }
    }

    /// Catalog with the embedded built-in language set
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.add_embedded_languages();
        catalog
    }

    /// Add a definition to the catalog, replacing any previous definition
    /// with the same id
    pub fn insert(&mut self, def: LanguageDef) {
        self.languages.insert(def.id.clone(), def);
    }

    /// Resolve an identifier or alias to its definition (case-insensitive)
    ///
    /// Returns `None` for unknown identifiers; callers are expected to
    /// degrade to plain text rather than fail.
    pub fn resolve(&self, id: &str) -> Option<&LanguageDef> {
        let key = id.to_lowercase();
        if let Some(def) = self.languages.get(&key) {
            return Some(def);
        }

        self.languages.values().find(|def| def.matches_id(&key))
    }

    /// Display label for an identifier, if known
    pub fn label(&self, id: &str) -> Option<&str> {
        self.resolve(id).map(|def| def.label.as_str())
    }

    /// All definitions, sorted by identifier (for selector UIs)
    pub fn definitions(&self) -> Vec<&LanguageDef> {
        let mut defs: Vec<&LanguageDef> = self.languages.values().collect();
        defs.sort_by(|a, b| a.id.cmp(&b.id));
        defs
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Load every definition from one TOML file
    ///
    /// Returns the number of languages added. Entries override existing
    /// definitions with the same id, so user files take precedence when
    /// loaded after the built-ins.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read language file: {}", path.display()))?;

        let file: LanguageFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse language TOML: {}", path.display()))?;

        let count = file.languages.len();
        for entry in file.languages {
            self.insert(LanguageDef::from(entry));
        }

        Ok(count)
    }

    /// Load all `*.toml` files from a directory
    ///
    /// A file that fails to read or parse is skipped with a warning; one
    /// bad user file must not poison the catalog. Missing directories are
    /// silently ignored. Returns the number of languages added.
    pub fn load_dir(&mut self, dir: &Path) -> usize {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return 0,
        };

        let mut loaded = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }

            match self.load_file(&path) {
                Ok(count) => loaded += count,
                Err(e) => {
                    log::warn!("Skipping language file {}: {e:#}", path.display());
                }
            }
        }

        loaded
    }

    /// Add the embedded built-in language set
    fn add_embedded_languages(&mut self) {
        let embedded_toml = include_str!("../../resources/languages/builtin.languages.toml");

        match toml::from_str::<LanguageFile>(embedded_toml) {
            Ok(file) => {
                for entry in file.languages {
                    self.insert(LanguageDef::from(entry));
                }
            }
            Err(e) => {
                // Fallback to a minimal set if the embedded TOML is broken
                log::warn!("Failed to parse embedded language catalog: {e}. Using minimal fallback.");
                self.add_minimal_languages();
            }
        }
    }

    /// Minimal fallback set in case embedded TOML parsing fails
    fn add_minimal_languages(&mut self) {
        for (id, label) in [
            ("javascript", "JavaScript"),
            ("html", "HTML"),
            ("css", "CSS"),
        ] {
            self.insert(LanguageDef {
                id: id.to_string(),
                label: label.to_string(),
                syntax: label.to_string(),
                aliases: Vec::new(),
            });
        }
    }
}
