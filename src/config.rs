//! Configuration management for the snippet renderer.
//!
//! Handles:
//! - Command-line argument parsing
//! - Language directory configuration

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::language::LanguageCatalog;

/// Command-line arguments for the snippet renderer
#[derive(Debug, Parser)]
#[command(name = "snippet-render")]
#[command(about = "Render syntax-highlighted code snippet blocks to HTML")]
#[command(version)]
pub struct Args {
    /// Snippet source file; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Persisted snippet document (JSON) to load instead of raw text
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Language identifier for highlighting
    #[arg(long, help = "Language identifier (e.g. 'javascript', 'rust')")]
    pub language: Option<String>,

    /// Window chrome drawn above the snippet
    #[arg(long, help = "Window chrome: macos, windows10, none")]
    pub chrome: Option<String>,

    /// Background color for the code block
    #[arg(long, help = "CSS background color for the code block")]
    pub background: Option<String>,

    /// Font color for the code block
    #[arg(long, help = "CSS font color for the code block")]
    pub foreground: Option<String>,

    /// Add line numbering to the rendered block
    #[arg(long)]
    pub line_numbers: bool,

    /// Emit the editor rendering instead of the export markup
    #[arg(long)]
    pub editor: bool,

    /// List known languages and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Custom language directory to search for language TOML files
    #[arg(long, value_name = "DIR", help = "Directory containing language TOML files")]
    pub language_dir: Option<PathBuf>,

    /// Log level for the renderer
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Custom language directories to search
    pub language_dirs: Vec<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: &Args) -> Result<Self> {
        // Determine language directories
        let mut language_dirs = Vec::new();

        // Add user-specified directory if provided
        if let Some(custom_dir) = &args.language_dir {
            language_dirs.push(custom_dir.clone());
        }

        // Add default user config directory
        if let Some(config_dir) = dirs::config_dir() {
            language_dirs.push(config_dir.join("snippet-render").join("languages"));
        }

        Ok(Config {
            language_dirs,
            log_level: args.log_level.clone(),
        })
    }

    /// Build the language catalog: built-ins plus every configured
    /// directory, later sources overriding earlier ones
    pub fn build_catalog(&self) -> LanguageCatalog {
        let mut catalog = LanguageCatalog::builtin();
        for dir in &self.language_dirs {
            let loaded = catalog.load_dir(dir);
            if loaded > 0 {
                log::info!("Loaded {loaded} language definition(s) from {}", dir.display());
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_from(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("parse args")
    }

    #[test]
    fn test_defaults() {
        let args = args_from(&["snippet-render"]);
        let config = Config::from_args(&args).expect("create config");

        assert_eq!(config.log_level, "info");
        // Only the user config dir, when the platform provides one
        assert!(config.language_dirs.len() <= 1);
    }

    #[test]
    fn test_custom_language_dir_comes_first() {
        let args = args_from(&["snippet-render", "--language-dir", "/tmp/langs"]);
        let config = Config::from_args(&args).expect("create config");

        assert_eq!(config.language_dirs[0], PathBuf::from("/tmp/langs"));
    }

    #[test]
    fn test_render_options_parse() {
        let args = args_from(&[
            "snippet-render",
            "snippet.js",
            "--language",
            "javascript",
            "--chrome",
            "windows10",
            "--line-numbers",
        ]);

        assert_eq!(args.file, Some(PathBuf::from("snippet.js")));
        assert_eq!(args.language.as_deref(), Some("javascript"));
        assert_eq!(args.chrome.as_deref(), Some("windows10"));
        assert!(args.line_numbers);
        assert!(!args.editor);
    }
}
