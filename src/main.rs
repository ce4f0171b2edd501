use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use syntect::parsing::SyntaxSet;

use snippet_block::config::{Args, Config};
use snippet_block::{ChromeStyle, HighlightEngine, SnippetState, SnippetView};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let engine = HighlightEngine::new(config.build_catalog(), SyntaxSet::load_defaults_newlines());

    if args.list_languages {
        for def in engine.catalog().definitions() {
            println!("{:<12} {}", def.id, def.label);
        }
        return Ok(());
    }

    let mut state = load_state(&args)?;

    if let Some(language) = &args.language {
        state.code_language = language.clone();
    }
    if let Some(chrome) = &args.chrome {
        state.set_chrome(ChromeStyle::from_name(chrome));
    }
    if let Some(color) = &args.background {
        state.set_background_color(Some(color.clone()));
    }
    if let Some(color) = &args.foreground {
        state.set_font_color(Some(color.clone()));
    }
    if args.line_numbers {
        state.set_line_numbers(true);
    }

    state.format_code(&engine);

    let view = SnippetView::new(&engine);
    let html = if args.editor {
        view.render_editor(&state)
    } else {
        view.render_export(&state)
    };
    println!("{html}");

    Ok(())
}

/// Build the initial snippet state from a persisted document, a source
/// file, or stdin
fn load_state(args: &Args) -> Result<SnippetState> {
    if let Some(path) = &args.state {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snippet document: {}", path.display()))?;
        return serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse snippet document: {}", path.display()));
    }

    let content = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read snippet source: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read snippet source from stdin")?;
            buf
        }
    };

    let mut state = SnippetState::new();
    state.content = content;
    Ok(state)
}
