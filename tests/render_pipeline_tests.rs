//! End-to-end tests for the snippet rendering pipeline
use snippet_block::{ChromeStyle, HighlightEngine, SnippetError, SnippetState, SnippetView};

#[test]
fn test_format_markup_snippet_end_to_end() {
    let engine = HighlightEngine::with_defaults();
    let mut state = SnippetState::new();
    state.edit_content("<b>hi</b>").expect("edit in raw view");
    state.code_language = "html".to_string();
    assert!(!state.is_preview);

    state.format_code(&engine);

    assert!(state.is_preview);
    // Token classes are highlighter-defined; the literal text must appear
    // escaped, never as live markup
    assert!(state.formatted_content.contains("hi"));
    assert!(state.formatted_content.contains("&lt;"));
    assert!(state.formatted_content.contains("<span"));
    assert!(!state.formatted_content.contains("<b>"));
}

#[test]
fn test_editing_requires_raw_mode() {
    let engine = HighlightEngine::with_defaults();
    let mut state = SnippetState::new();
    state.edit_content("let a = 1;").expect("edit in raw view");
    state.format_code(&engine);

    assert_eq!(
        state.edit_content("let a = 2;"),
        Err(SnippetError::EditWhilePreviewing)
    );

    state.switch_to_html();
    state.edit_content("let a = 2;").expect("edit after switching back");
    assert_eq!(state.content, "let a = 2;");
}

#[test]
fn test_unknown_language_renders_plain_block() {
    let engine = HighlightEngine::with_defaults();
    let mut state = SnippetState::new();
    state.edit_content("print 'hello'").expect("edit in raw view");
    state.code_language = "unknown-lang-xyz".to_string();

    state.format_code(&engine);

    // Fail open: the derived HTML is the input unchanged
    assert_eq!(state.formatted_content, "print 'hello'");

    let view = SnippetView::new(&engine);
    let html = view.render_export(&state);
    assert!(html.contains("language-unknown-lang-xyz"));
    assert!(html.contains("print 'hello'"));
}

#[test]
fn test_export_rendering_composition() {
    let engine = HighlightEngine::with_defaults();
    let view = SnippetView::new(&engine).with_class("wp-block-code");

    let mut state = SnippetState::new();
    state.edit_content("body { color: red; }").expect("edit in raw view");
    state.set_language("css", &engine);
    state.set_chrome(ChromeStyle::Windows10);
    state.set_background_color(Some("#1e1e1e".to_string()));
    state.set_line_numbers(true);

    let html = view.render_export(&state);

    assert!(html.contains("<div class=\"snippet-container\">"));
    assert!(html.contains("window-container--windows10"));
    assert!(html.contains("window-titlebar--windows10"));
    assert!(html.contains("Command Prompt"));
    assert!(html.contains("class=\"language-css wp-block-code line-numbers\""));
    assert!(html.contains("background-color:#1e1e1e"));
    assert!(html.contains(" content=\"body { color: red; }\""));
}

#[test]
fn test_editor_rendering_tracks_preview_flag() {
    let engine = HighlightEngine::with_defaults();
    let view = SnippetView::new(&engine);

    let mut state = SnippetState::new();
    state.edit_content("const x = 1;").expect("edit in raw view");

    let raw = view.render_editor(&state);
    assert!(raw.starts_with("<textarea"));
    assert!(raw.contains("const x = 1;"));

    state.format_code(&engine);
    let preview = view.render_editor(&state);
    assert!(preview.starts_with("<div class=\"snippet-container\">"));
    assert!(preview.contains("<span"));

    state.switch_to_html();
    assert!(view.render_editor(&state).starts_with("<textarea"));
}

#[test]
fn test_language_change_reformats_existing_snippet() {
    let engine = HighlightEngine::with_defaults();
    let mut state = SnippetState::new();
    state.edit_content("SELECT 1;").expect("edit in raw view");
    state.format_code(&engine);
    let as_javascript = state.formatted_content.clone();

    state.set_language("sql", &engine);

    assert!(state.is_preview);
    assert_ne!(state.formatted_content, as_javascript);
    assert!(state.formatted_content.contains("SELECT"));
}

#[test]
fn test_persisted_document_round_trip_renders() {
    let engine = HighlightEngine::with_defaults();
    let mut state = SnippetState::new();
    state.edit_content("puts 'hi'").expect("edit in raw view");
    state.set_language("ruby", &engine);

    let json = serde_json::to_string(&state).expect("serialize snippet");
    let restored: SnippetState = serde_json::from_str(&json).expect("deserialize snippet");
    assert_eq!(restored, state);

    let view = SnippetView::new(&engine);
    assert_eq!(view.render_export(&restored), view.render_export(&state));
}
