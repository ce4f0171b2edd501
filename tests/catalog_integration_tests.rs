//! Tests for language catalog loading from user directories
use std::fs;

use snippet_block::language::LanguageCatalog;

#[test]
fn test_user_dir_extends_builtin_catalog() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("custom.toml"),
        r#"
            [[languages]]
            id = "elixir"
            label = "Elixir"
            syntax = "Plain Text"
            aliases = ["ex"]
        "#,
    )
    .expect("write language file");

    let mut catalog = LanguageCatalog::builtin();
    let builtin_count = catalog.len();
    let loaded = catalog.load_dir(dir.path());

    assert_eq!(loaded, 1);
    assert_eq!(catalog.len(), builtin_count + 1);
    assert_eq!(catalog.label("elixir"), Some("Elixir"));
    assert_eq!(catalog.label("ex"), Some("Elixir"));
}

#[test]
fn test_user_dir_overrides_builtin_by_id() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("override.toml"),
        r#"
            [[languages]]
            id = "javascript"
            label = "ECMAScript"
            syntax = "JavaScript"
        "#,
    )
    .expect("write language file");

    let mut catalog = LanguageCatalog::builtin();
    catalog.load_dir(dir.path());

    assert_eq!(catalog.label("javascript"), Some("ECMAScript"));
}

#[test]
fn test_malformed_file_is_skipped() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("broken.toml"), "[[languages]]\nid = ").expect("write broken file");
    fs::write(
        dir.path().join("good.toml"),
        r#"
            [[languages]]
            id = "zig"
            label = "Zig"
            syntax = "Plain Text"
        "#,
    )
    .expect("write language file");

    let mut catalog = LanguageCatalog::builtin();
    let loaded = catalog.load_dir(dir.path());

    // The broken file must not poison the rest of the directory
    assert_eq!(loaded, 1);
    assert!(catalog.resolve("zig").is_some());
}

#[test]
fn test_non_toml_files_are_ignored() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("notes.txt"), "not a language file").expect("write file");

    let mut catalog = LanguageCatalog::builtin();
    assert_eq!(catalog.load_dir(dir.path()), 0);
}
