use std::fs;
use std::path::Path;
use tempfile::TempDir;
use templatizr::{
    config::{
        load_config_file, parse_config, parse_replace_flag, resolve_replacements, Replacement,
    },
    error::Error,
};

#[test]
fn test_parse_replace_flag() {
    let result = parse_replace_flag("/foo/bar/,/baz/qux/").unwrap();
    assert_eq!(
        result,
        vec![Replacement::new("foo", "bar"), Replacement::new("baz", "qux")]
    );
}

#[test]
fn test_parse_replace_flag_strips_any_delimiter() {
    let result = parse_replace_flag("|foo/bar|").unwrap();
    assert_eq!(result, vec![Replacement::new("foo", "bar")]);
}

#[test]
fn test_parse_replace_flag_empty_replacement() {
    let result = parse_replace_flag("/debug-only//").unwrap();
    assert_eq!(result, vec![Replacement::new("debug-only", "")]);
}

#[test]
fn test_parse_replace_flag_keeps_spaces() {
    let result = parse_replace_flag("/my app/<%= name %>/").unwrap();
    assert_eq!(result, vec![Replacement::new("my app", "<%= name %>")]);
}

#[test]
fn test_parse_replace_flag_invalid_tokens() {
    for input in ["/foo/", "/a/b/c/", "x", "", "/foo/bar/,", "//bar/"] {
        match parse_replace_flag(input) {
            Err(Error::InvalidReplacementSyntax { .. }) => (),
            other => panic!("Expected InvalidReplacementSyntax for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_parse_config_yaml() {
    let content = r#"
replacements:
  - search: acme-widget
    replace: "<%= name %>"
  - search: Acme
    replace: "<%= company %>"
"#;
    let result = parse_config(content, Path::new("config.yml")).unwrap();
    assert_eq!(
        result,
        vec![
            Replacement::new("acme-widget", "<%= name %>"),
            Replacement::new("Acme", "<%= company %>"),
        ]
    );
}

#[test]
fn test_parse_config_json() {
    let content = r#"{"replacements": [{"search": "foo", "replace": "bar"}]}"#;
    let result = parse_config(content, Path::new("config.json")).unwrap();
    assert_eq!(result, vec![Replacement::new("foo", "bar")]);
}

#[test]
fn test_parse_config_without_replacements() {
    assert!(parse_config("other: 1\n", Path::new("c.yml")).unwrap().is_empty());
    assert!(parse_config("", Path::new("c.yml")).unwrap().is_empty());
}

#[test]
fn test_parse_config_missing_replace_deletes() {
    let content = "replacements:\n  - search: \"// debug\"\n  - search: foo\n    replace: bar\n";
    let result = parse_config(content, Path::new("config.yml")).unwrap();
    assert_eq!(
        result,
        vec![Replacement::new("// debug", ""), Replacement::new("foo", "bar")]
    );
}

#[test]
fn test_parse_config_malformed() {
    let inputs = [
        "replacements: [",
        "replacements:\n  - replace: foo\n",
        "replacements: 42\n",
        "replacements:\n  - search: \"\"\n    replace: bar\n",
    ];
    for content in inputs {
        match parse_config(content, Path::new("c.yml")) {
            Err(Error::ConfigParseError { path, .. }) => assert_eq!(path, "c.yml"),
            other => panic!("Expected ConfigParseError for {:?}, got {:?}", content, other),
        }
    }
}

#[test]
fn test_load_config_file_missing() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config_file(temp_dir.path().join("missing.yml"));
    assert!(matches!(result, Err(Error::ConfigParseError { .. })));
}

#[test]
fn test_resolve_requires_a_source() {
    match resolve_replacements(None, None) {
        Err(Error::RequiredFlags { flags }) => assert_eq!(flags, vec!["config-file", "replace"]),
        other => panic!("Expected RequiredFlags, got {:?}", other),
    }

    assert!(matches!(
        resolve_replacements(Some(""), None),
        Err(Error::RequiredFlags { .. })
    ));
}

#[test]
fn test_resolve_empty_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");
    fs::write(&config_path, "replacements: []\n").unwrap();

    assert!(matches!(
        resolve_replacements(None, Some(config_path.as_path())),
        Err(Error::RequiredFlags { .. })
    ));
}

#[test]
fn test_resolve_inline_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");
    fs::write(
        &config_path,
        "replacements:\n  - search: from-config\n    replace: x\n",
    )
    .unwrap();

    let from_config = resolve_replacements(None, Some(config_path.as_path())).unwrap();
    assert_eq!(
        from_config.as_slice(),
        &[Replacement::new("from-config", "x")]
    );

    let overridden = resolve_replacements(Some("/inline/y/"), Some(config_path.as_path())).unwrap();
    assert_eq!(overridden.as_slice(), &[Replacement::new("inline", "y")]);
}

#[test]
fn test_resolve_reports_broken_config_even_with_inline() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");
    fs::write(&config_path, "replacements: [").unwrap();

    assert!(matches!(
        resolve_replacements(Some("/a/b/"), Some(config_path.as_path())),
        Err(Error::ConfigParseError { .. })
    ));
}
