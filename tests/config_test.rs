use rebrand::config::{load_config, BrandingConfig};
use rebrand::error::Error;
use rebrand::stages::manifest::rewrite_manifest;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_full_document() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("branding.json");
    fs::write(
        &config_path,
        r#"{
            "name": "jack-code",
            "displayName": "Jack Assistant",
            "publisher": "jackcode",
            "description": "An assistant",
            "repository": "https://git.example/jack",
            "homepage": "https://jack.example",
            "outputChannelName": "Jack",
            "shortName": "JA",
            "files": { "package": "ext/package.json" },
            "icons": { "z.png": "art/z.png", "a.png": "art/a.png", "empty.png": "", "null.png": null }
        }"#,
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();

    assert_eq!(config.name, "jack-code");
    assert_eq!(config.display_name, "Jack Assistant");
    assert_eq!(config.publisher, "jackcode");
    assert_eq!(config.output_channel_name, "Jack");
    assert_eq!(config.short_name(), "JA");
    assert_eq!(
        config.files.as_ref().unwrap().package,
        Some(PathBuf::from("ext/package.json"))
    );
    assert_eq!(config.files.as_ref().unwrap().nls, None);

    let icon_names: Vec<&str> = config.icons.as_ref().unwrap().keys().map(String::as_str).collect();
    assert_eq!(icon_names, vec!["z.png", "a.png", "empty.png", "null.png"]);
}

#[test]
fn test_missing_fields_default_to_empty() {
    let config = BrandingConfig::from_json(r#"{"displayName": "Jack Assistant"}"#).unwrap();

    assert_eq!(config.name, "");
    assert_eq!(config.repository, "");
    assert_eq!(config.icons, None);
    assert_eq!(config.files, None);
    assert_eq!(config.short_name(), "Jack");
}

#[test]
fn test_missing_document_is_config_missing() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("branding.json");

    match load_config(&config_path) {
        Err(Error::ConfigMissing { path }) => assert_eq!(path, config_path),
        other => panic!("Expected ConfigMissing, got {other:?}"),
    }
}

#[test]
fn test_invalid_document_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("branding.json");
    fs::write(&config_path, r#"{"name": 42}"#).unwrap();

    match load_config(&config_path) {
        Err(Error::ConfigError(message)) => assert!(message.contains("Invalid branding document")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_null_fields_are_treated_as_unset() {
    let config = BrandingConfig::from_json(
        r#"{"name": "jack-code", "displayName": "Jack", "publisher": "jackcode",
            "description": null, "repository": null, "homepage": null, "outputChannelName": null}"#,
    )
    .unwrap();

    assert_eq!(config.repository, "");
    assert_eq!(config.homepage, "");
    assert_eq!(config.description, "");
    assert_eq!(config.output_channel_name, "");

    let manifest = rewrite_manifest(
        r#"{"name": "kilo-code", "repository": {"type": "git", "url": "https://old.example"}, "homepage": "https://old.example"}"#,
        &config,
    )
    .unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(manifest["repository"]["url"], "https://old.example");
    assert_eq!(manifest["homepage"], "https://old.example");
    assert_eq!(manifest["name"], "jack-code");
}
