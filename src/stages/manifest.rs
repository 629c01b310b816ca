//! Package manifest rewriting.
//!
//! The manifest is first rewritten as plain text so that every embedded
//! legacy identifier (command ids, view ids, activation events, ...) picks up
//! the new names, then parsed, and the identity fields are set from the
//! configuration so they are correct whatever the text pass produced.

use crate::config::BrandingConfig;
use crate::constants::{LEGACY_IDENTIFIER, LEGACY_SLUG};
use crate::error::{Error, Result, Warning};
use crate::json::to_tab_string;
use crate::replace::{replace_all, Replacement};
use crate::report::StageReport;
use log::debug;
use serde_json::{json, Map, Value};

use super::{write_if_changed, BrandContext, Stage};

pub struct ManifestStage;

impl Stage for ManifestStage {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn apply(&self, context: &BrandContext<'_>) -> Result<StageReport> {
        let path = context.config.manifest_path(context.project_root);
        let mut report = StageReport::new(self.name());

        if !context.fs.exists(&path) {
            report.warn(Warning::TargetMissing { stage: self.name(), path });
            report.skipped = true;
            return Ok(report);
        }

        debug!("Rewriting manifest {}", path.display());
        let original = context.fs.read_to_string(&path)?;
        let updated = rewrite_manifest(&original, context.config)
            .map_err(|source| Error::MalformedDocument { path: path.clone(), source })?;

        report.record(write_if_changed(context.fs, &path, &original, &updated)?);
        Ok(report)
    }
}

/// Rewrites manifest text for `config`.
///
/// The slug is replaced before the bare identifier; afterwards `name`,
/// `publisher` and `description` are overwritten, and `repository` and
/// `homepage` when configured.
///
/// # Errors
/// Fails when the substituted text is not a JSON object.
pub fn rewrite_manifest(content: &str, config: &BrandingConfig) -> serde_json::Result<String> {
    let substituted = replace_all(
        content,
        &[
            Replacement::new(LEGACY_SLUG, &config.name),
            Replacement::new(LEGACY_IDENTIFIER, &config.publisher),
        ],
    );

    let mut manifest: Map<String, Value> = serde_json::from_str(&substituted)?;

    manifest.insert("name".to_string(), Value::String(config.name.clone()));
    manifest.insert("publisher".to_string(), Value::String(config.publisher.clone()));
    manifest.insert("description".to_string(), Value::String(config.description.clone()));

    if !config.repository.is_empty() {
        manifest.insert(
            "repository".to_string(),
            json!({ "type": "git", "url": config.repository }),
        );
    }
    if !config.homepage.is_empty() {
        manifest.insert("homepage".to_string(), Value::String(config.homepage.clone()));
    }

    to_tab_string(&manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BrandingConfig {
        BrandingConfig {
            name: "jack-code".to_string(),
            display_name: "Jack Assistant".to_string(),
            publisher: "jackcode".to_string(),
            description: "An assistant".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_identity_fields_are_overwritten() {
        let content = r#"{"name": "something-else", "publisher": "other", "version": "1.0.0"}"#;
        let output = rewrite_manifest(content, &config()).unwrap();
        let manifest: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(manifest["name"], "jack-code");
        assert_eq!(manifest["publisher"], "jackcode");
        assert_eq!(manifest["description"], "An assistant");
        assert_eq!(manifest["version"], "1.0.0");
    }

    #[test]
    fn test_existing_key_order_is_kept() {
        let content = r#"{"version": "1.0.0", "publisher": "kilocode", "name": "kilo-code"}"#;
        let output = rewrite_manifest(content, &config()).unwrap();
        let version = output.find("\"version\"").unwrap();
        let publisher = output.find("\"publisher\"").unwrap();
        let name = output.find("\"name\"").unwrap();
        assert!(version < publisher && publisher < name);
    }

    #[test]
    fn test_unset_repository_and_homepage_are_left_alone() {
        let content = r#"{"repository": "old", "homepage": "https://old.example"}"#;
        let output = rewrite_manifest(content, &config()).unwrap();
        let manifest: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(manifest["repository"], "old");
        assert_eq!(manifest["homepage"], "https://old.example");
    }

    #[test]
    fn test_non_object_manifest_is_rejected() {
        assert!(rewrite_manifest("[1, 2, 3]", &config()).is_err());
    }
}
