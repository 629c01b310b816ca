//! Branding configuration.
//! The branding document is a single JSON object; every field is optional on
//! the wire and an absent field means "skip whatever depends on it".

use crate::constants::{DEFAULT_MANIFEST_PATH, DEFAULT_NLS_PATH};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Overrides for the locations of the JSON targets, relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileOverrides {
    pub package: Option<PathBuf>,
    pub nls: Option<PathBuf>,
}

/// The branding applied to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandingConfig {
    /// New package identifier.
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Human-readable product name.
    #[serde(deserialize_with = "null_as_empty")]
    pub display_name: String,
    /// New publisher identifier.
    #[serde(deserialize_with = "null_as_empty")]
    pub publisher: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub repository: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub homepage: String,
    /// Not consumed by any stage yet.
    #[serde(deserialize_with = "null_as_empty")]
    pub output_channel_name: String,
    /// Short product name for locale strings, derived from `display_name` when absent.
    pub short_name: Option<String>,
    pub files: Option<FileOverrides>,
    /// Destination icon file name to source path, in document order.
    pub icons: Option<IndexMap<String, Option<String>>>,
}

impl BrandingConfig {
    /// Parses a branding document.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the content is not a JSON object matching the schema
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid branding document: {e}")))
    }

    /// Short product name used in locale strings.
    ///
    /// An explicit non-empty `shortName` wins; otherwise the first
    /// whitespace-delimited word of `displayName`, or the whole display name
    /// when it has no words.
    pub fn short_name(&self) -> &str {
        match self.short_name.as_deref() {
            Some(short_name) if !short_name.is_empty() => short_name,
            _ => derive_short_name(&self.display_name),
        }
    }

    /// Manifest location for the given project root.
    pub fn manifest_path(&self, project_root: &Path) -> PathBuf {
        let relative = self
            .files
            .as_ref()
            .and_then(|files| files.package.as_deref())
            .unwrap_or_else(|| Path::new(DEFAULT_MANIFEST_PATH));
        project_root.join(relative)
    }

    /// Localization map location for the given project root.
    pub fn nls_path(&self, project_root: &Path) -> PathBuf {
        let relative = self
            .files
            .as_ref()
            .and_then(|files| files.nls.as_deref())
            .unwrap_or_else(|| Path::new(DEFAULT_NLS_PATH));
        project_root.join(relative)
    }
}

/// Reads a string field, treating `null` like an absent field.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// First whitespace-delimited word of `display_name`, or `display_name` itself.
pub fn derive_short_name(display_name: &str) -> &str {
    display_name.split_whitespace().next().unwrap_or(display_name)
}

/// Loads the branding document at `config_path`.
///
/// # Errors
/// * `Error::ConfigMissing` if no file exists at `config_path`
/// * `Error::FileSystemError` if the file cannot be read
/// * `Error::ConfigError` if the content is not a valid branding document
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<BrandingConfig> {
    let config_path = config_path.as_ref();
    if !config_path.is_file() {
        return Err(Error::ConfigMissing { path: config_path.to_path_buf() });
    }

    debug!("Loading branding configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path).map_err(|source| {
        Error::FileSystemError { action: "read", path: config_path.to_path_buf(), source }
    })?;

    BrandingConfig::from_json(&content)
}

/// Directory the branding document lives in; relative icon sources are
/// looked up here first.
pub fn config_dir(config_path: &Path) -> PathBuf {
    config_path.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_derivation() {
        assert_eq!(derive_short_name("Jack Assistant"), "Jack");
        assert_eq!(derive_short_name("  Jack   Assistant "), "Jack");
        assert_eq!(derive_short_name("Jack"), "Jack");
        assert_eq!(derive_short_name("   "), "   ");
        assert_eq!(derive_short_name(""), "");
    }

    #[test]
    fn test_explicit_short_name_wins() {
        let config = BrandingConfig {
            display_name: "Jack Assistant".to_string(),
            short_name: Some("JA".to_string()),
            ..Default::default()
        };
        assert_eq!(config.short_name(), "JA");
    }

    #[test]
    fn test_empty_short_name_falls_back_to_display_name() {
        let config = BrandingConfig {
            display_name: "Jack Assistant".to_string(),
            short_name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.short_name(), "Jack");
    }

    #[test]
    fn test_default_paths() {
        let config = BrandingConfig::default();
        let root = Path::new("/project");
        assert_eq!(config.manifest_path(root), PathBuf::from("/project/src/package.json"));
        assert_eq!(config.nls_path(root), PathBuf::from("/project/src/package.nls.json"));
    }

    #[test]
    fn test_overridden_paths() {
        let config = BrandingConfig {
            files: Some(FileOverrides {
                package: Some(PathBuf::from("ext/package.json")),
                nls: None,
            }),
            ..Default::default()
        };
        let root = Path::new("/project");
        assert_eq!(config.manifest_path(root), PathBuf::from("/project/ext/package.json"));
        assert_eq!(config.nls_path(root), PathBuf::from("/project/src/package.nls.json"));
    }

    #[test]
    fn test_config_dir() {
        assert_eq!(config_dir(Path::new("/a/b/branding.json")), PathBuf::from("/a/b"));
        assert_eq!(config_dir(Path::new("branding.json")), PathBuf::from(""));
    }
}
