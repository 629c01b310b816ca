//! Localization map (`package.nls.json`) rewriting.

use crate::config::BrandingConfig;
use crate::error::{Error, Result, Warning};
use crate::json::to_tab_string;
use crate::report::StageReport;
use log::debug;
use serde_json::{Map, Value};

use super::{write_if_changed, BrandContext, Stage};

/// Configuration field a localization key takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NlsSource {
    DisplayName,
    Description,
}

/// Keys overwritten in the localization map, in the order they are applied.
pub const NLS_KEYS: [(&str, NlsSource); 7] = [
    ("extension.displayName", NlsSource::DisplayName),
    ("extension.description", NlsSource::Description),
    ("views.activitybar.title", NlsSource::DisplayName),
    ("views.sidebar.name", NlsSource::DisplayName),
    ("configuration.title", NlsSource::DisplayName),
    ("views.contextMenu.label", NlsSource::DisplayName),
    ("views.terminalMenu.label", NlsSource::DisplayName),
];

impl NlsSource {
    fn value<'a>(&self, config: &'a BrandingConfig) -> &'a str {
        match self {
            NlsSource::DisplayName => config.display_name.as_str(),
            NlsSource::Description => config.description.as_str(),
        }
    }
}

pub struct NlsStage;

impl Stage for NlsStage {
    fn name(&self) -> &'static str {
        "localization map"
    }

    fn apply(&self, context: &BrandContext<'_>) -> Result<StageReport> {
        let path = context.config.nls_path(context.project_root);
        let mut report = StageReport::new(self.name());

        if !context.fs.exists(&path) {
            report.warn(Warning::TargetMissing { stage: self.name(), path });
            report.skipped = true;
            return Ok(report);
        }

        debug!("Rewriting localization map {}", path.display());
        let original = context.fs.read_to_string(&path)?;
        let updated = rewrite_nls(&original, context.config)
            .map_err(|source| Error::MalformedDocument { path: path.clone(), source })?;

        report.record(write_if_changed(context.fs, &path, &original, &updated)?);
        Ok(report)
    }
}

/// Sets every key of `NLS_KEYS` from `config`; other keys keep their value
/// and position, missing known keys are appended.
///
/// # Errors
/// Fails when `content` is not a JSON object.
pub fn rewrite_nls(content: &str, config: &BrandingConfig) -> serde_json::Result<String> {
    let mut map: Map<String, Value> = serde_json::from_str(content)?;

    for (key, source) in NLS_KEYS {
        map.insert(key.to_string(), Value::String(source.value(config).to_string()));
    }

    to_tab_string(&map)
}
