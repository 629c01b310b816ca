//! Locale directory rewriting.
//!
//! Locale files are treated as plain text, never parsed, so formatting and
//! key order survive untouched apart from the substituted spans.

use crate::config::BrandingConfig;
use crate::constants::{
    LEGACY_CONCATENATED, LEGACY_PHRASE, LEGACY_TOKEN, LOCALES_DIR, LOCALE_EXTENSION,
};
use crate::error::{Result, Warning};
use crate::replace::{replace_all, Replacement};
use crate::report::StageReport;
use log::debug;

use super::{write_if_changed, BrandContext, Stage};

pub struct LocaleStage;

impl Stage for LocaleStage {
    fn name(&self) -> &'static str {
        "locales"
    }

    fn apply(&self, context: &BrandContext<'_>) -> Result<StageReport> {
        let dir = context.project_root.join(LOCALES_DIR);
        let mut report = StageReport::new(self.name());

        if !context.fs.is_dir(&dir) {
            report.warn(Warning::TargetMissing { stage: self.name(), path: dir });
            report.skipped = true;
            return Ok(report);
        }

        for path in context.fs.list_files(&dir)? {
            let is_locale = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(LOCALE_EXTENSION));
            if !is_locale {
                debug!("Ignoring {}", path.display());
                continue;
            }

            let original = context.fs.read_to_string(&path)?;
            let updated = rewrite_locale(&original, context.config);
            report.record(write_if_changed(context.fs, &path, &original, &updated)?);
        }

        Ok(report)
    }
}

/// Replaces the legacy brand phrases of a locale file.
///
/// `Kilo Code` is replaced before `Kilo`; `Kilocode` becomes the display
/// name and is not split by the `Kilo` rule.
pub fn rewrite_locale(content: &str, config: &BrandingConfig) -> String {
    let short_name = config.short_name();
    replace_all(
        content,
        &[
            Replacement::new(LEGACY_PHRASE, short_name),
            Replacement::new(LEGACY_TOKEN, short_name),
            Replacement::new(LEGACY_CONCATENATED, &config.display_name),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BrandingConfig {
        BrandingConfig {
            display_name: "Jack Assistant".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_phrase_token_and_concatenated_identifier() {
        let config = config();
        assert_eq!(rewrite_locale("Kilo Code has a question", &config), "Jack has a question");
        assert_eq!(rewrite_locale("Kilo said hi", &config), "Jack said hi");
        assert_eq!(rewrite_locale("Kilocode settings", &config), "Jack Assistant settings");
    }

    #[test]
    fn test_case_sensitive() {
        let config = config();
        assert_eq!(rewrite_locale("kilo code KILO", &config), "kilo code KILO");
    }

    #[test]
    fn test_embedded_token_is_replaced() {
        assert_eq!(rewrite_locale("Kilometers", &config()), "Jackmeters");
    }

    #[test]
    fn test_structure_is_preserved() {
        let content = "{\n  \"title\":   \"Kilo Code\",\n\"b\": \"Kilo\" }";
        assert_eq!(
            rewrite_locale(content, &config()),
            "{\n  \"title\":   \"Jack\",\n\"b\": \"Jack\" }"
        );
    }
}
