//! The branding stages. Each stage reads the same configuration and works
//! on its own target, so no stage depends on another's output.

use crate::config::BrandingConfig;
use crate::error::Result;
use crate::fsops::FileSystem;
use crate::report::{Change, StageReport};
use log::info;
use std::path::Path;

pub mod icons;
pub mod locales;
pub mod manifest;
pub mod nls;

pub use icons::IconStage;
pub use locales::LocaleStage;
pub use manifest::ManifestStage;
pub use nls::NlsStage;

/// Everything a stage needs to know about the run.
pub struct BrandContext<'a> {
    pub config: &'a BrandingConfig,
    /// Root every target path is resolved against.
    pub project_root: &'a Path,
    /// Directory of the branding document.
    pub config_dir: &'a Path,
    pub fs: &'a dyn FileSystem,
}

/// One step of the branding pipeline.
pub trait Stage {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Applies the branding to this stage's target.
    ///
    /// Recoverable problems end up in the returned report; an `Err` aborts
    /// the whole run.
    fn apply(&self, context: &BrandContext<'_>) -> Result<StageReport>;
}

/// The stages of a full run, in execution order.
pub fn default_stages() -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(ManifestStage),
        Box::new(NlsStage),
        Box::new(IconStage),
        Box::new(LocaleStage),
    ]
}

/// Writes `updated` to `path` unless it equals `original`.
fn write_if_changed(
    fs: &dyn FileSystem,
    path: &Path,
    original: &str,
    updated: &str,
) -> Result<Change> {
    if original == updated {
        info!("Already branded: {}", path.display());
        return Ok(Change::Unchanged { path: path.to_path_buf() });
    }

    fs.write(path, updated)?;
    info!("Updated {}", path.display());
    Ok(Change::Written { path: path.to_path_buf() })
}
