//! Icon materialization: copies the configured icon files into the
//! project's icon directory.

use crate::constants::ICONS_DIR;
use crate::error::{Result, Warning};
use crate::fsops::FileSystem;
use crate::report::{Change, StageReport};
use log::{debug, info};
use std::path::{Path, PathBuf};

use super::{BrandContext, Stage};

/// Outcome of looking up an icon source on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    Found(PathBuf),
    /// Every location that was tried, in order.
    Missing(Vec<PathBuf>),
}

/// Resolves an icon source path.
///
/// Absolute paths are taken as they are. Relative paths are looked up next
/// to the branding document first and only then in the project root.
pub fn resolve_icon_source(
    fs: &dyn FileSystem,
    source: &Path,
    config_dir: &Path,
    project_root: &Path,
) -> IconSource {
    if source.is_absolute() {
        return if fs.exists(source) {
            IconSource::Found(source.to_path_buf())
        } else {
            IconSource::Missing(vec![source.to_path_buf()])
        };
    }

    let config_relative = config_dir.join(source);
    if fs.exists(&config_relative) {
        return IconSource::Found(config_relative);
    }

    let root_relative = project_root.join(source);
    if fs.exists(&root_relative) {
        return IconSource::Found(root_relative);
    }

    IconSource::Missing(vec![config_relative, root_relative])
}

pub struct IconStage;

impl Stage for IconStage {
    fn name(&self) -> &'static str {
        "icons"
    }

    fn apply(&self, context: &BrandContext<'_>) -> Result<StageReport> {
        let icons = match &context.config.icons {
            Some(icons) if !icons.is_empty() => icons,
            _ => {
                debug!("No icons configured");
                return Ok(StageReport::skipped(self.name()));
            }
        };

        let mut report = StageReport::new(self.name());
        let target_dir = context.project_root.join(ICONS_DIR);
        if !context.fs.is_dir(&target_dir) {
            context.fs.create_dir_all(&target_dir)?;
            report.record(Change::CreatedDir { path: target_dir.clone() });
        }

        for (name, source) in icons {
            let source = match source.as_deref() {
                Some(source) if !source.is_empty() => source,
                _ => {
                    debug!("Icon '{name}' has no source, skipping");
                    continue;
                }
            };

            match resolve_icon_source(context.fs, Path::new(source), context.config_dir, context.project_root) {
                IconSource::Found(resolved) => {
                    let target = target_dir.join(name);
                    context.fs.copy(&resolved, &target)?;
                    info!("Copied icon {} to {}", resolved.display(), target.display());
                    report.record(Change::Copied { source: resolved, target });
                }
                IconSource::Missing(attempted) => report.warn(Warning::IconSourceMissing {
                    name: name.clone(),
                    source_path: source.to_string(),
                    attempted,
                }),
            }
        }

        Ok(report)
    }
}
