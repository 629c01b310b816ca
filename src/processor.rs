//! Branding run orchestration.

use crate::config::BrandingConfig;
use crate::error::Result;
use crate::fsops::FileSystem;
use crate::report::StageReport;
use crate::stages::{default_stages, BrandContext, Stage};
use log::{debug, info};
use std::path::Path;

/// Runs branding stages against a project, one after another.
pub struct Processor<'a> {
    context: BrandContext<'a>,
    stages: Vec<Box<dyn Stage>>,
}

impl<'a> Processor<'a> {
    /// Creates a processor running every stage in the standard order.
    ///
    /// # Arguments
    /// * `config` - Branding to apply
    /// * `project_root` - Root all target paths are resolved against
    /// * `config_dir` - Directory of the branding document, for icon lookup
    /// * `fs` - File system the stages read and write through
    pub fn new(
        config: &'a BrandingConfig,
        project_root: &'a Path,
        config_dir: &'a Path,
        fs: &'a dyn FileSystem,
    ) -> Self {
        Self::with_stages(config, project_root, config_dir, fs, default_stages())
    }

    pub fn with_stages(
        config: &'a BrandingConfig,
        project_root: &'a Path,
        config_dir: &'a Path,
        fs: &'a dyn FileSystem,
        stages: Vec<Box<dyn Stage>>,
    ) -> Self {
        Self {
            context: BrandContext { config, project_root, config_dir, fs },
            stages,
        }
    }

    /// Runs every stage and returns their reports in execution order.
    ///
    /// # Errors
    /// The first fatal stage error is returned immediately; later stages do
    /// not run and earlier writes are kept.
    pub fn run(&self) -> Result<Vec<StageReport>> {
        info!("Branding project at {}", self.context.project_root.display());

        let mut reports = Vec::with_capacity(self.stages.len());
        for stage in &self.stages {
            debug!("Running {} stage", stage.name());
            let report = stage.apply(&self.context)?;
            if report.skipped {
                info!("Skipped {} stage", stage.name());
            }
            reports.push(report);
        }

        Ok(reports)
    }
}
