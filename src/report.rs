//! Per-stage results of a branding run.

use crate::error::Warning;
use log::warn;
use std::fmt;
use std::path::PathBuf;

/// A single effect a stage had (or, in a dry run, would have) on the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A text target was rewritten.
    Written { path: PathBuf },
    /// A text target already had the branded content and was left alone.
    Unchanged { path: PathBuf },
    /// A file was copied into the project.
    Copied { source: PathBuf, target: PathBuf },
    /// A directory was created.
    CreatedDir { path: PathBuf },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Written { path } => write!(f, "Updated: '{}'", path.display()),
            Change::Unchanged { path } => write!(f, "Unchanged: '{}'", path.display()),
            Change::Copied { source, target } => {
                write!(f, "Copied: '{}' -> '{}'", source.display(), target.display())
            }
            Change::CreatedDir { path } => write!(f, "Created: '{}'", path.display()),
        }
    }
}

/// What one stage did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage: &'static str,
    pub changes: Vec<Change>,
    pub warnings: Vec<Warning>,
    /// The stage short-circuited: target absent or nothing configured.
    pub skipped: bool,
}

impl StageReport {
    pub fn new(stage: &'static str) -> Self {
        Self { stage, changes: Vec::new(), warnings: Vec::new(), skipped: false }
    }

    /// Report for a stage that did nothing.
    pub fn skipped(stage: &'static str) -> Self {
        Self { skipped: true, ..Self::new(stage) }
    }

    /// Logs `warning` right away and keeps it for the final report.
    pub fn warn(&mut self, warning: Warning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn record(&mut self, change: Change) {
        self.changes.push(change);
    }
}

/// Totals over all stage reports of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub copied: usize,
    pub unchanged: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn from_reports(reports: &[StageReport]) -> Self {
        let mut summary = Summary::default();
        for report in reports {
            summary.warnings += report.warnings.len();
            for change in &report.changes {
                match change {
                    Change::Written { .. } => summary.written += 1,
                    Change::Copied { .. } => summary.copied += 1,
                    Change::Unchanged { .. } => summary.unchanged += 1,
                    Change::CreatedDir { .. } => {}
                }
            }
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Branding applied: {} written, {} copied, {} unchanged, {} warnings.",
            self.written, self.copied, self.unchanged, self.warnings
        )
    }
}
