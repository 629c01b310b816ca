//! rebrand applies a branding document to an editor extension project.
//! It rewrites the package manifest and localization map, copies branded
//! icons into place and replaces the legacy product name in locale files.

/// Command-line interface module for the rebrand application
pub mod cli;

/// Branding document schema and loading
pub mod config;

/// Legacy identifiers and fixed project paths
pub mod constants;

/// Error and warning types
pub mod error;

/// File system access shared by real and dry runs
pub mod fsops;

/// Tab-indented JSON output
pub mod json;

/// Logger setup for the binary
pub mod logger;

/// Runs the stages in order and collects their reports
pub mod processor;

/// Ordered literal text substitution
pub mod replace;

/// Per-stage run reports
pub mod report;

/// The branding stages:
/// - manifest (`src/package.json`)
/// - localization map (`src/package.nls.json`)
/// - icons (`src/assets/icons/`)
/// - locales (`webview-ui/src/i18n/locales/en/`)
pub mod stages;
