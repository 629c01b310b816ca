//! Error handling for rebrand.
//! Fatal conditions are `Error` values that abort the run; recoverable
//! conditions are `Warning` values that are reported and collected while the
//! remaining work continues.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Any of these stops the run at the point it occurs;
/// targets already written stay as written.
#[derive(Error, Debug)]
pub enum Error {
    /// The branding document does not exist at the expected location.
    #[error("Branding configuration not found at '{}'.", path.display())]
    ConfigMissing { path: PathBuf },

    /// The branding document exists but cannot be read as a branding configuration.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A JSON target could not be parsed (after substitution, for the manifest).
    #[error("Malformed JSON document '{}': {source}.", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A file system primitive failed on a specific path.
    #[error("Failed to {action} '{}': {source}.", path.display())]
    FileSystemError {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents other errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable conditions. They are logged when they happen and returned in
/// the stage report, but never stop other work.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The file or directory a stage operates on does not exist.
    #[error("{stage}: target '{}' does not exist, skipping", path.display())]
    TargetMissing { stage: &'static str, path: PathBuf },

    /// An icon source was not found at any of the attempted locations.
    #[error(
        "icon '{name}': source '{source_path}' not found (tried {}), skipping",
        format_attempts(attempted)
    )]
    IconSourceMissing {
        name: String,
        source_path: String,
        attempted: Vec<PathBuf>,
    },
}

fn format_attempts(attempted: &[PathBuf]) -> String {
    attempted
        .iter()
        .map(|path| format!("'{}'", path.display()))
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
