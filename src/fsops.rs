//! File system access used by the branding stages.
//! Stages only touch the disk through `FileSystem`, which lets a dry run
//! share every code path with a real run.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File system primitives needed by the stages.
pub trait FileSystem {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Reads a UTF-8 text file.
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .map_err(|source| Error::FileSystemError { action: "read", path: path.to_path_buf(), source })
    }

    /// Files directly inside `dir` (no recursion), sorted by file name.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Replaces the content of `path`.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Creates `path` and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Copies `source` to `target` byte for byte, overwriting `target`.
    fn copy(&self, source: &Path, target: &Path) -> Result<()>;
}

/// Reads and writes the real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .map_err(|source| Error::FileSystemError { action: "write", path: path.to_path_buf(), source })
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|source| Error::FileSystemError {
            action: "create directory",
            path: path.to_path_buf(),
            source,
        })
    }

    fn copy(&self, source: &Path, target: &Path) -> Result<()> {
        fs::copy(source, target).map(|_| ()).map_err(|e| Error::FileSystemError {
            action: "copy to",
            path: target.to_path_buf(),
            source: e,
        })
    }
}

/// Reads the real file system but never modifies it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunFs;

impl FileSystem for DryRunFs {
    fn write(&self, path: &Path, _content: &str) -> Result<()> {
        debug!("Dry run: not writing {}", path.display());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        debug!("Dry run: not creating {}", path.display());
        Ok(())
    }

    fn copy(&self, source: &Path, target: &Path) -> Result<()> {
        debug!("Dry run: not copying {} to {}", source.display(), target.display());
        Ok(())
    }
}
