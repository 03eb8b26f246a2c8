//! System abstraction for filesystem operations
//!
//! The transfer engine only needs to inspect entries, create directories and
//! copy. Keeping these behind a trait lets tests observe or fail individual
//! operations.

use nastrajacz_core::{Error, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Kind of filesystem entry found at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (or a symlink to one)
    File,
    /// Directory (or a symlink to one)
    Directory,
    /// Nothing usable at this path
    Missing,
}

/// Abstraction over filesystem operations
pub trait System {
    /// Inspect the entry at a path, following symlinks
    fn entry_kind(&self, path: &Path) -> EntryKind;

    /// Create a directory and all of its parents
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Copy a single file to an exact destination path
    fn copy_file(&self, src: &Path, dst: &Path) -> Result<()>;

    /// Copy a directory tree, merging into an existing destination
    fn copy_tree(&self, src: &Path, dst: &Path) -> Result<()>;
}

/// Real filesystem implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct RealSystem;

impl System for RealSystem {
    fn entry_kind(&self, path: &Path) -> EntryKind {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
            Ok(metadata) if metadata.is_file() => EntryKind::File,
            _ => EntryKind::Missing,
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| Error::DirectoryCreate {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<()> {
        fs::copy(src, dst).map_err(|e| Error::Copy {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> Result<()> {
        self.create_dir_all(dst)?;

        for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(src).to_path_buf();
                Error::Copy {
                    src: path,
                    dst: dst.to_path_buf(),
                    source: e.into(),
                }
            })?;

            let relative = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| Error::Message(format!("Failed to walk {}: {e}", src.display())))?;
            let target = dst.join(relative);

            if entry.file_type().is_dir() {
                self.create_dir_all(&target)?;
            } else if entry.file_type().is_file() {
                self.copy_file(entry.path(), &target)?;
            } else {
                tracing::debug!(path = %entry.path().display(), "Skipping special file");
            }
        }

        Ok(())
    }
}
