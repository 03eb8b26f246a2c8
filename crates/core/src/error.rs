//! Base error types for nastrajacz
//!
//! This module provides the foundation error types shared by the config and
//! engine crates.

use std::path::PathBuf;
use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The fragments file does not exist
    #[error("Fragments file not found: {}", path.display())]
    ConfigNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The fragments file exists but could not be read or parsed
    #[error("Failed to parse fragments file {}: {message}", path.display())]
    ConfigParse {
        /// Path of the fragments file
        path: PathBuf,
        /// Parser or validation message
        message: String,
    },

    /// A fragment name cannot be used as a directory name
    #[error("Invalid fragment name '{name}': {reason}")]
    InvalidFragmentName {
        /// Offending name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Selection resolved to no fragments
    #[error("No fragments selected")]
    EmptySelection,

    /// Error creating a directory
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error copying a file or directory tree
    #[error("Failed to copy {} to {}: {source}", src.display(), dst.display())]
    Copy {
        /// Copy source
        src: PathBuf,
        /// Copy destination
        dst: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Whether this error belongs to the configuration-loading stage
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound { .. }
                | Error::ConfigParse { .. }
                | Error::InvalidFragmentName { .. }
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
