//! Error types for CLI commands
//!
//! Some failures are expected outcomes of a run (no fragments file, nothing
//! selected). They carry a fixed message printed to stdout instead of an error
//! report.

use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// `fragments.toml` does not exist in the working directory
    #[error("There is no fragments file at this location.")]
    FragmentsFileNotFound,

    /// `fragments.toml` could not be read or parsed
    #[error("Could not read fragments config file.")]
    FragmentsFileUnreadable(#[source] nastrajacz_core::Error),

    /// The selection matched no defined fragment
    #[error("Cannot perform operations without selected fragments.")]
    NoFragmentsSelected,

    /// Error from the config or engine crates
    #[error(transparent)]
    Core(nastrajacz_core::Error),
}

impl From<nastrajacz_core::Error> for CommandError {
    fn from(err: nastrajacz_core::Error) -> Self {
        match err {
            nastrajacz_core::Error::ConfigNotFound { .. } => Self::FragmentsFileNotFound,
            nastrajacz_core::Error::EmptySelection => Self::NoFragmentsSelected,
            err if err.is_config_error() => Self::FragmentsFileUnreadable(err),
            err => Self::Core(err),
        }
    }
}

impl CommandError {
    /// Whether this error is reported to the user as a plain message
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::FragmentsFileNotFound
                | Self::FragmentsFileUnreadable(_)
                | Self::NoFragmentsSelected
        )
    }
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;
