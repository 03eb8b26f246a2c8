//! Transfer direction between the home environment and the repository

use std::fmt;

/// Which way files move during a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferDirection {
    /// Home environment → repository
    Fetch,
    /// Repository → home environment
    Apply,
}

impl TransferDirection {
    /// Lowercase name used in output and hook names
    pub fn name(&self) -> &'static str {
        match self {
            TransferDirection::Fetch => "fetch",
            TransferDirection::Apply => "apply",
        }
    }
}

impl fmt::Display for TransferDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
