//! Hook system for fragment and target actions
//!
//! Hooks are shell commands attached to a fragment or to one of its targets
//! and run before or after a transfer.
//!
//! ## Module Organization
//!
//! - `executor`: running hook commands through the host shell

pub mod executor;

pub use executor::{HookExecutor, ShellExecutor, ShellExecutorBuilder};

use nastrajacz_core::TransferDirection;
use std::fmt;

/// Lifecycle point a hook is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// `before_apply`
    BeforeApply,
    /// `after_apply`
    AfterApply,
    /// `before_fetch`
    BeforeFetch,
    /// `after_fetch`
    AfterFetch,
}

impl HookKind {
    /// Hook run before a transfer in the given direction
    pub fn before(direction: TransferDirection) -> Self {
        match direction {
            TransferDirection::Apply => Self::BeforeApply,
            TransferDirection::Fetch => Self::BeforeFetch,
        }
    }

    /// Hook run after a transfer in the given direction
    pub fn after(direction: TransferDirection) -> Self {
        match direction {
            TransferDirection::Apply => Self::AfterApply,
            TransferDirection::Fetch => Self::AfterFetch,
        }
    }

    /// Configuration key of this hook
    pub fn name(&self) -> &'static str {
        match self {
            Self::BeforeApply => "before_apply",
            Self::AfterApply => "after_apply",
            Self::BeforeFetch => "before_fetch",
            Self::AfterFetch => "after_fetch",
        }
    }

    /// Transfer direction this hook belongs to
    pub fn direction(&self) -> TransferDirection {
        match self {
            Self::BeforeApply | Self::AfterApply => TransferDirection::Apply,
            Self::BeforeFetch | Self::AfterFetch => TransferDirection::Fetch,
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hook command ready to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hook<'a> {
    /// Lifecycle point
    pub kind: HookKind,
    /// Shell command line
    pub command: &'a str,
    /// Owning fragment name
    pub fragment: &'a str,
    /// Target basename for target-level hooks
    pub target: Option<&'a str>,
}

impl Hook<'_> {
    /// `<fragment>` or `<fragment>/<target>`
    pub fn label(&self) -> String {
        match self.target {
            Some(target) => format!("{}/{}", self.fragment, target),
            None => self.fragment.to_string(),
        }
    }
}
