//! # nastrajacz engine
//!
//! Moves fragments between the home directory and the repository.
//!
//! - **Paths**: resolving targets to home and repository locations
//! - **Hooks**: running fragment and target actions through the shell
//! - **System Abstraction**: filesystem operations abstracted for testing
//! - **Transfer**: the per-fragment lifecycle and its status events

pub mod hooks;
pub mod paths;
pub mod report;
pub mod system;
pub mod transfer;

// Re-export error types from core
pub use nastrajacz_core::{Error, Result};

// Re-export commonly used types
pub use hooks::{Hook, HookExecutor, HookKind, ShellExecutor};
pub use paths::{Layout, TransferPaths};
pub use report::{
    EventLog, FragmentReport, Reporter, StatusEvent, StepOutcome, TargetReport,
    TransferReport,
};
pub use system::{EntryKind, RealSystem, System};
pub use transfer::TransferEngine;
