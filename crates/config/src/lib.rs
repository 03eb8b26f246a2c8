//! Configuration management for nastrajacz
//!
//! This crate handles:
//! - Loading and validating `fragments.toml`
//! - The typed fragment model (fragments, targets, actions)
//! - Fragment selection
//! - Logging initialization

pub mod config;
pub mod logging;
pub mod selection;

// Re-export error types from core
pub use nastrajacz_core::{Error, Result};

// Re-export main types
pub use config::{Actions, FRAGMENTS_FILE, Fragment, FragmentSet, HookPair, IconMode, Target};
pub use selection::Selection;
