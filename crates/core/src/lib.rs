//! Core types and utilities for nastrajacz
//!
//! This is the foundation crate that all other nastrajacz crates depend on.
//! It provides:
//! - Base error types
//! - Transfer direction
//! - Home directory expansion and path helpers
//!
//! This crate has no dependencies on other nastrajacz crates.

pub mod direction;
pub mod error;
pub mod path;

pub use direction::TransferDirection;
pub use error::{Error, Result};
