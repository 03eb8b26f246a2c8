//! Fetch command implementation
//!
//! Copy the current configuration from the home directory into the
//! repository.

use nastrajacz_core::TransferDirection;
use nastrajacz_engine::TransferReport;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Fetch actual configuration and store it in the repository
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchCommand;

impl Command for FetchCommand {
    type Output = TransferReport;

    fn execute(&self, context: &RuntimeContext) -> Result<TransferReport> {
        super::transfer(TransferDirection::Fetch, context)
    }
}
