//! Apply command implementation
//!
//! Copy the repository copy of every selected fragment into the home
//! directory.

use nastrajacz_core::TransferDirection;
use nastrajacz_engine::TransferReport;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Apply configuration stored in the repository
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyCommand;

impl Command for ApplyCommand {
    type Output = TransferReport;

    fn execute(&self, context: &RuntimeContext) -> Result<TransferReport> {
        super::transfer(TransferDirection::Apply, context)
    }
}
