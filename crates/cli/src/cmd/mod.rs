//! CLI command implementations
//!
//! This module contains all command implementations for the nastrajacz CLI.

pub mod apply;
pub mod fetch;
pub mod list;

pub use apply::ApplyCommand;
pub use fetch::FetchCommand;
pub use list::ListCommand;

use crate::common::RuntimeContext;
use crate::error::Result;
use crate::ui::StatusPrinter;
use nastrajacz_core::TransferDirection;
use nastrajacz_engine::{RealSystem, ShellExecutor, TransferEngine, TransferReport};

/// Run a transfer over the selected fragments, printing status to stdout
fn transfer(direction: TransferDirection, context: &RuntimeContext) -> Result<TransferReport> {
    let engine = TransferEngine::new(context.layout.clone(), RealSystem, ShellExecutor::new());
    let mut printer = StatusPrinter::stdout(context.show_icons);

    let report = engine.run(direction, &context.selected(), &mut printer)?;

    if report.has_failures() {
        tracing::debug!(%direction, "Transfer finished with failed steps");
    }

    Ok(report)
}
