//! Command trait for the nastrajacz CLI
//!
//! Every mode (`--apply`, `--fetch`, `--list`) is a command executed against
//! the shared [`RuntimeContext`].

use crate::common::RuntimeContext;
use crate::error::Result;

/// Trait for all nastrajacz commands
///
/// Commands can specify their return type via the `Output` associated type.
///
/// # Example
///
/// ```rust,ignore
/// use crate::command::Command;
/// use crate::common::RuntimeContext;
/// use crate::error::Result;
///
/// pub struct CountCommand;
///
/// impl Command for CountCommand {
///     type Output = usize;
///
///     fn execute(&self, context: &RuntimeContext) -> Result<usize> {
///         Ok(context.selected().len())
///     }
/// }
/// ```
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command with the given runtime context
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the command fails to execute.
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}
