//! Command trait for the tego CLI
//!
//! Every subcommand implements `Command`, receiving the shared
//! `RuntimeContext` built once from the global flags.

use crate::common::RuntimeContext;
use anyhow::Result;

/// Trait for all tego commands
///
/// # Example
///
/// ```rust,ignore
/// use crate::command::Command;
/// use crate::common::RuntimeContext;
/// use anyhow::Result;
/// use clap::Args;
///
/// #[derive(Debug, Args)]
/// pub struct MyCommand;
///
/// impl Command for MyCommand {
///     type Output = ();
///
///     fn execute(&self, context: &RuntimeContext) -> Result<()> {
///         let config = context.load_config()?;
///         Ok(())
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
    /// Returns an error if the command cannot complete. Hook failures are
    /// returned as errors so the process exits non-zero.
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}
