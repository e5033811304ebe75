//! Run command implementation
//!
//! Executes the commands configured for one hook. This is what installed
//! stubs call, with git's hook arguments forwarded after the hook name.

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use tego_engine::{HookRunner, RunOutcome};

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::ui::StatusIcon;

/// Run a specific hook manually
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Hook name, e.g. pre-commit
    #[arg(value_name = "HOOK")]
    pub hook: String,

    /// Arguments git passed to the hook
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Command for RunCommand {
    type Output = RunOutcome;

    fn execute(&self, context: &RuntimeContext) -> Result<RunOutcome> {
        let config = context.load_config()?;

        let runner = HookRunner::builder(&config)
            .working_dir(&context.working_dir)
            .build();
        let outcome = runner
            .run(&self.hook, &self.args)
            .with_context(|| format!("Hook '{}' failed", self.hook))?;

        if let RunOutcome::Completed { commands } = &outcome {
            tracing::debug!(hook = %self.hook, commands, "Hook completed");
        }
        println!(
            "{}",
            format!("{} Hook '{}' passed", StatusIcon::Success.get(), self.hook)
                .green()
                .bold()
        );

        Ok(outcome)
    }
}
