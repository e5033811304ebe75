//! Uninstall command implementation
//!
//! Removes stubs written by tego. Hooks without the tego marker are left in
//! place.

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use tego_engine::HookUninstaller;
use tego_engine::hooks::UninstallOutcome;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::ui::StatusIcon;

/// Remove tego hooks from `.git/hooks`
#[derive(Debug, Default, Args)]
pub struct UninstallCommand;

impl Command for UninstallCommand {
    type Output = UninstallOutcome;

    fn execute(&self, context: &RuntimeContext) -> Result<UninstallOutcome> {
        let git_dir = context.git_dir().context("Cannot uninstall hooks")?;

        let config = match context.load_config() {
            Ok(config) => Some(config),
            Err(e) => {
                println!(
                    "{}",
                    format!("{} Warning: {e}", StatusIcon::Warning.get()).yellow()
                );
                println!("Will try to remove common hooks...");
                None
            }
        };

        let outcome = HookUninstaller::new(&git_dir).uninstall(config.as_ref());

        for hook in &outcome.removed {
            println!("{} Removed {hook}", StatusIcon::Success.get());
        }
        for hook in &outcome.foreign {
            println!(
                "{} Kept {hook}: not installed by Tego",
                StatusIcon::Info.get()
            );
        }

        println!();
        if outcome.count() == 0 {
            println!(
                "{}",
                format!("{} No Tego hooks found", StatusIcon::Info.get()).cyan()
            );
        } else {
            println!(
                "{}",
                format!("{} Removed {} hook(s)", StatusIcon::Success.get(), outcome.count())
                    .green()
                    .bold()
            );
        }

        Ok(outcome)
    }
}
