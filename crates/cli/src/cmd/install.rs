//! Install command implementation
//!
//! Writes a stub for every configured hook into the repository's hooks
//! directory.

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use tego_engine::hooks::InstallOutcome;
use tego_engine::HookInstaller;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::ui::{self, StatusIcon};

/// Install configured hooks into `.git/hooks`
#[derive(Debug, Default, Args)]
pub struct InstallCommand;

impl Command for InstallCommand {
    type Output = InstallOutcome;

    fn execute(&self, context: &RuntimeContext) -> Result<InstallOutcome> {
        let config = context.load_config().context("Cannot install hooks")?;
        let git_dir = context.git_dir().context("Cannot install hooks")?;

        let outcome = HookInstaller::new(&git_dir)
            .install(&config)
            .context("Installation failed")?;

        for hook in &outcome.installed {
            println!("{} Installed {hook}", StatusIcon::Success.get());
        }

        println!();
        println!(
            "{}",
            format!(
                "{} Installed {} hook(s) successfully",
                StatusIcon::Success.get(),
                outcome.count()
            )
            .green()
            .bold()
        );
        println!("\n{}", ui::rule());
        println!("{}", "Hooks are now active! 🎉".cyan());
        println!("Your configured hooks will run automatically on git operations.");
        println!("\nTo skip hooks: TEGO_SKIP=1 git commit -m \"message\"");
        println!("{}", ui::rule());

        Ok(outcome)
    }
}
