//! Init command implementation
//!
//! Writes the sample configuration into the working directory.

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::OwoColorize;
use tego_config::{SAMPLE_CONFIG_FILE, write_sample};

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::ui::{self, StatusIcon};

/// Create a sample configuration file
#[derive(Debug, Default, Args)]
pub struct InitCommand;

impl Command for InitCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let path = write_sample(&context.working_dir)
            .with_context(|| format!("Cannot create {SAMPLE_CONFIG_FILE}"))?;
        tracing::debug!(path = %path.display(), "Wrote sample config");

        println!(
            "{}",
            format!("{} Created {SAMPLE_CONFIG_FILE}", StatusIcon::Success.get())
                .green()
                .bold()
        );
        println!("\n{}", ui::rule());
        println!("{}", "Next steps:".cyan());
        println!("  1. Edit {SAMPLE_CONFIG_FILE} to configure your hooks");
        println!("  2. Run 'tego install' to activate the hooks");
        println!("  3. Try making a commit!");
        println!("{}", ui::rule());

        Ok(())
    }
}
