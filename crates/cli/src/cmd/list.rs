//! List command implementation
//!
//! Prints the configured hooks and their commands in configuration order.

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use std::fmt::Write as _;
use tego_config::{CommandSpec, HookConfig};

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::ui;

/// List all configured hooks
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format (simple, json)
    #[arg(short, long, default_value = "simple")]
    pub format: String,
}

impl Default for ListCommand {
    fn default() -> Self {
        Self {
            format: "simple".to_string(),
        }
    }
}

impl Command for ListCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let config = context.load_config()?;

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&config)?),
            _ => print!("{}", render_simple(&config)),
        }

        Ok(())
    }
}

/// Human-readable listing
///
/// A single command is shown with an arrow, a sequence as a numbered list.
/// Hooks whose value was not understood are listed by name only.
pub fn render_simple(config: &HookConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Configured hooks:".cyan());
    let _ = writeln!(out, "{}", ui::rule());

    if config.is_empty() {
        let _ = writeln!(out, "{}", "No hooks configured".yellow());
        return out;
    }

    for (name, spec) in config.iter() {
        let _ = writeln!(out, "\n{}:", name.cyan());
        match spec {
            Some(CommandSpec::Single(command)) => {
                let _ = writeln!(out, "  → {command}");
            }
            Some(CommandSpec::Sequence(commands)) => {
                for (i, command) in commands.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {command}", i + 1);
                }
            }
            None => {}
        }
    }
    let _ = writeln!(out);

    out
}
