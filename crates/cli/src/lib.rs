//! Tego CLI library
//!
//! This library contains all the CLI logic for tego, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;
pub mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use command::Command;
use common::RuntimeContext;
use tego_core::constants::{SKIP_ENV, is_skip_value};

/// Tego - a minimal git hooks manager
#[derive(Parser)]
#[command(name = "tego")]
#[command(about = "Minimal Git Hooks Manager for Any Language")]
#[command(version)]
#[command(long_about = "Minimal Git Hooks Manager for Any Language

Tego reads hook commands from .tegorc.json, .tegorc, tego.json, tego.toml,
tego.yaml or tego.yml in your project root and installs small stubs into
.git/hooks that call back into tego.

Examples:
  • tego init && tego install
      → Set up Tego in your project

  • tego run pre-commit
      → Run a specific hook manually

  • TEGO_SKIP=1 git commit -m \"skip hooks\"
      → Skip hooks for a single commit")]
pub struct Cli {
    /// Path to the config file, bypassing discovery
    #[arg(long, env = "TEGO_CONFIG", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "TEGO_LOG_FILE", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for tego CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample .tegorc.json config
    Init(cmd::init::InitCommand),

    /// Install hooks to .git/hooks
    Install(cmd::install::InstallCommand),

    /// Remove hooks from .git/hooks
    Uninstall(cmd::uninstall::UninstallCommand),

    /// Run a specific hook manually
    Run(cmd::run::RunCommand),

    /// List all configured hooks
    List(cmd::list::ListCommand),

    /// Show version
    Version,
}

/// Whether `TEGO_SKIP` asks for every invocation to be a no-op
#[must_use]
pub fn skip_requested() -> bool {
    std::env::var(SKIP_ENV).is_ok_and(|value| is_skip_value(&value))
}

/// Version line printed by `tego version`
#[must_use]
pub fn version_line() -> String {
    format!("tego v{}", env!("CARGO_PKG_VERSION"))
}

/// Main entry point for the CLI logic
///
/// # Errors
///
/// Returns an error if logging cannot be initialized or the command fails.
pub fn run(cli: Cli) -> Result<()> {
    tego_config::logging::init(cli.verbose, cli.log_file.as_deref())?;

    let context = RuntimeContext::from_cwd(cli.config)?;
    execute_command(&cli.command, &context)
}

fn execute_command(command: &Commands, context: &RuntimeContext) -> Result<()> {
    match command {
        Commands::Init(cmd) => cmd.execute(context),
        Commands::Install(cmd) => cmd.execute(context).map(|_| ()),
        Commands::Uninstall(cmd) => cmd.execute(context).map(|_| ()),
        Commands::Run(cmd) => cmd.execute(context).map(|_| ()),
        Commands::List(cmd) => cmd.execute(context),
        Commands::Version => {
            println!("{}", version_line());
            Ok(())
        }
    }
}
