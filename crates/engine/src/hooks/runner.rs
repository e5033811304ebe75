//! Hook execution engine
//!
//! Resolves a hook name to its configured commands, substitutes positional
//! placeholders and runs each command through `sh -c`, strictly in order.
//! The first command that fails stops the hook.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tego_config::HookConfig;
use tego_core::constants::HOOK_NAME_ENV;
use tego_core::{Error, Result};

/// Shell used to run every command
const SHELL: &str = "sh";

/// A command about to be executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStep<'a> {
    /// 1-based position in the sequence
    pub index: usize,
    /// Number of commands in the sequence
    pub total: usize,
    /// Command text after placeholder substitution
    pub command: &'a str,
}

impl CommandStep<'_> {
    /// Progress line for this step
    ///
    /// `[i/total] Running: <cmd>` for sequences, `Running: <cmd>` for a
    /// single command.
    #[must_use]
    pub fn announcement(&self) -> String {
        if self.total > 1 {
            format!("[{}/{}] Running: {}", self.index, self.total, self.command)
        } else {
            format!("Running: {}", self.command)
        }
    }
}

/// Receives each command right before it runs
pub trait CommandObserver {
    /// Called once per command, before it is spawned
    fn before_command(&self, step: &CommandStep<'_>);
}

/// Prints each announcement to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintObserver;

impl CommandObserver for PrintObserver {
    fn before_command(&self, step: &CommandStep<'_>) {
        if step.total > 1 {
            println!();
        }
        println!("{}", step.announcement());
    }
}

/// Implement CommandObserver for closures
impl<F> CommandObserver for F
where
    F: Fn(&CommandStep<'_>),
{
    fn before_command(&self, step: &CommandStep<'_>) {
        self(step);
    }
}

/// How a hook run ended, when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The hook has no commands configured; nothing ran
    NotConfigured,
    /// Every command exited successfully
    Completed {
        /// Number of commands executed
        commands: usize,
    },
}

/// Replace positional placeholders in `command`
///
/// `$1`, `$2`, ... are replaced by the matching argument first, then `$@`
/// by all arguments joined with a single space. This is plain text
/// replacement: values are not quoted for the shell, and with ten or more
/// arguments `$1` also matches the start of `$10`.
#[must_use]
pub fn substitute_placeholders(command: &str, args: &[String]) -> String {
    let mut result = command.to_string();

    for (j, arg) in args.iter().enumerate() {
        let placeholder = format!("${}", j + 1);
        result = result.replace(&placeholder, arg);
    }

    result.replace("$@", &args.join(" "))
}

/// Runs the commands configured for a hook
pub struct HookRunner<'a, O = PrintObserver>
where
    O: CommandObserver,
{
    config: &'a HookConfig,
    /// Extra variables for every command, on top of the inherited environment
    env_vars: IndexMap<String, String>,
    working_dir: Option<PathBuf>,
    observer: O,
}

impl<'a> HookRunner<'a, PrintObserver> {
    /// Create a runner that prints progress to stdout
    ///
    /// For custom configuration, use [`HookRunner::builder`].
    pub fn new(config: &'a HookConfig) -> Self {
        Self::builder(config).build()
    }

    /// Create a builder for configuring a `HookRunner`
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let runner = HookRunner::builder(&config)
    ///     .env("CI", "1")
    ///     .observer(|step: &CommandStep<'_>| eprintln!("{}", step.announcement()))
    ///     .build();
    /// runner.run("pre-commit", &[])?;
    /// ```
    pub fn builder(config: &'a HookConfig) -> HookRunnerBuilder<'a, PrintObserver> {
        HookRunnerBuilder::new(config)
    }
}

impl<O> HookRunner<'_, O>
where
    O: CommandObserver,
{
    /// Run the commands configured for `hook_name`
    ///
    /// A hook that is not configured is a successful no-op, so a stub left
    /// behind for a removed hook never blocks git.
    #[tracing::instrument(skip(self, args), fields(args = args.len()))]
    pub fn run(&self, hook_name: &str, args: &[String]) -> Result<RunOutcome> {
        let Some(commands) = self.config.commands(hook_name) else {
            tracing::debug!("Hook not configured, nothing to run");
            return Ok(RunOutcome::NotConfigured);
        };

        let total = commands.len();
        for (i, raw) in commands.iter().enumerate() {
            let command = substitute_placeholders(raw, args);

            self.observer.before_command(&CommandStep {
                index: i + 1,
                total,
                command: &command,
            });

            self.execute_command(hook_name, &command)?;
        }

        Ok(RunOutcome::Completed { commands: total })
    }

    /// Execute one command through the shell
    ///
    /// Standard streams are inherited so interactive tools and colored
    /// output pass straight through.
    fn execute_command(&self, hook_name: &str, command: &str) -> Result<()> {
        tracing::debug!(command, "Executing command");
        let start = std::time::Instant::now();

        // Inner duct env wins, so the hook name goes on first
        let mut expression = duct::cmd(SHELL, ["-c", command]).env(HOOK_NAME_ENV, hook_name);
        for (key, value) in self.env_vars.iter().filter(|(key, _)| *key != HOOK_NAME_ENV) {
            expression = expression.env(key, value);
        }
        if let Some(dir) = &self.working_dir {
            expression = expression.dir(dir);
        }

        let result = expression.run();
        let elapsed_ms = start.elapsed().as_millis();

        match result {
            Ok(_) => {
                tracing::debug!(elapsed_ms, "Command succeeded");
                Ok(())
            }
            Err(e) => {
                tracing::debug!(elapsed_ms, error = %e, "Command failed");
                Err(Error::CommandFailed {
                    command: command.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Builder for creating a `HookRunner` with custom configuration
pub struct HookRunnerBuilder<'a, O = PrintObserver>
where
    O: CommandObserver,
{
    config: &'a HookConfig,
    env_vars: IndexMap<String, String>,
    working_dir: Option<PathBuf>,
    observer: O,
}

impl<'a> HookRunnerBuilder<'a, PrintObserver> {
    /// Create a new builder
    ///
    /// This is typically called via [`HookRunner::builder`].
    pub fn new(config: &'a HookConfig) -> Self {
        Self {
            config,
            env_vars: IndexMap::new(),
            working_dir: None,
            observer: PrintObserver,
        }
    }
}

impl<'a, O> HookRunnerBuilder<'a, O>
where
    O: CommandObserver,
{
    /// Replace the observer that announces each command
    pub fn observer<P>(self, observer: P) -> HookRunnerBuilder<'a, P>
    where
        P: CommandObserver,
    {
        HookRunnerBuilder {
            config: self.config,
            env_vars: self.env_vars,
            working_dir: self.working_dir,
            observer,
        }
    }

    /// Add an environment variable for every command
    ///
    /// `TEGO_HOOK_NAME` is always set to the running hook and cannot be
    /// overridden here.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Run commands in `dir` instead of the current directory
    #[must_use]
    pub fn working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Build the `HookRunner`
    pub fn build(self) -> HookRunner<'a, O> {
        HookRunner {
            config: self.config,
            env_vars: self.env_vars,
            working_dir: self.working_dir,
            observer: self.observer,
        }
    }
}
