//! Shared runtime state for commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tego_config::HookConfig;
use tego_core::Error;

/// State shared by every command invocation
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    /// Directory configuration discovery and git lookup start from
    pub working_dir: PathBuf,
    /// Explicit config file, bypassing discovery
    pub config_path: Option<PathBuf>,
}

impl RuntimeContext {
    /// Build a context rooted at the process working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_cwd(config_path: Option<PathBuf>) -> Result<Self> {
        let working_dir =
            std::env::current_dir().context("Failed to determine current directory")?;
        Ok(Self::new(working_dir, config_path))
    }

    /// Build a context rooted at `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>, config_path: Option<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            config_path,
        }
    }

    /// Load the hook configuration
    ///
    /// Uses the explicit path when one was given, discovery otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when discovery finds nothing, or the read or
    /// parse error of the chosen file.
    pub fn load_config(&self) -> tego_core::Result<HookConfig> {
        match &self.config_path {
            Some(path) => HookConfig::load_from(&self.resolve(path)),
            None => HookConfig::load(&self.working_dir),
        }
    }

    /// Locate the git directory for the working directory
    ///
    /// # Errors
    ///
    /// Returns `NotAGitRepository` when no `.git` entry exists up to the root.
    pub fn git_dir(&self) -> tego_core::Result<PathBuf> {
        tego_engine::find_git_dir_from(&self.working_dir).ok_or(Error::NotAGitRepository)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}
