//! Hook removal
//!
//! Only stubs carrying the signature marker are deleted. A hook written by
//! hand or by another tool is left exactly as it is. Removal never fails as
//! a whole; problems with individual files are logged and collected.

use super::stub;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tego_config::HookConfig;
use tego_core::Error;
use tego_core::constants::COMMON_HOOKS;

/// Result of an uninstall pass
#[derive(Debug, Default)]
pub struct UninstallOutcome {
    /// Hooks whose stub was deleted
    pub removed: Vec<String>,
    /// Hooks present on disk but not written by tego, left untouched
    pub foreign: Vec<String>,
    /// Hooks that could not be read or deleted
    pub failed: Vec<(String, Error)>,
}

impl UninstallOutcome {
    /// Number of files deleted
    #[must_use]
    pub fn count(&self) -> usize {
        self.removed.len()
    }
}

/// Removes tego stubs from a git directory
#[derive(Debug, Clone)]
pub struct HookUninstaller {
    git_dir: PathBuf,
}

impl HookUninstaller {
    /// Create an uninstaller for `git_dir`
    pub fn new(git_dir: impl Into<PathBuf>) -> Self {
        Self {
            git_dir: git_dir.into(),
        }
    }

    /// Remove stubs for the hooks named in `config`
    ///
    /// Without a config the common hook names are checked instead, so
    /// cleanup still works after the config file is gone or broken.
    pub fn uninstall(&self, config: Option<&HookConfig>) -> UninstallOutcome {
        match config {
            Some(config) => self.uninstall_hooks(config.hook_names()),
            None => self.uninstall_hooks(COMMON_HOOKS.iter().copied()),
        }
    }

    /// Remove stubs for each of `hook_names`
    #[tracing::instrument(skip_all, fields(git_dir = %self.git_dir.display()))]
    pub fn uninstall_hooks<'a, I>(&self, hook_names: I) -> UninstallOutcome
    where
        I: IntoIterator<Item = &'a str>,
    {
        let hooks_dir = crate::git::hooks_dir(&self.git_dir);
        let mut outcome = UninstallOutcome::default();

        for hook_name in hook_names {
            if let Err(e) = stub::validate_hook_name(hook_name) {
                tracing::warn!(hook = hook_name, error = %e, "Skipping hook");
                outcome.failed.push((hook_name.to_string(), e));
                continue;
            }

            let path = hooks_dir.join(hook_name);
            let content = match fs::read(&path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    tracing::warn!(hook = hook_name, error = %e, "Failed to read hook");
                    outcome.failed.push((hook_name.to_string(), Error::Io(e)));
                    continue;
                }
            };

            if !stub::is_tego_stub(&content) {
                tracing::debug!(hook = hook_name, "Leaving hook not installed by tego");
                outcome.foreign.push(hook_name.to_string());
                continue;
            }

            match fs::remove_file(&path) {
                Ok(()) => {
                    tracing::debug!(hook = hook_name, path = %path.display(), "Removed hook");
                    outcome.removed.push(hook_name.to_string());
                }
                Err(e) => {
                    tracing::warn!(hook = hook_name, error = %e, "Failed to remove hook");
                    outcome.failed.push((hook_name.to_string(), Error::Io(e)));
                }
            }
        }

        outcome
    }
}
