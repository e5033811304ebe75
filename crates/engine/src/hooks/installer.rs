//! Hook installation
//!
//! Writes one stub per configured hook into `<git dir>/hooks`. Installation
//! is best-effort across hooks: a stub that cannot be written is reported
//! and the remaining hooks are still installed. An existing file at a hook
//! path is overwritten without inspection; a symlink there is replaced, its
//! target is left alone.

use super::stub;
use std::fs;
use std::path::{Path, PathBuf};
use tego_config::HookConfig;
use tego_core::constants::PROGRAM_NAME;
use tego_core::{Error, Result};

/// Mode for written stubs
#[cfg(unix)]
const STUB_MODE: u32 = 0o755;

/// Result of an install pass
#[derive(Debug, Default)]
pub struct InstallOutcome {
    /// Hooks whose stub was written
    pub installed: Vec<String>,
    /// Hooks whose stub could not be written
    pub failed: Vec<(String, Error)>,
}

impl InstallOutcome {
    /// Number of stubs written
    #[must_use]
    pub fn count(&self) -> usize {
        self.installed.len()
    }
}

/// Installs hook stubs into a git directory
#[derive(Debug, Clone)]
pub struct HookInstaller {
    git_dir: PathBuf,
    executable: Option<PathBuf>,
}

impl HookInstaller {
    /// Create an installer for `git_dir`
    pub fn new(git_dir: impl Into<PathBuf>) -> Self {
        Self {
            git_dir: git_dir.into(),
            executable: None,
        }
    }

    /// Embed this executable in stubs instead of resolving one
    #[must_use]
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = Some(executable.into());
        self
    }

    /// Directory the stubs are written to
    #[must_use]
    pub fn hooks_dir(&self) -> PathBuf {
        crate::git::hooks_dir(&self.git_dir)
    }

    /// Install a stub for every hook named in `config`
    pub fn install(&self, config: &HookConfig) -> Result<InstallOutcome> {
        self.install_hooks(config.hook_names())
    }

    /// Install a stub for each of `hook_names`
    ///
    /// Fails up front when the hooks directory cannot be created or no
    /// executable can be located, and at the end when not a single stub
    /// was written.
    #[tracing::instrument(skip_all, fields(git_dir = %self.git_dir.display()))]
    pub fn install_hooks<'a, I>(&self, hook_names: I) -> Result<InstallOutcome>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let hooks_dir = self.hooks_dir();
        fs::create_dir_all(&hooks_dir).map_err(|source| Error::HooksDirCreate {
            path: hooks_dir.clone(),
            source,
        })?;

        let executable = match &self.executable {
            Some(path) => path.clone(),
            None => resolve_executable()?,
        };
        tracing::debug!(executable = %executable.display(), "Using tego executable");

        let mut outcome = InstallOutcome::default();
        for hook_name in hook_names {
            match write_stub(&hooks_dir, &executable, hook_name) {
                Ok(path) => {
                    tracing::debug!(hook = hook_name, path = %path.display(), "Installed hook");
                    outcome.installed.push(hook_name.to_string());
                }
                Err(e) => {
                    tracing::warn!(hook = hook_name, error = %e, "Failed to install hook");
                    outcome.failed.push((hook_name.to_string(), e));
                }
            }
        }

        if outcome.installed.is_empty() {
            return Err(Error::NoHooksInstalled);
        }

        Ok(outcome)
    }
}

/// Locate the executable stubs should call
///
/// Prefers a `tego` found on `PATH`, falling back to the running binary.
pub fn resolve_executable() -> Result<PathBuf> {
    which::which(PROGRAM_NAME)
        .or_else(|which_err| {
            tracing::debug!(error = %which_err, "tego not on PATH, using current executable");
            std::env::current_exe()
        })
        .map_err(|e| Error::ExecutableNotFound(e.to_string()))
}

fn write_stub(hooks_dir: &Path, executable: &Path, hook_name: &str) -> Result<PathBuf> {
    stub::validate_hook_name(hook_name)?;

    let path = hooks_dir.join(hook_name);
    let script = stub::render(executable, hook_name);

    let write_err = |source| Error::HookWrite {
        hook: hook_name.to_string(),
        source,
    };

    // Replace a symlinked hook itself, never the file it points to
    if fs::symlink_metadata(&path).is_ok_and(|meta| meta.file_type().is_symlink()) {
        fs::remove_file(&path).map_err(write_err)?;
    }

    fs::write(&path, script).map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(STUB_MODE)).map_err(write_err)?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use tego_config::CommandSpec;
    use tempfile::TempDir;

    fn config(names: &[&str]) -> HookConfig {
        names
            .iter()
            .map(|name| ((*name).to_string(), CommandSpec::Single("true".to_string())))
            .collect()
    }

    fn installer(temp: &TempDir) -> HookInstaller {
        HookInstaller::new(temp.path().join(".git")).with_executable("/usr/local/bin/tego")
    }

    #[test]
    fn test_install_creates_hooks_dir() {
        let temp = TempDir::new().unwrap();
        let outcome = installer(&temp).install(&config(&["pre-commit"])).unwrap();

        assert_eq!(outcome.count(), 1);
        assert!(temp.path().join(".git/hooks").is_dir());
    }

    #[test]
    fn test_install_writes_one_stub_per_hook() {
        let temp = TempDir::new().unwrap();
        let outcome = installer(&temp)
            .install(&config(&["pre-commit", "pre-push"]))
            .unwrap();

        assert_eq!(outcome.installed, vec!["pre-commit", "pre-push"]);
        assert!(outcome.failed.is_empty());

        let entries = fs::read_dir(temp.path().join(".git/hooks")).unwrap().count();
        assert_eq!(entries, 2);

        for hook in ["pre-commit", "pre-push"] {
            let content = fs::read_to_string(temp.path().join(".git/hooks").join(hook)).unwrap();
            assert!(content.contains("Installed by Tego"));
            assert!(content.ends_with(&format!("run {hook} \"$@\"\n")));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_stub_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        installer(&temp).install(&config(&["pre-commit"])).unwrap();

        let mode = fs::metadata(temp.path().join(".git/hooks/pre-commit"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o100, 0o100);
    }

    #[test]
    fn test_install_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let hooks_dir = temp.path().join(".git/hooks");
        fs::create_dir_all(&hooks_dir).unwrap();
        fs::write(hooks_dir.join("pre-commit"), "#!/bin/sh\necho mine\n").unwrap();

        installer(&temp).install(&config(&["pre-commit"])).unwrap();

        let content = fs::read_to_string(hooks_dir.join("pre-commit")).unwrap();
        assert!(content.contains("Installed by Tego"));
        assert!(!content.contains("echo mine"));
    }

    #[cfg(unix)]
    #[test]
    fn test_install_replaces_symlinked_hook_not_its_target() {
        let temp = TempDir::new().unwrap();
        let hooks_dir = temp.path().join(".git/hooks");
        fs::create_dir_all(&hooks_dir).unwrap();
        fs::create_dir_all(temp.path().join("scripts")).unwrap();
        let tracked = temp.path().join("scripts/pre-commit");
        fs::write(&tracked, "#!/bin/sh\necho mine\n").unwrap();
        std::os::unix::fs::symlink(&tracked, hooks_dir.join("pre-commit")).unwrap();

        installer(&temp).install(&config(&["pre-commit"])).unwrap();

        let hook = hooks_dir.join("pre-commit");
        assert!(!fs::symlink_metadata(&hook).unwrap().file_type().is_symlink());
        assert!(fs::read_to_string(&hook).unwrap().contains("Installed by Tego"));
        assert_eq!(fs::read_to_string(&tracked).unwrap(), "#!/bin/sh\necho mine\n");
    }

    #[test]
    fn test_install_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let installer = installer(&temp);
        let cfg = config(&["pre-commit"]);

        installer.install(&cfg).unwrap();
        let first = fs::read_to_string(temp.path().join(".git/hooks/pre-commit")).unwrap();
        installer.install(&cfg).unwrap();
        let second = fs::read_to_string(temp.path().join(".git/hooks/pre-commit")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_config_installs_nothing() {
        let temp = TempDir::new().unwrap();
        let err = installer(&temp).install(&HookConfig::default()).unwrap_err();
        assert!(matches!(err, Error::NoHooksInstalled));
    }

    #[test]
    fn test_single_failure_does_not_abort_batch() {
        let temp = TempDir::new().unwrap();
        let hooks_dir = temp.path().join(".git/hooks");
        // A directory where a stub should go makes that one write fail
        fs::create_dir_all(hooks_dir.join("pre-push")).unwrap();

        let outcome = installer(&temp)
            .install(&config(&["pre-push", "pre-commit"]))
            .unwrap();

        assert_eq!(outcome.installed, vec!["pre-commit"]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].0, "pre-push");
        assert!(matches!(outcome.failed[0].1, Error::HookWrite { .. }));
    }

    #[test]
    fn test_all_failures_report_no_hooks_installed() {
        let temp = TempDir::new().unwrap();
        let err = installer(&temp)
            .install_hooks(["../escape", ""])
            .unwrap_err();

        assert!(matches!(err, Error::NoHooksInstalled));
        assert!(!temp.path().join(".git/escape").exists());
    }

    #[test]
    fn test_hooks_dir_creation_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        // A regular file named .git blocks creating .git/hooks
        fs::write(temp.path().join(".git"), "gitdir: elsewhere").unwrap();

        let err = installer(&temp).install(&config(&["pre-commit"])).unwrap_err();
        assert!(matches!(err, Error::HooksDirCreate { .. }));
    }

    #[test]
    fn test_resolve_executable_finds_something() {
        let path = resolve_executable().unwrap();
        assert!(path.is_absolute());
    }
}
