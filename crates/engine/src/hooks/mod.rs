//! Hook lifecycle
//!
//! ## Module Organization
//!
//! - `stub`: the generated shell script and its signature marker
//! - `installer`: writes stubs into the hooks directory
//! - `uninstaller`: removes stubs tego wrote, and nothing else
//! - `runner`: resolves and executes a hook's commands

pub mod installer;
pub mod runner;
pub mod stub;
pub mod uninstaller;

// Re-export main types for convenience
pub use installer::{HookInstaller, InstallOutcome, resolve_executable};
pub use runner::{
    CommandObserver, CommandStep, HookRunner, HookRunnerBuilder, PrintObserver, RunOutcome,
    substitute_placeholders,
};
pub use uninstaller::{HookUninstaller, UninstallOutcome};
