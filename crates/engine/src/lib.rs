//! # Tego Engine
//!
//! The hook lifecycle of the tego git hooks manager:
//!
//! - **Git discovery**: locating the git directory for a working tree,
//!   following worktree and submodule `.git` files
//! - **Install**: writing self-identifying stub scripts into the hooks directory
//! - **Uninstall**: removing only the stubs tego wrote
//! - **Run**: executing a hook's command sequence with fail-fast semantics

pub mod git;
pub mod hooks;

// Re-export error types from core
pub use tego_core::{Error, Result};

// Re-export commonly used types
pub use git::{find_git_dir, find_git_dir_from};
pub use hooks::{HookInstaller, HookRunner, HookUninstaller, RunOutcome};
