//! Git directory discovery
//!
//! Walks upward from a starting directory to the `.git` entry that governs
//! it. A `.git` directory is the git directory itself. A `.git` file, as
//! written for worktrees and submodules, points elsewhere with a
//! `gitdir: <path>` line; relative targets are resolved against the
//! directory holding the file.
//!
//! Discovery is read-only and never fails loudly: any I/O problem on the
//! way is reported as "not a git repository".

use std::fs;
use std::path::{Path, PathBuf};

const DOT_GIT: &str = ".git";
const GITDIR_PREFIX: &str = "gitdir:";

/// Find the git directory governing the current working directory
#[must_use]
pub fn find_git_dir() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_git_dir_from(&cwd)
}

/// Find the git directory governing `start`
///
/// Returns `None` when no `.git` entry exists between `start` and the
/// filesystem root.
#[must_use]
pub fn find_git_dir_from(start: &Path) -> Option<PathBuf> {
    let mut dir = std::path::absolute(start).ok()?;

    loop {
        let dot_git = dir.join(DOT_GIT);

        match fs::metadata(&dot_git) {
            Ok(meta) if meta.is_dir() => {
                tracing::debug!(git_dir = %dot_git.display(), "Found .git directory");
                return Some(dot_git);
            }
            Ok(_) => {
                let content = fs::read_to_string(&dot_git).ok()?;
                if let Some(git_dir) = parse_gitdir_file(&content, &dir) {
                    tracing::debug!(
                        git_dir = %git_dir.display(),
                        file = %dot_git.display(),
                        "Resolved .git file indirection"
                    );
                    return Some(git_dir);
                }
                tracing::debug!(file = %dot_git.display(), "Ignoring .git file without gitdir line");
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::debug!(path = %dot_git.display(), error = %e, "Cannot stat .git entry");
                return None;
            }
        }

        match dir.parent() {
            Some(parent) if parent != dir => dir = parent.to_path_buf(),
            _ => return None,
        }
    }
}

/// Parse the content of a `.git` indirection file
///
/// `base` is the directory containing the file; relative targets resolve
/// against it.
#[must_use]
pub fn parse_gitdir_file(content: &str, base: &Path) -> Option<PathBuf> {
    let target = content.strip_prefix(GITDIR_PREFIX)?.trim();
    if target.is_empty() {
        return None;
    }

    let target = Path::new(target);
    if target.is_absolute() {
        Some(target.to_path_buf())
    } else {
        Some(base.join(target))
    }
}

/// The hooks directory inside a git directory
#[must_use]
pub fn hooks_dir(git_dir: &Path) -> PathBuf {
    git_dir.join("hooks")
}
