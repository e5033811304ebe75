//! Base error types for tego
//!
//! Every library crate in the workspace returns this error type. The CLI
//! wraps it in `anyhow` for context and renders it once at exit.

use std::path::PathBuf;
use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// No candidate configuration file exists
    #[error("no configuration file found. Run 'tego init' to create one")]
    ConfigNotFound,

    /// A configuration file exists but could not be read
    #[error("error reading {}: {source}", path.display())]
    ConfigRead {
        /// File that was being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// A configuration file exists but does not decode in its detected format
    #[error("error parsing {}: {message}", path.display())]
    ConfigParse {
        /// File that failed to decode
        path: PathBuf,
        /// Decoder message
        message: String,
    },

    /// Refusing to overwrite an existing configuration file
    #[error("config file already exists: {}", path.display())]
    ConfigExists {
        /// The existing configuration file
        path: PathBuf,
    },

    /// No `.git` entry up to the filesystem root
    #[error("not a git repository")]
    NotAGitRepository,

    /// The hooks directory could not be created
    #[error("failed to create hooks directory {}: {source}", path.display())]
    HooksDirCreate {
        /// Hooks directory that could not be created
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Neither a `tego` on PATH nor the running executable could be located
    #[error("cannot locate tego binary: {0}")]
    ExecutableNotFound(String),

    /// Hook name would not map to a single file inside the hooks directory
    #[error("invalid hook name '{0}'")]
    InvalidHookName(String),

    /// Writing a single stub failed
    #[error("failed to install {hook}: {source}")]
    HookWrite {
        /// Hook whose stub was being written
        hook: String,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The install loop finished without writing a single stub
    #[error("no hooks were installed")]
    NoHooksInstalled,

    /// A hook command exited non-zero or could not be started
    #[error("command failed: {command}: {reason}")]
    CommandFailed {
        /// Command text after placeholder substitution
        command: String,
        /// Exit status or spawn error
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
