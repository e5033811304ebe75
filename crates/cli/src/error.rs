//! Error presentation for the CLI
//!
//! Commands return `anyhow` errors. At exit the chain is flattened into a
//! single miette diagnostic, with a hint attached for the failures a user
//! can fix directly.

use miette::{MietteDiagnostic, Report};
use tego_core::Error;

/// Hint shown under an error, if the root cause has an obvious fix
#[must_use]
pub fn hint(err: &anyhow::Error) -> Option<&'static str> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .and_then(|err| match err {
            Error::ConfigNotFound => Some("Run 'tego init' to create a config file"),
            Error::NotAGitRepository => Some("Run 'git init' first"),
            Error::ConfigExists { .. } => Some("Edit the existing file instead"),
            _ => None,
        })
}

/// Convert an error chain into a one-line miette report
#[must_use]
pub fn to_report(err: &anyhow::Error) -> Report {
    let mut diagnostic = MietteDiagnostic::new(format!("{err:#}"));
    if let Some(help) = hint(err) {
        diagnostic = diagnostic.with_help(help);
    }
    Report::new(diagnostic)
}
