//! CLI command implementations
//!
//! One module per subcommand of the tego CLI.

pub mod init;
pub mod install;
pub mod list;
pub mod run;
pub mod uninstall;
