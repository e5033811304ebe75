//! Fixed names shared by the installer, uninstaller, runner and CLI.

/// Canonical program name, looked up on `PATH` when writing stubs.
pub const PROGRAM_NAME: &str = "tego";

/// Marker written into every generated stub.
///
/// The uninstaller matches this text verbatim, so it must never change.
pub const SIGNATURE_MARKER: &str = "Installed by Tego";

/// Reference URL printed under the marker in every stub.
pub const PROJECT_URL: &str = "https://github.com/veri5ied/tego";

/// Set for every command a hook spawns.
pub const HOOK_NAME_ENV: &str = "TEGO_HOOK_NAME";

/// Global bypass switch, honored before any other work.
pub const SKIP_ENV: &str = "TEGO_SKIP";

/// Hooks removed by `uninstall` when no configuration can be loaded.
pub const COMMON_HOOKS: &[&str] = &[
    "pre-commit",
    "commit-msg",
    "pre-push",
    "post-commit",
    "post-merge",
    "pre-rebase",
];

/// Returns true when `value` of [`SKIP_ENV`] requests a bypass.
#[must_use]
pub fn is_skip_value(value: &str) -> bool {
    matches!(value, "1" | "true")
}
