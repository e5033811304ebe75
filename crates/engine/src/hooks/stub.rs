//! Hook stub scripts
//!
//! A stub is the small POSIX shell script placed at `<git dir>/hooks/<name>`.
//! It carries the signature marker that proves tego wrote it and hands the
//! hook invocation back to the tego executable.

use std::path::Path;
use tego_core::constants::{PROJECT_URL, SIGNATURE_MARKER};
use tego_core::{Error, Result};

/// Render the stub script for `hook_name`
///
/// The executable path and hook name are shell-quoted only when they need
/// it, so a typical stub ends with `run <hook> "$@"`.
#[must_use]
pub fn render(executable: &Path, hook_name: &str) -> String {
    let executable = executable.to_string_lossy();
    format!(
        "#!/bin/sh\n\
         # {SIGNATURE_MARKER}\n\
         # {PROJECT_URL}\n\
         \n\
         {} run {} \"$@\"\n",
        shell_words::quote(&executable),
        shell_words::quote(hook_name),
    )
}

/// Whether `content` carries the signature marker
#[must_use]
pub fn is_tego_stub(content: &[u8]) -> bool {
    let marker = SIGNATURE_MARKER.as_bytes();
    content.windows(marker.len()).any(|window| window == marker)
}

/// Reject hook names that would not map to a single file in the hooks directory
pub fn validate_hook_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');

    if invalid {
        return Err(Error::InvalidHookName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_render_layout() {
        let script = render(Path::new("/usr/local/bin/tego"), "pre-commit");

        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[0], "#!/bin/sh");
        assert_eq!(lines[1], "# Installed by Tego");
        assert_eq!(lines[2], "# https://github.com/veri5ied/tego");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "/usr/local/bin/tego run pre-commit \"$@\"");
        assert!(script.ends_with("run pre-commit \"$@\"\n"));
    }

    #[test]
    fn test_render_quotes_paths_with_spaces() {
        let script = render(Path::new("/opt/my tools/tego"), "pre-push");
        assert!(script.contains("'/opt/my tools/tego' run pre-push \"$@\""));
    }

    #[test]
    fn test_rendered_stub_is_recognized() {
        let script = render(Path::new("/bin/tego"), "commit-msg");
        assert!(is_tego_stub(script.as_bytes()));
    }

    #[test]
    fn test_foreign_script_is_not_recognized() {
        assert!(!is_tego_stub(b"#!/bin/sh\nnpx lint-staged\n"));
        assert!(!is_tego_stub(b"# installed by tego\n"));
        assert!(!is_tego_stub(b""));
    }

    #[test]
    fn test_marker_found_in_non_utf8_content() {
        let mut content = vec![0xff, 0xfe, 0x00];
        content.extend_from_slice(b"# Installed by Tego\n");
        assert!(is_tego_stub(&content));
    }

    #[test]
    fn test_validate_hook_name() {
        assert!(validate_hook_name("pre-commit").is_ok());
        assert!(validate_hook_name("post-rewrite").is_ok());

        for name in ["", ".", "..", "../pre-commit", "a/b", "a\\b"] {
            let err = validate_hook_name(name).unwrap_err();
            assert!(matches!(err, Error::InvalidHookName(_)), "{name:?}");
        }
    }
}
