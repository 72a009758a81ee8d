//! Shared test utilities for the hookcheck workspace.
//!
//! Integration tests drive the tool with fake linter scripts so they control
//! the linter's behavior without requiring a real shellcheck on the host.
//! Script helpers are unix-only (`/bin/sh` + executable bit).

#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};

/// Write a pre-commit manifest fixture into `dir`.
pub fn write_config(dir: &Utf8Path, contents: &str) -> Utf8PathBuf {
    let path = dir.join(".pre-commit-config.yaml");
    std::fs::write(&path, contents).expect("write config fixture");
    path
}

/// Write an executable `/bin/sh` script into `dir`.
#[cfg(unix)]
pub fn write_script(dir: &Utf8Path, name: &str, body: &str) -> Utf8PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, body).expect("write fake linter script");
    let mut perms = std::fs::metadata(&path)
        .expect("fake linter metadata")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("mark fake linter executable");
    path
}

/// Fake linter that stays silent and exits 0 for every file.
#[cfg(unix)]
pub fn silent_linter(dir: &Utf8Path) -> Utf8PathBuf {
    write_script(dir, "silent-shellcheck", "#!/bin/sh\nexit 0\n")
}

/// Fake linter that reports one finding at its internal line 2 for any file
/// containing `needle`, and stays silent otherwise. The header mirrors real
/// shellcheck output (`In <file> line <N>:`), so the temp-path substitution
/// and remapping pipeline see realistic input.
#[cfg(unix)]
pub fn finding_linter(dir: &Utf8Path, needle: &str) -> Utf8PathBuf {
    let body = format!(
        "#!/bin/sh\n\
         if grep -q '{needle}' \"$1\"; then\n\
         \x20 printf '\\nIn %s line 2:\\n' \"$1\"\n\
         \x20 printf '%s\\n' 'some command with ${{VAR}}'\n\
         \x20 printf '%s\\n\\n' '     ^-- SC2086: Double quote to prevent globbing and word splitting.'\n\
         fi\n\
         exit 0\n"
    );
    write_script(dir, "finding-shellcheck", &body)
}

/// Fake linter that writes to stderr, which hookcheck treats as a fatal
/// execution failure.
#[cfg(unix)]
pub fn failing_linter(dir: &Utf8Path) -> Utf8PathBuf {
    write_script(dir, "broken-shellcheck", "#!/bin/sh\necho boom >&2\nexit 1\n")
}
