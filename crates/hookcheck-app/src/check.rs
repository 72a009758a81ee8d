//! The `check` use case: lint every hook entry and aggregate the result.

use crate::FatalError;
use camino::Utf8Path;
use hookcheck_types::{HookEntry, Verdict};
use std::io::Write;
use std::process::Command;

/// One-line prefix written before each snippet so the linter sees a shell
/// script. The remap arithmetic's `-2` is `prefix line count - 1`; changing
/// this template means re-deriving that constant in `hookcheck-domain`.
const SNIPPET_PREFIX: &str = "#!/bin/sh\n";

/// Input for the check use case.
#[derive(Clone, Copy, Debug)]
pub struct CheckInput<'a> {
    /// Path of the pre-commit manifest to check.
    pub path: &'a Utf8Path,
    /// Linter executable to invoke (name on PATH or explicit path).
    pub linter: &'a str,
}

/// Output from the check use case: the concatenated remapped linter output,
/// in entry order, and the worst verdict seen.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub text: String,
    pub verdict: Verdict,
}

/// Run the check use case: parse the manifest, extract entries, lint each one
/// sequentially in document order.
pub fn run_check(input: CheckInput<'_>) -> Result<CheckOutput, FatalError> {
    let text = std::fs::read_to_string(input.path).map_err(|_| FatalError::FileNotFound {
        path: input.path.to_owned(),
    })?;

    let doc = hookcheck_yaml::parse(&text).map_err(|_| FatalError::NotYaml {
        path: input.path.to_owned(),
    })?;
    let Some(doc) = doc else {
        // Empty manifest: nothing to lint, run completes clean.
        return Ok(CheckOutput {
            text: String::new(),
            verdict: Verdict::Pass,
        });
    };

    let entries =
        hookcheck_domain::find_entries(&doc).map_err(|_| FatalError::MalformedStructure {
            path: input.path.to_owned(),
        })?;

    let mut out = String::new();
    let mut verdict = Verdict::Pass;
    for entry in &entries {
        let (entry_text, entry_verdict) = lint_entry(entry, input.linter)?;
        out.push_str(&entry_text);
        verdict = verdict.combine(entry_verdict);
    }

    Ok(CheckOutput { text: out, verdict })
}

/// Lint one entry against a temp file scoped to this invocation. The temp
/// file is removed on every exit path, fatal aborts included.
fn lint_entry(entry: &HookEntry, linter: &str) -> Result<(String, Verdict), FatalError> {
    let mut script = tempfile::NamedTempFile::new().map_err(|err| execution_failed(entry, &err))?;
    script
        .write_all(SNIPPET_PREFIX.as_bytes())
        .and_then(|()| script.write_all(entry.entry.value.as_bytes()))
        .and_then(|()| script.flush())
        .map_err(|err| execution_failed(entry, &err))?;

    let output = Command::new(linter)
        .arg(script.path())
        .output()
        .map_err(|_| FatalError::LinterNotFound {
            executable: linter.to_string(),
        })?;

    if !output.stderr.is_empty() {
        return Err(FatalError::LinterExecutionFailed {
            id: entry.id.value.clone(),
            line: entry.entry.line,
            detail: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    // The linter reports against the temp path; name the entry instead so the
    // remapped diagnostics read against the original manifest.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let temp_path = script.path().to_string_lossy();
    let named = stdout.replace(temp_path.as_ref(), &format!("entry \"{}\"", entry.id.value));

    Ok(hookcheck_domain::remap(entry, &named))
}

fn execution_failed(entry: &HookEntry, err: &std::io::Error) -> FatalError {
    FatalError::LinterExecutionFailed {
        id: entry.id.value.clone(),
        line: entry.entry.line,
        detail: err.to_string(),
    }
}
