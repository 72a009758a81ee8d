//! Rewrites linter-reported line numbers into original-file line numbers.

use hookcheck_types::{HookEntry, Verdict};
use regex::Regex;
use std::sync::LazyLock;

/// Matches one finding header in the linter's free-text output, e.g.
/// `In entry "removestar" line 2:`. Group 1 is the `line <N>` phrase used for
/// textual replacement, group 2 the reported number itself.
static FINDING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"In entry ".*" (line (\d+))"#).expect("pattern is valid"));

/// Remap the linter output for one entry back onto the original file.
///
/// The linter saw a temp file of the form `#!/bin/sh` + snippet, so its line
/// numbers are off by the one-line shebang prefix plus the one-line offset
/// between the `entry:` key line and the snippet's first temp-file line:
/// `corrected = entry_declared_line + reported_line - 2`.
///
/// Replacement is purely textual: every occurrence of each matched
/// `line <N>` substring is rewritten to `on line <corrected>`. No occurrence
/// at all means the linter had nothing to say about this entry.
pub fn remap(entry: &HookEntry, linter_output: &str) -> (String, Verdict) {
    let findings: Vec<(String, i64)> = FINDING_LINE
        .captures_iter(linter_output)
        .filter_map(|caps| {
            let phrase = caps.get(1)?.as_str().to_string();
            let reported: i64 = caps.get(2)?.as_str().parse().ok()?;
            Some((phrase, reported))
        })
        .collect();

    if findings.is_empty() {
        return (linter_output.to_string(), Verdict::Pass);
    }

    let mut text = linter_output.to_string();
    for (phrase, reported) in findings {
        let corrected = i64::from(entry.entry.line) + reported - 2;
        text = text.replace(&phrase, &format!("on line {corrected}"));
    }

    (text, Verdict::Fail)
}
