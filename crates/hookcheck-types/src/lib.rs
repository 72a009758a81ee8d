//! Stable data types used across the hookcheck workspace.
//!
//! This crate is intentionally boring:
//! - the extracted hook entry shape (value + declaration line)
//! - the aggregate verdict and its exit-code mapping

#![forbid(unsafe_code)]

/// A string value together with the 1-based line it was declared on in the
/// original configuration file. Line numbers match a plain text-editor count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spanned {
    pub line: u32,
    pub value: String,
}

impl Spanned {
    pub fn new(line: u32, value: impl Into<String>) -> Self {
        Self {
            line,
            value: value.into(),
        }
    }
}

/// One shell snippet discovered in a hook definition.
///
/// Emitted in document order: repositories outer, hooks inner. Only hooks
/// that carry an `entry` key produce a `HookEntry`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HookEntry {
    /// The hook's `id` field.
    pub id: Spanned,
    /// The hook's `entry` field: the shell command/script to lint.
    pub entry: Spanned,
}

/// Aggregate outcome of a run. `Fail` means at least one entry produced at
/// least one linter finding; it is sticky once seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Exit code for the success path: 0 = no findings, 1 = findings.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Pass => 0,
            Verdict::Fail => 1,
        }
    }

    /// Fold two verdicts; `Fail` dominates regardless of order.
    pub fn combine(self, other: Verdict) -> Verdict {
        if self == Verdict::Fail || other == Verdict::Fail {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(Verdict::Pass.exit_code(), 0);
        assert_eq!(Verdict::Fail.exit_code(), 1);
    }

    #[test]
    fn fail_is_sticky_in_either_position() {
        assert_eq!(Verdict::Pass.combine(Verdict::Pass), Verdict::Pass);
        assert_eq!(Verdict::Pass.combine(Verdict::Fail), Verdict::Fail);
        assert_eq!(Verdict::Fail.combine(Verdict::Pass), Verdict::Fail);
        assert_eq!(Verdict::Fail.combine(Verdict::Fail), Verdict::Fail);
    }
}
