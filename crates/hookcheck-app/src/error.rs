//! The fatal error taxonomy.
//!
//! All five conditions terminate the run immediately: no retry, no partial
//! recovery. Each carries a distinct exit code, and the `Display` string is
//! the exact one-line stderr diagnostic the CLI emits.

use camino::Utf8PathBuf;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FatalError {
    /// The requested manifest does not exist (or could not be read).
    #[error("No file {path} found")]
    FileNotFound { path: Utf8PathBuf },

    /// The manifest could not be tokenized/parsed as YAML.
    #[error("{path} is not a YAML file")]
    NotYaml { path: Utf8PathBuf },

    /// `repos`/`hooks` are present but structurally unusable.
    #[error("An error happened while checking {path} file: incorrect format")]
    MalformedStructure { path: Utf8PathBuf },

    /// The configured linter executable could not be located/spawned.
    #[error("No shellcheck found: '{executable}'")]
    LinterNotFound { executable: String },

    /// The linter ran but signalled an operational failure on stderr.
    #[error("Failed to check entrypoint {id} on line {line}: {detail}")]
    LinterExecutionFailed {
        id: String,
        line: u32,
        detail: String,
    },
}

impl FatalError {
    /// Distinct process exit code per condition. Codes 0 and 1 belong to the
    /// success path (no findings / findings).
    pub fn exit_code(&self) -> i32 {
        match self {
            FatalError::FileNotFound { .. } => 2,
            FatalError::NotYaml { .. } => 3,
            FatalError::MalformedStructure { .. } => 4,
            FatalError::LinterNotFound { .. } => 5,
            FatalError::LinterExecutionFailed { .. } => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            FatalError::FileNotFound {
                path: Utf8PathBuf::from("a.yaml"),
            },
            FatalError::NotYaml {
                path: Utf8PathBuf::from("a.yaml"),
            },
            FatalError::MalformedStructure {
                path: Utf8PathBuf::from("a.yaml"),
            },
            FatalError::LinterNotFound {
                executable: "shellcheck".to_string(),
            },
            FatalError::LinterExecutionFailed {
                id: "removestar".to_string(),
                line: 17,
                detail: "boom".to_string(),
            },
        ];
        let mut codes: Vec<i32> = errors.iter().map(FatalError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn messages_name_the_offender() {
        let err = FatalError::FileNotFound {
            path: Utf8PathBuf::from("test.yaml"),
        };
        assert_eq!(err.to_string(), "No file test.yaml found");

        let err = FatalError::NotYaml {
            path: Utf8PathBuf::from("README.md"),
        };
        assert_eq!(err.to_string(), "README.md is not a YAML file");

        let err = FatalError::LinterExecutionFailed {
            id: "removestar".to_string(),
            line: 17,
            detail: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to check entrypoint removestar on line 17: boom"
        );
    }
}
