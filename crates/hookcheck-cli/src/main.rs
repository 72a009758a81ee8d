//! CLI entry point for hookcheck.
//!
//! This module is intentionally thin: it handles argument parsing, the final
//! stdout write, stderr diagnostics, and exit codes. All business logic lives
//! in the `hookcheck-app` crate.

use camino::Utf8PathBuf;
use clap::Parser;
use hookcheck_app::{run_check, CheckInput};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    name = "hookcheck",
    version,
    about = "Shellcheck the shell entries of a pre-commit hook manifest"
)]
struct Cli {
    /// File to check.
    #[arg(value_name = "PATH", default_value = ".pre-commit-config.yaml")]
    path: Utf8PathBuf,

    /// Shellcheck executable to invoke.
    #[arg(
        short = 's',
        long = "shellcheck",
        value_name = "SHELLCHECK",
        default_value = "shellcheck"
    )]
    shellcheck: String,
}

fn main() {
    let cli = Cli::parse();

    let result = run_check(CheckInput {
        path: &cli.path,
        linter: &cli.shellcheck,
    });

    match result {
        Ok(output) => {
            // process::exit skips buffered-writer cleanup; flush explicitly.
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(output.text.as_bytes());
            let _ = stdout.flush();
            std::process::exit(output.verdict.exit_code());
        }
        Err(fatal) => {
            eprintln!("{fatal}");
            std::process::exit(fatal.exit_code());
        }
    }
}
