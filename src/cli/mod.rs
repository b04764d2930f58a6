//! CLI module for the Newb syntax checker
//!
//! ## Commands
//!
//! - `newb <FILE>...` / `check <FILE>...` - Scan and parse each file, report the first error per file
//! - `tokens <FILE>` - Print the token list of a file
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::NEWB_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Syntax checker for the Newb teaching language
#[derive(Parser, Debug)]
#[command(name = "newb")]
#[command(version = NEWB_VERSION)]
#[command(about = "Syntax checker for the Newb teaching language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Files to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Print what each successfully checked file declares
    #[arg(long, global = true)]
    pub summary: bool,

    /// Trace every grammar rule the parser enters (same as RUST_LOG=newb_syntax=trace)
    #[arg(long, global = true)]
    pub trace: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan and parse one or more files
    Check {
        /// Source files to check
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the token list of a file (debug)
    Tokens {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run(cli: Cli) {
    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Check { files }) => commands::check_files(&files, cli.summary),
        Some(Command::Tokens { file }) => commands::dump_tokens(&file),
        None if !cli.files.is_empty() => commands::check_files(&cli.files, cli.summary),
        None => Err(CliError::failure("error: no input files (see `newb --help`)")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_files() {
        let cli = Cli::try_parse_from(["newb", "a.nb", "b.nb"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.files, vec![PathBuf::from("a.nb"), PathBuf::from("b.nb")]);
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["newb", "check", "a.nb", "--summary"]).unwrap();
        if let Some(Command::Check { files }) = cli.command {
            assert_eq!(files, vec![PathBuf::from("a.nb")]);
        } else {
            panic!("Expected Check command");
        }
        assert!(cli.summary);
    }

    #[test]
    fn test_cli_parse_check_requires_a_file() {
        assert!(Cli::try_parse_from(["newb", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::try_parse_from(["newb", "--trace", "tokens", "a.nb"]).unwrap();
        assert!(cli.trace);
        assert!(matches!(cli.command, Some(Command::Tokens { .. })));
    }

    #[test]
    fn test_no_input_is_an_error() {
        let cli = Cli::try_parse_from(["newb"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
