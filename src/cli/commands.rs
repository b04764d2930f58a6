//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};

use crate::driver::{self, SourceFile};
use newb_syntax::diagnostics::CompileError;
use newb_syntax::parser::ParseSummary;

use super::{CliError, CliResult, ExitCode};

/// Open `path`, turning driver errors into CLI errors.
fn open_source(path: &Path) -> CliResult<SourceFile> {
    let file = SourceFile::open(path).map_err(|e| CliError::failure(format!("error: {e}")))?;
    if file.is_blank() {
        tracing::warn!(path = %path.display(), "source file is empty");
    }
    Ok(file)
}

/// Render a front-end error against the file it came from.
fn render_error(file: &SourceFile, err: &CompileError) -> String {
    let name = file.path().display().to_string();
    format!("{:?}", err.to_report(&name, &file.text()))
}

/// Check every file independently, printing one line (or one diagnostic) per file.
///
/// Returns [`ExitCode::FAILURE`] if any file failed; later files are still checked.
pub fn check_files(files: &[PathBuf], show_summary: bool) -> CliResult<ExitCode> {
    let mut failed = 0usize;

    for path in files {
        match check_one(path) {
            Ok(summary) => {
                println!("✓ {}: parsing completed successfully", path.display());
                if show_summary {
                    print!("{}", format_summary(&summary));
                }
            }
            Err(e) => {
                eprintln!("{}", e.message);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        tracing::debug!(failed, total = files.len(), "check finished with failures");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn check_one(path: &Path) -> CliResult<ParseSummary> {
    let file = open_source(path)?;
    driver::check_source(&file).map_err(|err| CliError::failure(render_error(&file, &err)))
}

/// Print the token list of a file, one token per line.
pub fn dump_tokens(path: &Path) -> CliResult<ExitCode> {
    let file = open_source(path)?;
    let tokens = driver::tokenize(&file).map_err(|err| CliError::failure(render_error(&file, &err)))?;

    for token in &tokens {
        println!("{token}");
    }
    println!("{} tokens", tokens.len());
    Ok(ExitCode::SUCCESS)
}

/// Indented, one-count-per-line rendering of a [`ParseSummary`].
pub fn format_summary(summary: &ParseSummary) -> String {
    format!(
        "  libraries:       {}\n  constants:       {}\n  variables:       {}\n  functions:       {}\n  statements:      {}\n  max block depth: {}\n",
        summary.libraries,
        summary.constants,
        summary.variables,
        summary.functions,
        summary.statements,
        summary.max_block_depth
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary() {
        let summary = ParseSummary {
            libraries: 1,
            constants: 2,
            variables: 3,
            functions: 0,
            statements: 7,
            max_block_depth: 2,
        };
        let text = format_summary(&summary);
        assert!(text.contains("  constants:       2\n"));
        assert!(text.ends_with("  max block depth: 2\n"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_missing_file_is_reported_not_panicked() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.nb");
        let err = dump_tokens(&missing).unwrap_err();
        assert!(err.message.starts_with("error: cannot read"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_check_files_keeps_going_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.nb");
        let good = dir.path().join("good.nb");
        std::fs::write(&bad, "newb x := 1 endb exit\n").unwrap();
        std::fs::write(&good, "newb x := 1; endb exit\n").unwrap();

        let code = check_files(&[bad, good], false).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }
}
