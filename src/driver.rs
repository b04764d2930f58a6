//! File driver
//!
//! Reads a Newb source file line by line and runs the scanner and parser over it.
//!
//! ## Notes
//!
//! - The file handle lives only inside [`SourceFile::open`] and is closed on every return path, including
//!   read errors. Lexing and parsing work on the buffered lines.
//! - Files larger than [`MAX_SOURCE_SIZE`] are rejected before any byte is read.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use newb_syntax::diagnostics::CompileError;
use newb_syntax::lexer::{self, Token};
use newb_syntax::parser::{self, ParseSummary};
use thiserror::Error;

/// Maximum source file size (16 MiB).
pub const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Why a file could not be checked.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source file '{}' is too large ({size} bytes, max {max} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// A source file held as its ordered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceFile {
    /// Read `path` line by line.
    ///
    /// ## Errors
    /// - [`CheckError::TooLarge`] if the file exceeds [`MAX_SOURCE_SIZE`]
    /// - [`CheckError::Io`] if the file is missing, unreadable or not valid UTF-8
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let path = path.as_ref();
        let io_error = |source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = fs::metadata(path).map_err(io_error)?.len();
        if size > MAX_SOURCE_SIZE {
            return Err(CheckError::TooLarge {
                path: path.to_path_buf(),
                size,
                max: MAX_SOURCE_SIZE,
            });
        }

        let reader = BufReader::new(File::open(path).map_err(io_error)?);
        let lines = reader.lines().collect::<Result<Vec<_>, _>>().map_err(io_error)?;
        tracing::debug!(path = %path.display(), lines = lines.len(), bytes = size, "read source");

        Ok(Self {
            path: path.to_path_buf(),
            lines,
        })
    }

    /// Build a source file from in-memory text (no filesystem access).
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `true` if the file has no non-whitespace content.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    /// The lines joined with `\n`, for diagnostic rendering.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Outcome of a successful [`check_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub path: PathBuf,
    pub lines: usize,
    pub tokens: usize,
    pub summary: ParseSummary,
}

/// Scan a source file into tokens.
pub fn tokenize(file: &SourceFile) -> Result<Vec<Token>, CompileError> {
    lexer::lex_lines(file.lines())
}

/// Scan and parse a source file.
///
/// ## Errors
/// Returns the first lexical, syntax or depth error.
pub fn check_source(file: &SourceFile) -> Result<ParseSummary, CompileError> {
    let tokens = tokenize(file)?;
    parser::parse(&tokens)
}

/// Read, scan and parse the file at `path`.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn check_file(path: impl AsRef<Path>) -> Result<CheckReport, CheckError> {
    let file = SourceFile::open(path)?;
    let tokens = tokenize(&file)?;
    let summary = parser::parse(&tokens)?;

    Ok(CheckReport {
        path: file.path,
        lines: file.lines.len(),
        tokens: tokens.len(),
        summary,
    })
}
