//! Diagnostics and error reporting for the Newb front end.
//!
//! Every stage fails fast: a scan or parse produces at most one [`CompileError`]. The error carries
//! its category, a message, the offending lexeme and the 1-based line, plus optional notes and hints.
//! [`CompileError::to_report`] turns it into a `miette` report with the source line highlighted.

use std::fmt;

use miette::{LabeledSpan, MietteDiagnostic, NamedSource, Report};
use thiserror::Error;

use crate::lexer::Token;

/// A front-end error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    /// The offending lexeme; `None` when the error is at end of input.
    pub lexeme: Option<String>,
    /// 1-based source line.
    pub line: usize,
    /// 1-based byte column of the lexeme within its line, when known.
    pub column: Option<usize>,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    fn new(kind: ErrorKind, message: String, lexeme: Option<String>, line: usize, column: Option<usize>) -> Self {
        Self {
            kind,
            message,
            lexeme,
            line,
            column,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    /// A fragment that is neither a reserved word, operator, number, identifier nor punctuation.
    pub fn lexical(fragment: &str, line: usize, column: usize) -> Self {
        Self::new(
            ErrorKind::Lexical,
            format!("Unexpected token '{}' on line {}", fragment, line),
            Some(fragment.to_string()),
            line,
            Some(column),
        )
    }

    /// A grammar violation at `at`.
    pub fn syntax(message: impl Into<String>, at: &Token) -> Self {
        let (lexeme, column) = location(at);
        Self::new(ErrorKind::Syntax, message.into(), lexeme, at.line, column)
    }

    /// Nesting went past a safety bound while parsing at `at`.
    pub fn depth_exceeded(message: impl Into<String>, at: &Token) -> Self {
        let (lexeme, column) = location(at);
        Self::new(ErrorKind::DepthExceeded, message.into(), lexeme, at.line, column)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Build a `miette` report that renders this error against `source`.
    ///
    /// ## Parameters
    /// - `name`: Display name for the source (usually the file path).
    /// - `source`: Full text the tokens were scanned from.
    pub fn to_report(&self, name: &str, source: &str) -> Report {
        let (offset, len) = self.locate(source);
        let mut diagnostic = MietteDiagnostic::new(self.message.clone())
            .with_code(self.kind.code())
            .with_label(LabeledSpan::at(offset..offset + len, self.kind.to_string()));

        let help: Vec<String> = self
            .notes
            .iter()
            .map(|n| format!("note: {n}"))
            .chain(self.hints.iter().map(|h| format!("hint: {h}")))
            .collect();
        if !help.is_empty() {
            diagnostic = diagnostic.with_help(help.join("\n"));
        }

        Report::new(diagnostic).with_source_code(NamedSource::new(name, source.to_string()))
    }

    /// Byte offset and length of the region to highlight.
    ///
    /// Falls back to the whole line when the lexeme cannot be placed, and to the end of the source when
    /// the line is past the last line (end-of-input errors).
    fn locate(&self, source: &str) -> (usize, usize) {
        let mut offset = 0;
        for (idx, text) in source.split_inclusive('\n').enumerate() {
            if idx + 1 == self.line {
                let content = text.trim_end_matches(&['\n', '\r'][..]);
                return match (self.column, &self.lexeme) {
                    (Some(col), Some(lexeme)) if col >= 1 && col - 1 + lexeme.len() <= content.len() => {
                        (offset + col - 1, lexeme.len())
                    }
                    _ => (offset, content.len()),
                };
            }
            offset += text.len();
        }
        (source.len(), 0)
    }
}

fn location(token: &Token) -> (Option<String>, Option<usize>) {
    if token.is_eof() {
        (None, None)
    } else {
        (Some(token.text.clone()), Some(token.column))
    }
}

/// Error category.
///
/// `DepthExceeded` is kept apart from `Syntax` so tooling can tell "malformed program" from
/// "pathologically deep program".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    DepthExceeded,
}

impl ErrorKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "newb::lexical",
            ErrorKind::Syntax => "newb::syntax",
            ErrorKind::DepthExceeded => "newb::depth",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::DepthExceeded => write!(f, "depth exceeded"),
        }
    }
}
