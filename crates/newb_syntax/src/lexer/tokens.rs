//! Token types for the Newb scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators (including the word operators `mod` and `div`)
//! - `Punctuation(PunctuationId)` for punctuation and `#include` delimiters
//!
//! ## Notes
//! - A token is created once by the scanner and never mutated.
//! - `text` is the exact lexeme, except for compound operators, which carry the canonical spelling
//!   (`<=` in the source becomes `=<`).

use std::fmt;

use newb_core::lang::keywords::{self, KeywordId};
use newb_core::lang::operators::OperatorId;
use newb_core::lang::punctuation::PunctuationId;

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),
    Number,
    Ident,
    /// Synthesized by the parser's token stream when reading past the last token.
    Eof,
}

/// A classified lexeme with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based source line.
    pub line: usize,
    /// 1-based byte column where the lexeme starts.
    pub column: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// The synthetic end-of-input token, tagged with `line`.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line, 0)
    }

    /// Short description for "found ..." messages.
    pub fn describe(&self) -> String {
        if self.is_eof() {
            "end of input".to_string()
        } else {
            format!("'{}'", self.text)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {:<10} line {}", self.kind.category(), self.text, self.line)
    }
}

/// Resolve a fragment to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
