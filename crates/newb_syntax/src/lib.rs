//! Syntax front end for the Newb teaching language: scanner, parser, diagnostics.
//!
//! The front end is an accept/reject checker. [`lexer`] turns source lines into a flat token list and
//! [`parser`] walks that list against the grammar, stopping at the first violation. No syntax tree is
//! built; a successful parse yields only a [`parser::ParseSummary`].
//!
//! ## Examples
//! ```rust
//! use newb_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("var int y;\nnewb cin >> y; endb\nexit;").unwrap();
//! let summary = parser::parse(&tokens).unwrap();
//! assert_eq!(summary.variables, 1);
//! ```
//!
//! ## See also
//! - `newb_core::lang` for the reserved-word / operator / punctuation registries.

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

use diagnostics::CompileError;
use parser::ParseSummary;

/// Scan and parse a whole source string.
///
/// ## Errors
/// Returns the first lexical, syntax or depth error encountered.
pub fn check(source: &str) -> Result<ParseSummary, CompileError> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}
