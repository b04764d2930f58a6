//! Parser for the Newb teaching language
//!
//! A predictive recursive-descent checker over the scanner's token list. It enforces declaration order,
//! block nesting, statement termination and expression structure, and stops at the first violation.
//!
//! ## Grammar
//!
//! ```text
//! Program      := LibDecl* ConstDecl* VarDecl* FunctionDecl* Block Exit
//! LibDecl      := '#include' '<' Identifier '>' ';'
//! ConstDecl    := 'const' Identifier Identifier '=' Number ';'
//! VarDecl      := 'var' Identifier Identifier (',' Identifier)* ';'
//! FunctionDecl := 'function' Identifier ';' ConstDecl* VarDecl* Block ';'
//! Block        := 'newb' (Statement ';')* 'endb'
//! Statement    := Block | If | While | RepeatUntil | Call | Cin | Cout | Assignment | Exit
//! If           := 'if' '(' Condition ')' Statement ('else' Statement)?
//! While        := 'while' '(' Condition ')' Block
//! RepeatUntil  := 'repeat' (Statement ';')* 'until' Condition
//! Call         := 'call' Identifier
//! Cin          := 'cin' '>' '>' Identifier
//! Cout         := 'cout' '<' '<' (Identifier | Number)
//! Assignment   := Identifier ':=' Expression
//! Exit         := 'exit' ';'?
//! Expression   := Term (('+'|'-'|'*'|'/'|'mod'|'div') Term)*
//! Term         := '(' Expression ')' | Identifier | Number
//! Condition    := Term RelOp Term | '(' Expression ')'
//! RelOp        := '=' | '=!' | '<' | '=<' | '>' | '=>'
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use newb_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("newb x := (y + 1) * 2; endb exit").unwrap();
//! let summary = parser::parse(&tokens).unwrap();
//! assert_eq!(summary.statements, 1);
//! ```

use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use newb_core::lang::keywords::{self, KeywordCategory, KeywordId};
use newb_core::lang::operators::{self, OperatorId};
use newb_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
