#![forbid(unsafe_code)]
//! Newb syntax checker
//!
//! Newb is a small Pascal/C-like teaching language whose blocks are written `newb ... endb`. This crate
//! wraps the front end from `newb_syntax` with a file driver and a command-line interface.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use newb::driver::{self, SourceFile};
//!
//! let file = SourceFile::from_text("demo.nb", "var int y;\nnewb\n  cin >> y;\nendb\nexit");
//! let summary = driver::check_source(&file).unwrap();
//! assert_eq!(summary.statements, 1);
//! ```

pub mod cli;
pub mod driver;
pub mod version;

pub use newb_syntax::diagnostics;
pub use newb_syntax::lexer;
pub use newb_syntax::parser;
