//! Newb language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`) and look up spellings and
//! metadata through the registry tables, instead of comparing strings throughout the front end.
//!
//! ## Examples
//! ```rust
//! use newb_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("newb"), Some(KeywordId::Newb));
//! assert_eq!(keywords::as_str(KeywordId::Endb), "endb");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
