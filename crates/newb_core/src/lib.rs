//! Canonical language vocabulary for the Newb teaching language.
//!
//! This crate is intentionally tiny and dependency-free. It holds the fixed vocabularies (reserved words,
//! operators, punctuation) as immutable `const` tables so the scanner, parser and any tooling agree on
//! the same spellings.
//!
//! ## Notes
//!
//! - **No IO**, no global mutable state, and no syntax-crate types.
//! - The scanner/parser own context (e.g. `#include` delimiters); registries only answer "what is this
//!   spelling?".

pub mod lang;
