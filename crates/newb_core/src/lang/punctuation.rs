//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation: parentheses, braces, the statement
//! terminator, the list separator, and the angle brackets that delimit a library name in `#include <lib>;`.
//!
//! ## Notes
//! - [`from_str`] only resolves *general* punctuation. The library delimiters share their spelling with the
//!   `<` / `>` operators, so the scanner produces them explicitly when it knows it is on an `#include` line.
//!
//! ## Examples
//! ```rust
//! use newb_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::from_str("<"), None);
//! assert_eq!(punctuation::as_str(PunctuationId::LAngle), "<");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Parentheses and braces.
    Delimiter,
    /// `;` and `,`.
    Separator,
    /// `<` / `>` around a library name.
    LibraryDelimiter,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    LAngle,
    RAngle,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::LAngle, "<", PunctuationCategory::LibraryDelimiter),
    info(PunctuationId::RAngle, ">", PunctuationCategory::LibraryDelimiter),
];

/// Return the full metadata entry for a punctuation id.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION.iter().find(|p| p.id == id).expect("punctuation info missing")
}

/// Return the spelling for a punctuation id.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Resolve a general punctuation spelling. Library delimiters are never returned.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION
        .iter()
        .find(|p| p.category != PunctuationCategory::LibraryDelimiter && p.canonical == s)
        .map(|p| p.id)
}

/// Resolve a library delimiter spelling (`<` or `>`), used only in `#include` context.
pub fn library_delimiter(s: &str) -> Option<PunctuationId> {
    PUNCTUATION
        .iter()
        .find(|p| p.category == PunctuationCategory::LibraryDelimiter && p.canonical == s)
        .map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
