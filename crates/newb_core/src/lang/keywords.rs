//! Define the reserved-word vocabulary for the Newb language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]) recording the spelling and a documentation category.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `NEWB` is an identifier, `newb` is a keyword.
//! - `#include` is a reserved word even though it starts with `#`; the scanner never splits on `#`, so the
//!   whole fragment reaches this table intact.
//! - `mod` and `div` are *word operators*, not reserved words. See [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use newb_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("#include"), Some(KeywordId::Include));
//! assert_eq!(keywords::from_str("If"), None);
//! ```

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Directives
    Include,

    // Declarations
    Const,
    Var,
    Function,

    // Blocks
    Newb,
    Endb,

    // Control flow
    If,
    Else,
    While,
    Repeat,
    Until,
    Call,
    Exit,

    // Console IO
    Cin,
    Cout,
}

/// High-level grouping for documentation and diagnostics.
///
/// Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Directive,
    Declaration,
    Block,
    ControlFlow,
    Io,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved words.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Include, "#include", KeywordCategory::Directive),
    info(KeywordId::Const, "const", KeywordCategory::Declaration),
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
    info(KeywordId::Function, "function", KeywordCategory::Declaration),
    info(KeywordId::Newb, "newb", KeywordCategory::Block),
    info(KeywordId::Endb, "endb", KeywordCategory::Block),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::Repeat, "repeat", KeywordCategory::ControlFlow),
    info(KeywordId::Until, "until", KeywordCategory::ControlFlow),
    info(KeywordId::Call, "call", KeywordCategory::ControlFlow),
    info(KeywordId::Exit, "exit", KeywordCategory::ControlFlow),
    info(KeywordId::Cin, "cin", KeywordCategory::Io),
    info(KeywordId::Cout, "cout", KeywordCategory::Io),
];

/// Return the spelling for a keyword id.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the documentation category for a keyword id.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("while"), Some(KeywordId::While));
        assert_eq!(from_str("While"), None);
        assert_eq!(from_str("WHILE"), None);
    }

    #[test]
    fn test_word_operators_are_not_reserved() {
        assert_eq!(from_str("mod"), None);
        assert_eq!(from_str("div"), None);
    }

    #[test]
    fn test_include_directive_spelling() {
        assert_eq!(from_str("#include"), Some(KeywordId::Include));
        assert_eq!(from_str("include"), None);
        assert_eq!(category(KeywordId::Include), KeywordCategory::Directive);
    }
}
