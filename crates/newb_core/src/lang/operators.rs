//! Operator vocabulary.
//!
//! This module defines the canonical operator set: symbol operators like `+` and `:=`, the two word
//! operators `mod` and `div`, and the relational operators used inside conditions.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and accepts both canonical spellings and aliases.
//! - The language spells "less-or-equal", "greater-or-equal" and "not-equal" as `=<`, `=>` and `=!`. The
//!   C-style `<=`, `>=` and `!=` are accepted as aliases and normalized to the canonical spelling.
//! - `<<` and `>>` are deliberately **not** operators: `cin >> x` and `cout << x` are written with two
//!   single-character tokens each.
//! - `==` is scanned as one operator so diagnostics can name it, but no grammar rule accepts it.
//!
//! ## Examples
//! ```rust
//! use newb_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("=<"), Some(OperatorId::LtEq));
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert_eq!(operators::as_str(OperatorId::LtEq), "=<");
//! assert!(!operators::is_compound(">>"));
//! ```

/// Broad role of an operator in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    /// `:=`
    Assignment,
    /// `+ - * / mod div`
    Arithmetic,
    /// `= =! < =< > =>`
    Relational,
    /// `==`: recognized by the scanner, rejected by the parser.
    Unsupported,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Assign,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Mod,
    Div,

    // Relational
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Unsupported
    EqEq,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `aliases` are extra spellings the scanner accepts; tokens always carry `canonical`.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: OperatorCategory,
    pub is_word: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op(OperatorId::Assign, ":=", &[], OperatorCategory::Assignment),
    // Arithmetic
    op(OperatorId::Plus, "+", &[], OperatorCategory::Arithmetic),
    op(OperatorId::Minus, "-", &[], OperatorCategory::Arithmetic),
    op(OperatorId::Star, "*", &[], OperatorCategory::Arithmetic),
    op(OperatorId::Slash, "/", &[], OperatorCategory::Arithmetic),
    word(OperatorId::Mod, "mod"),
    word(OperatorId::Div, "div"),
    // Relational
    op(OperatorId::Eq, "=", &[], OperatorCategory::Relational),
    op(OperatorId::NotEq, "=!", &["!="], OperatorCategory::Relational),
    op(OperatorId::Lt, "<", &[], OperatorCategory::Relational),
    op(OperatorId::LtEq, "=<", &["<="], OperatorCategory::Relational),
    op(OperatorId::Gt, ">", &[], OperatorCategory::Relational),
    op(OperatorId::GtEq, "=>", &[">="], OperatorCategory::Relational),
    // Unsupported
    op(OperatorId::EqEq, "==", &[], OperatorCategory::Unsupported),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return the canonical spelling for an operator id.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return the grammatical category of an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Resolve an operator spelling (canonical or alias) to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| {
            let aliases: &[&str] = o.aliases;
            o.canonical == spelling || aliases.contains(&spelling)
        })
        .map(|o| o.id)
}

/// Return `true` if `spelling` is a two-character symbol operator the scanner may build by joining two
/// adjacent single-character fragments.
pub fn is_compound(spelling: &str) -> bool {
    spelling.chars().count() == 2 && from_str(spelling).is_some_and(|id| !info_for(id).is_word)
}

/// Return `true` for operators allowed between the two terms of a condition.
pub fn is_relational(id: OperatorId) -> bool {
    category(id) == OperatorCategory::Relational
}

/// Return `true` for operators allowed between the terms of an expression.
pub fn is_arithmetic(id: OperatorId) -> bool {
    category(id) == OperatorCategory::Arithmetic
}

/// Canonical spellings of every relational operator, in registry order (for "expected ..." messages).
pub fn relational_spellings() -> impl Iterator<Item = &'static str> {
    OPERATORS
        .iter()
        .filter(|o| o.category == OperatorCategory::Relational)
        .map(|o| o.canonical)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: OperatorCategory,
) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical,
        aliases,
        category,
        is_word: false,
    }
}

const fn word(id: OperatorId, canonical: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical,
        aliases: &[],
        category: OperatorCategory::Arithmetic,
        is_word: true,
    }
}
