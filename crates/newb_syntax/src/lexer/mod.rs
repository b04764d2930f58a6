//! Scanner for the Newb teaching language
//!
//! Turns source lines into a flat, ordered list of classified tokens:
//! - Reserved words (`newb`, `endb`, `#include`, ...)
//! - Operators, including compound operators built from two adjacent fragments (`:=`, `=<`, `=>`, `=!`)
//! - Numbers (`42`, `3.14`) and identifiers
//! - Punctuation (`( ) { } ; ,`) and `#include` library delimiters
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `fragments` - Splitting a line into candidate fragments
//!
//! ## Notes
//!
//! - Scanning is line-oriented. Tokens keep the 1-based line they came from.
//! - The scanner fails closed: the first unrecognized fragment aborts the scan with a lexical error and no
//!   partial token list is returned.

mod fragments;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::diagnostics::CompileError;
use fragments::Fragment;
use newb_core::lang::keywords::KeywordId;
use newb_core::lang::operators::{self, OperatorId};
use newb_core::lang::punctuation;

/// Line-by-line scanner.
///
/// Feed lines in order with [`Lexer::scan_line`], then take the tokens with [`Lexer::finish`].
#[derive(Debug, Default)]
pub struct Lexer {
    line: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    /// Create a scanner positioned before line 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the next source line.
    ///
    /// ## Errors
    /// Returns a lexical [`CompileError`] naming the first fragment that is not a reserved word,
    /// operator, number, identifier or punctuation.
    pub fn scan_line(&mut self, text: &str) -> Result<(), CompileError> {
        self.line += 1;
        let line = self.line;
        let fragments = fragments::split(text);
        let include_context = fragments
            .first()
            .is_some_and(|f| keyword_id(f.text) == Some(KeywordId::Include));

        let before = self.tokens.len();
        let mut i = 0;
        while i < fragments.len() {
            let fragment = &fragments[i];

            // `<lib>` on an `#include` line: delimiters, never comparisons.
            if include_context {
                if let Some(id) = punctuation::library_delimiter(fragment.text) {
                    self.push(TokenKind::Punctuation(id), fragment.text, fragment);
                    i += 1;
                    continue;
                }
            }

            if let Some(next) = fragments.get(i + 1).filter(|next| fragment.touches(next)) {
                if let Some(id) = compound_operator(fragment.text, next.text) {
                    self.push(TokenKind::Operator(id), operators::as_str(id), fragment);
                    i += 2;
                    continue;
                }
            }

            let kind = classify(fragment.text)
                .ok_or_else(|| CompileError::lexical(fragment.text, line, fragment.column()))?;
            self.push(kind, fragment.text, fragment);
            i += 1;
        }

        tracing::trace!(line, tokens = self.tokens.len() - before, include_context, "scanned line");
        Ok(())
    }

    /// Number of lines scanned so far.
    pub fn lines_scanned(&self) -> usize {
        self.line
    }

    /// Consume the scanner and return the token list.
    pub fn finish(self) -> Vec<Token> {
        self.tokens
    }

    fn push(&mut self, kind: TokenKind, text: &str, fragment: &Fragment<'_>) {
        self.tokens.push(Token::new(kind, text, self.line, fragment.column()));
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Join two adjacent fragments into a compound operator, if their concatenation is one.
fn compound_operator(first: &str, second: &str) -> Option<OperatorId> {
    let joined = format!("{first}{second}");
    if operators::is_compound(&joined) {
        operators::from_str(&joined)
    } else {
        None
    }
}

/// Classify a single fragment.
///
/// Precedence: reserved word, operator, number, identifier, punctuation.
fn classify(fragment: &str) -> Option<TokenKind> {
    if let Some(id) = keyword_id(fragment) {
        Some(TokenKind::Keyword(id))
    } else if let Some(id) = operators::from_str(fragment) {
        Some(TokenKind::Operator(id))
    } else if is_number(fragment) {
        Some(TokenKind::Number)
    } else if is_identifier(fragment) {
        Some(TokenKind::Ident)
    } else {
        punctuation::from_str(fragment).map(TokenKind::Punctuation)
    }
}

/// One or more ASCII digits, optionally followed by `.` and one or more digits.
fn is_number(s: &str) -> bool {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (s, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.is_none_or(all_digits)
}

/// A letter or underscore, then letters, digits or underscores (ASCII-only).
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Scan an ordered sequence of lines.
#[tracing::instrument(level = "debug", skip_all)]
pub fn lex_lines<I, S>(lines: I) -> Result<Vec<Token>, CompileError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lexer = Lexer::new();
    for line in lines {
        lexer.scan_line(line.as_ref())?;
    }
    tracing::debug!(lines = lexer.lines_scanned(), "scan complete");
    Ok(lexer.finish())
}

/// Convenience function to scan a whole source string.
///
/// This is a shorthand for `lex_lines(source.lines())`.
#[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    lex_lines(source.lines())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;
    use newb_core::lang::punctuation::PunctuationId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn texts(source: &str) -> Vec<String> {
        lex(source).unwrap().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        use newb_core::lang::keywords;

        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical).unwrap_or_else(|err| panic!("lex({:?}) failed: {err}", k.canonical));
            assert_eq!(tokens.len(), 1, "expected a single token for {:?}, got {:?}", k.id, tokens);
            assert!(tokens[0].kind.is_keyword(k.id));
            assert_eq!(tokens[0].text, k.canonical);
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for o in operators::OPERATORS {
            let spellings = std::iter::once(&o.canonical).chain(o.aliases.iter());
            for &sp in spellings {
                let tokens = lex(sp).unwrap_or_else(|err| panic!("lex({sp:?}) failed: {err}"));
                assert_eq!(tokens.len(), 1, "expected a single token for {sp:?}, got {tokens:?}");
                assert!(tokens[0].kind.is_operator(o.id));
                assert_eq!(tokens[0].text, o.canonical, "{sp:?} should normalize to {:?}", o.canonical);
            }
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        use newb_core::lang::punctuation::PunctuationCategory;

        for p in punctuation::PUNCTUATION {
            match p.category {
                PunctuationCategory::LibraryDelimiter => {
                    let tokens = lex(&format!("#include {}", p.canonical)).unwrap();
                    assert!(tokens[1].kind.is_punctuation(p.id));
                }
                PunctuationCategory::Delimiter | PunctuationCategory::Separator => {
                    let tokens = lex(p.canonical).unwrap();
                    assert_eq!(tokens.len(), 1);
                    assert!(tokens[0].kind.is_punctuation(p.id));
                }
            }
        }
    }

    #[test]
    fn test_compound_operator_merges_adjacent_fragments() {
        let tokens = lex("x:=1").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].kind.is_operator(OperatorId::Assign));
        assert_eq!(tokens[1].text, ":=");
        assert_eq!(tokens[1].column, 2);
    }

    #[test]
    fn test_separated_fragments_do_not_merge() {
        assert_eq!(
            kinds("a = < b"),
            vec![
                TokenKind::Ident,
                TokenKind::Operator(OperatorId::Eq),
                TokenKind::Operator(OperatorId::Lt),
                TokenKind::Ident,
            ]
        );
    }

    #[test]
    fn test_relational_spellings_are_canonical() {
        assert_eq!(texts("a =< b"), vec!["a", "=<", "b"]);
        assert_eq!(texts("a <= b"), vec!["a", "=<", "b"]);
        assert_eq!(texts("a != b"), vec!["a", "=!", "b"]);
        assert_eq!(texts("a>=b"), vec!["a", "=>", "b"]);
    }

    #[test]
    fn test_double_equals_scans_as_one_operator() {
        assert_eq!(
            kinds("a==b"),
            vec![
                TokenKind::Ident,
                TokenKind::Operator(OperatorId::EqEq),
                TokenKind::Ident,
            ]
        );
        assert_eq!(texts("a = = b"), vec!["a", "=", "=", "b"]);
    }

    #[test]
    fn test_io_arrows_stay_as_two_tokens() {
        assert_eq!(
            kinds("cin >> y"),
            vec![
                TokenKind::Keyword(KeywordId::Cin),
                TokenKind::Operator(OperatorId::Gt),
                TokenKind::Operator(OperatorId::Gt),
                TokenKind::Ident,
            ]
        );
        assert_eq!(texts("cout<<42"), vec!["cout", "<", "<", "42"]);
    }

    #[test]
    fn test_include_context_turns_angles_into_punctuation() {
        let tokens = lex("  #include <stdio>;").unwrap();
        assert!(tokens[0].kind.is_keyword(KeywordId::Include));
        assert!(tokens[1].kind.is_punctuation(PunctuationId::LAngle));
        assert!(matches!(tokens[2].kind, TokenKind::Ident));
        assert!(tokens[3].kind.is_punctuation(PunctuationId::RAngle));
        assert!(tokens[4].kind.is_punctuation(PunctuationId::Semicolon));
    }

    #[test]
    fn test_include_context_is_per_line() {
        let tokens = lex("#include <io>;\nif (a < b)").unwrap();
        let lt = tokens.iter().find(|t| t.line == 2 && t.text == "<").unwrap();
        assert!(lt.kind.is_operator(OperatorId::Lt));
    }

    #[test]
    fn test_include_must_start_the_line() {
        // `#include` later in the line does not switch the context.
        let tokens = lex("x #include <").unwrap();
        assert!(tokens[2].kind.is_operator(OperatorId::Lt));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("42 3.14 0"), vec![TokenKind::Number; 3]);
        for bad in ["3.", ".5", "1.2.3", "4x"] {
            let err = lex(bad).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Lexical, "{bad} should be rejected");
        }
    }

    #[test]
    fn test_word_operators() {
        assert_eq!(
            kinds("a mod b div c"),
            vec![
                TokenKind::Ident,
                TokenKind::Operator(OperatorId::Mod),
                TokenKind::Ident,
                TokenKind::Operator(OperatorId::Div),
                TokenKind::Ident,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(kinds("_tmp x1 CamelCase"), vec![TokenKind::Ident; 3]);
        // Case-sensitive keywords: `Newb` is an identifier.
        assert_eq!(kinds("Newb"), vec![TokenKind::Ident]);
    }

    #[test]
    fn test_lines_are_tracked() {
        let tokens = lex("var int x;\n\n  newb\nendb").unwrap();
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 1, 1, 3, 4]);
    }

    #[test]
    fn test_unknown_fragment_is_lexical_error() {
        let err = lex("newb\n  x := y @ 2;\nendb").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.line, 2);
        assert_eq!(err.lexeme.as_deref(), Some("@"));
        assert_eq!(err.column, Some(10));
        assert_eq!(err.message, "Unexpected token '@' on line 2");
    }

    #[test]
    fn test_lone_bang_and_colon_are_rejected() {
        assert_eq!(lex("a ! b").unwrap_err().lexeme.as_deref(), Some("!"));
        assert_eq!(lex("a : b").unwrap_err().lexeme.as_deref(), Some(":"));
    }

    #[test]
    fn test_slash_needs_whitespace() {
        assert!(kinds("a / b")[1].is_operator(OperatorId::Slash));
        assert_eq!(lex("a/b").unwrap_err().lexeme.as_deref(), Some("a/b"));
    }

    #[test]
    fn test_unicode_identifier_rejected() {
        let err = lex("π := 1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.lexeme.as_deref(), Some("π"));
    }

    #[test]
    fn test_lexer_feeds_line_by_line() {
        let mut lexer = Lexer::new();
        lexer.scan_line("newb").unwrap();
        lexer.scan_line("").unwrap();
        lexer.scan_line("endb exit").unwrap();
        assert_eq!(lexer.lines_scanned(), 3);
        let tokens = lexer.finish();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].line, 3);
    }
}
