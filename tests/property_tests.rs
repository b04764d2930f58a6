//! Property-based tests for the Newb front end
//!
//! These tests use proptest to check scanner and parser invariants across many randomly
//! generated inputs.

use newb::lexer::{self, TokenKind};
use newb::parser::{self, TokenStream};
use proptest::prelude::*;

/// Lexemes that scan to exactly one token on their own.
fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "#include", "const", "var", "function", "newb", "endb", "if", "else", "while", "repeat",
            "until", "call", "cin", "cout", "exit", ":=", "+", "-", "*", "/", "mod", "div", "=",
            "=!", "<", "=<", ">", "=>", "(", ")", "{", "}", ";", ",",
        ])
        .prop_map(str::to_string),
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}".prop_filter("reserved", |s| lexer::keyword_id(s).is_none()
            && s != "mod"
            && s != "div"),
        "[0-9]{1,6}(\\.[0-9]{1,3})?",
    ]
}

/// Lines of whitespace-separated lexemes. `#include` is kept off the first position so angle
/// brackets always scan as operators.
fn source_lines() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(lexeme(), 0..8), 1..8).prop_map(|lines| {
        lines
            .into_iter()
            .map(|mut line| {
                if line.first().is_some_and(|l| l == "#include") {
                    line.insert(0, "x".to_string());
                }
                line
            })
            .collect()
    })
}

fn render(lines: &[Vec<String>]) -> String {
    lines.iter().map(|l| l.join(" ")).collect::<Vec<_>>().join("\n")
}

proptest! {
    /// Property: concatenated token texts reconstruct the non-whitespace source
    #[test]
    fn scanner_reconstructs_source(lines in source_lines()) {
        let source = render(&lines);
        let tokens = lexer::lex(&source).unwrap();

        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        let actual: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: one token per lexeme, with the line it was written on
    #[test]
    fn scanner_tracks_lines(lines in source_lines()) {
        let tokens = lexer::lex(&render(&lines)).unwrap();

        let expected: Vec<usize> = lines
            .iter()
            .enumerate()
            .flat_map(|(i, l)| std::iter::repeat_n(i + 1, l.len()))
            .collect();
        let actual: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        prop_assert_eq!(&actual, &expected);
        prop_assert!(actual.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Property: re-scanning a token's text alone yields the same kind
    #[test]
    fn scanner_is_idempotent_per_token(lines in source_lines()) {
        for token in lexer::lex(&render(&lines)).unwrap() {
            let again = lexer::lex(&token.text).unwrap();
            prop_assert_eq!(again.len(), 1);
            prop_assert_eq!(again[0].kind, token.kind);
            prop_assert_eq!(&again[0].text, &token.text);
        }
    }

    /// Property: the parser's token check accepts every token the scanner produced
    #[test]
    fn parser_check_accepts_scanned_kinds(lines in source_lines()) {
        for token in lexer::lex(&render(&lines)).unwrap() {
            let single = [token];
            let stream = TokenStream::new(&single);
            prop_assert!(stream.check(&single[0].kind));
            prop_assert!(!stream.check(&TokenKind::Eof));
        }
    }

    /// Property: scanning and parsing arbitrary text never panics
    #[test]
    fn front_end_is_total(source in "[ -~\\n]{0,200}") {
        if let Ok(tokens) = lexer::lex(&source) {
            let _ = parser::parse(&tokens);
        }
    }

    /// Property: nested blocks up to the bound are accepted, one more is a depth error
    #[test]
    fn block_depth_bound(depth in 1usize..=parser::MAX_BLOCK_DEPTH + 5) {
        let mut source = "newb ".repeat(depth);
        source.push_str("endb");
        source.push_str(&" ; endb".repeat(depth - 1));
        source.push_str(" exit");

        let result = newb_syntax_check(&source);
        if depth <= parser::MAX_BLOCK_DEPTH {
            prop_assert_eq!(result.unwrap().max_block_depth, depth);
        } else {
            prop_assert_eq!(result.unwrap_err().kind, newb::diagnostics::ErrorKind::DepthExceeded);
        }
    }
}

fn newb_syntax_check(source: &str) -> Result<parser::ParseSummary, newb::diagnostics::CompileError> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}
