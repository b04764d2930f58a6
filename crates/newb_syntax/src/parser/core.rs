// Parser core types and entrypoint.
//
// This chunk defines the `TokenStream` cursor, the `Parser` state and its top-level `parse()`
// entrypoint, plus the `ParseSummary` returned on success. It is `include!`'d into `crate::parser`
// to keep all parser methods in a single module while avoiding a single “god file”.

/// Maximum `newb ... endb` nesting; one level deeper aborts with `DepthExceeded`.
pub const MAX_BLOCK_DEPTH: usize = 50;

/// Bound on recursion through nested statements (`if`/`else`/`repeat` bodies, blocks) and
/// parenthesized terms.
///
/// Inputs like `((((…` or a long `if (a) if (a) …` chain hit this one and abort with `DepthExceeded`.
/// Sized so a parse at the bound fits a 2 MiB thread stack in an unoptimized build.
pub const MAX_NESTING: usize = 64;

/// Read-only view over a token list with a single forward-moving cursor.
///
/// Reading past the last token yields a synthetic [`TokenKind::Eof`] token whose line is the token
/// count; the stream never indexes out of bounds.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            eof: Token::eof(tokens.len()),
        }
    }

    /// Return the current token without consuming it.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Consume the current token and return it. At the end, keeps returning the EOF token.
    pub fn advance(&mut self) -> &Token {
        let tokens = self.tokens;
        match tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token
            }
            None => &self.eof,
        }
    }

    /// Return `true` if the current token “matches” `kind`.
    ///
    /// ## Notes
    /// - For ID-carrying tokens (keywords/operators/punctuation), the IDs must match.
    /// - For numbers and identifiers only the kind is compared; the text is free.
    pub fn check(&self, kind: &TokenKind) -> bool {
        match (kind, &self.peek().kind) {
            (TokenKind::Keyword(k1), TokenKind::Keyword(k2)) => k1 == k2,
            (TokenKind::Operator(o1), TokenKind::Operator(o2)) => o1 == o2,
            (TokenKind::Punctuation(p1), TokenKind::Punctuation(p2)) => p1 == p2,
            (expected, found) => std::mem::discriminant(expected) == std::mem::discriminant(found),
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Zero-based index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.pos
    }
}

/// What a successful parse saw.
///
/// This is a tally, not a syntax tree: the parser's contract is accept/reject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    pub libraries: usize,
    pub constants: usize,
    /// Variable names declared (`var int a, b;` counts two).
    pub variables: usize,
    pub functions: usize,
    pub statements: usize,
    pub max_block_depth: usize,
}

/// Parser state.
///
/// ## Notes
/// - Parsing is predictive with one token of lookahead and never backtracks.
/// - The first error aborts the parse; there is no resynchronization.
/// - Methods are split across the `parser/` chunks.
pub struct Parser<'a> {
    stream: TokenStream<'a>,
    depth: usize,
    nesting: usize,
    summary: ParseSummary,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token list.
    ///
    /// ## Parameters
    /// - `tokens`: Tokens produced by `newb_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            depth: 0,
            nesting: 0,
            summary: ParseSummary::default(),
        }
    }

    /// Check the whole token list against the `Program` rule.
    ///
    /// ## Errors
    /// Returns the first [`CompileError`]: `Syntax` for grammar violations, `DepthExceeded` when block
    /// nesting passes [`MAX_BLOCK_DEPTH`] (or statement/expression nesting passes [`MAX_NESTING`]).
    pub fn parse(mut self) -> Result<ParseSummary, CompileError> {
        self.program()?;
        Ok(self.summary)
    }
}
