// Token-stream helpers and error construction.
//
// This chunk contains the low-level primitives used throughout parsing:
// - Peeking/consuming tokens (`peek`, `advance`)
// - Matching / expecting keywords, operators, punctuation, identifiers and numbers
// - Building syntax and depth errors with the block-depth note attached
// - The recursion guard (`enter_nesting` / `leave_nesting`)

const TOP_LEVEL_ORDER_HINT: &str =
    "declarations must appear in the order: #include, const, var, function, then the main block";
const FUNCTION_ORDER_HINT: &str =
    "inside a function, 'const' declarations come first, then 'var' declarations, then the body block";

impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn peek(&self) -> &Token {
        self.stream.peek()
    }

    fn advance(&mut self) -> &Token {
        self.stream.advance()
    }

    /// Return `true` once every real token has been consumed.
    fn is_at_end(&self) -> bool {
        self.stream.is_at_end()
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume keyword `id` or fail with "Expected '<keyword>' <context>".
    fn expect_keyword(&mut self, id: KeywordId, context: &str) -> Result<(), CompileError> {
        if self.match_keyword(id) {
            Ok(())
        } else {
            Err(self.expected(keywords::as_str(id), context))
        }
    }

    /// Consume punctuation `id` or fail with "Expected '<punct>' <context>".
    fn expect_punct(&mut self, id: PunctuationId, context: &str) -> Result<(), CompileError> {
        if self.match_punct(id) {
            Ok(())
        } else {
            Err(self.expected(punctuation::as_str(id), context))
        }
    }

    /// Consume operator `id` or fail with "Expected '<op>' <context>".
    fn expect_op(&mut self, id: OperatorId, context: &str) -> Result<(), CompileError> {
        if self.check_op(id) {
            self.advance();
            Ok(())
        } else {
            Err(self.expected(operators::as_str(id), context))
        }
    }

    fn expect_ident(&mut self, msg: &str) -> Result<(), CompileError> {
        if self.stream.check(&TokenKind::Ident) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(msg))
        }
    }

    fn expect_number(&mut self, msg: &str) -> Result<(), CompileError> {
        if self.stream.check(&TokenKind::Number) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(msg))
        }
    }

    // ========================================================================
    // Errors
    // ========================================================================

    // Error construction stays out of line so the recursive rules keep small stack frames.

    /// Syntax error at the current token: `msg` followed by what was found and where.
    #[cold]
    #[inline(never)]
    fn error(&self, msg: &str) -> CompileError {
        let found = self.peek();
        let message = format!("{}, found {} on line {}", msg, found.describe(), found.line);
        CompileError::syntax(message, found).with_note(self.depth_note())
    }

    #[cold]
    #[inline(never)]
    fn expected(&self, what: &str, context: &str) -> CompileError {
        self.error(&format!("Expected '{}' {}", what, context))
    }

    #[cold]
    #[inline(never)]
    fn depth_error(&self, msg: &str, bound: usize) -> CompileError {
        CompileError::depth_exceeded(format!("{} of {}", msg, bound), self.peek()).with_note(self.depth_note())
    }

    fn depth_note(&self) -> String {
        format!("current block depth: {}", self.depth)
    }

    /// The current token is a declaration keyword that arrived after a later section started.
    #[cold]
    #[inline(never)]
    fn misplaced_declaration(&self, found: KeywordId, after: Option<KeywordId>, hint: &str) -> CompileError {
        let msg = match after {
            Some(after) if after != found => format!(
                "'{}' declarations must come before '{}' declarations",
                keywords::as_str(found),
                keywords::as_str(after)
            ),
            _ => format!("'{}' declaration is out of order", keywords::as_str(found)),
        };
        self.error(&msg).with_hint(hint)
    }

    /// Keyword id of the current token when it opens a declaration (`#include`, `const`, `var`, `function`).
    fn declaration_keyword(&self) -> Option<KeywordId> {
        self.peek().keyword_id().filter(|id| {
            matches!(
                keywords::category(*id),
                KeywordCategory::Directive | KeywordCategory::Declaration
            )
        })
    }

    // ========================================================================
    // Recursion guard
    // ========================================================================

    fn enter_nesting(&mut self) -> Result<(), CompileError> {
        if self.nesting >= MAX_NESTING {
            return Err(self.depth_error("Statement or expression nesting exceeds the maximum", MAX_NESTING));
        }
        self.nesting += 1;
        Ok(())
    }

    fn leave_nesting(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    fn trace_rule(&self, rule: &'static str) {
        let token = self.peek();
        tracing::trace!(rule, line = token.line, lexeme = %token.text, depth = self.depth, "enter rule");
    }
}
