// Expression and condition parsing methods.
//
// Expressions have no precedence levels: `Term (op Term)*` with every arithmetic operator at the
// same level. Conditions are only valid inside `if (...)`, `while (...)` and after `until`.

impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// `Term (('+'|'-'|'*'|'/'|'mod'|'div') Term)*`
    fn expression(&mut self) -> Result<(), CompileError> {
        self.trace_rule("expression");
        self.term()?;
        while self.peek().kind.is_arithmetic() {
            self.advance();
            self.term()?;
        }
        Ok(())
    }

    /// `'(' Expression ')' | Identifier | Number`
    fn term(&mut self) -> Result<(), CompileError> {
        self.trace_rule("term");
        let kind = self.peek().kind;
        match kind {
            TokenKind::Ident | TokenKind::Number => {
                self.advance();
                Ok(())
            }
            TokenKind::Punctuation(PunctuationId::LParen) => self.parenthesized(),
            _ => Err(self.error("Expected identifier, number, or nested expression")),
        }
    }

    /// `'(' Expression ')'`, guarded by the nesting bound.
    fn parenthesized(&mut self) -> Result<(), CompileError> {
        self.enter_nesting()?;
        self.expect_punct(PunctuationId::LParen, "to open a nested expression")?;
        self.expression()?;
        self.expect_punct(PunctuationId::RParen, "to close the nested expression")?;
        self.leave_nesting();
        Ok(())
    }

    // ========================================================================
    // Conditions
    // ========================================================================

    /// `Term RelOp Term | '(' Expression ')'`
    ///
    /// A leading `(` commits to the parenthesized form, which takes no relational operator.
    fn condition(&mut self) -> Result<(), CompileError> {
        self.trace_rule("condition");
        if self.check_punct(PunctuationId::LParen) {
            return self.parenthesized();
        }

        self.term()?;
        if !self.peek().kind.is_relational() {
            return Err(self.missing_relational());
        }
        self.advance();
        self.term()
    }

    #[cold]
    #[inline(never)]
    fn missing_relational(&self) -> CompileError {
        let expected = operators::relational_spellings()
            .map(|s| format!("'{s}'"))
            .collect::<Vec<_>>()
            .join(", ");
        let mut err = self
            .error("Expected a comparison operator")
            .with_note(format!("comparison operators are {}", expected));
        if self.check_op(OperatorId::EqEq) {
            err = err.with_hint("equality is written with a single '='");
        }
        err
    }
}
