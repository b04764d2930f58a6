// Statement parsing methods.
//
// This chunk parses `newb ... endb` blocks and every statement form that can appear inside them.
//
// ## Notes
// - The enclosing loop (block body or `repeat` body) consumes the `;` after each statement; the
//   statement rules themselves never do.
// - Block depth is checked on entry, before `newb` is consumed, so the error points at the `newb`
//   that would have opened level `MAX_BLOCK_DEPTH + 1`.

impl<'a> Parser<'a> {
    // ========================================================================
    // Blocks
    // ========================================================================

    /// `'newb' (Statement ';')* 'endb'`
    fn block(&mut self) -> Result<(), CompileError> {
        self.trace_rule("block");
        if self.check_keyword(KeywordId::Newb) && self.depth >= MAX_BLOCK_DEPTH {
            return Err(self.depth_error("Exceeded maximum nested block depth", MAX_BLOCK_DEPTH));
        }
        self.expect_keyword(KeywordId::Newb, "to start a block")?;
        self.depth += 1;
        self.summary.max_block_depth = self.summary.max_block_depth.max(self.depth);

        while !self.check_keyword(KeywordId::Endb) && !self.is_at_end() {
            self.statement()?;
            self.terminator()?;
        }

        self.expect_keyword(KeywordId::Endb, "to close the block")?;
        self.depth -= 1;
        Ok(())
    }

    /// The `;` that follows every statement in a block or `repeat` body.
    fn terminator(&mut self) -> Result<(), CompileError> {
        if self.match_punct(PunctuationId::Semicolon) {
            Ok(())
        } else {
            Err(self.missing_terminator())
        }
    }

    #[cold]
    #[inline(never)]
    fn missing_terminator(&self) -> CompileError {
        let err = self.error("Expected ';' after statement");
        if self.check_keyword(KeywordId::Endb) || self.check_keyword(KeywordId::Until) {
            err.with_hint("the last statement before 'endb' or 'until' needs its ';' too")
        } else {
            err
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<(), CompileError> {
        self.trace_rule("statement");
        self.enter_nesting()?;

        let kind = self.peek().kind;
        match kind {
            TokenKind::Keyword(KeywordId::Newb) => self.block()?,
            TokenKind::Keyword(KeywordId::If) => self.if_stmt()?,
            TokenKind::Keyword(KeywordId::While) => self.while_stmt()?,
            TokenKind::Keyword(KeywordId::Repeat) => self.repeat_stmt()?,
            TokenKind::Keyword(KeywordId::Call) => self.call_stmt()?,
            TokenKind::Keyword(KeywordId::Cin) => self.cin_stmt()?,
            TokenKind::Keyword(KeywordId::Cout) => self.cout_stmt()?,
            TokenKind::Keyword(KeywordId::Exit) => self.exit_stmt(),
            TokenKind::Ident => self.assignment()?,
            _ => return Err(self.missing_statement()),
        }

        self.summary.statements += 1;
        self.leave_nesting();
        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn missing_statement(&self) -> CompileError {
        let err = self.error("Expected a statement");
        if self.check_keyword(KeywordId::Else) {
            err.with_hint("'else' must directly follow the 'if' branch; remove the ';' before it")
        } else if self.declaration_keyword().is_some() {
            err.with_hint("declarations are only allowed before the main block or a function body")
        } else {
            err
        }
    }

    /// `'if' '(' Condition ')' Statement ('else' Statement)?`
    fn if_stmt(&mut self) -> Result<(), CompileError> {
        self.trace_rule("if");
        self.expect_keyword(KeywordId::If, "to start an if statement")?;
        self.expect_punct(PunctuationId::LParen, "after 'if'")?;
        self.condition()?;
        self.expect_punct(PunctuationId::RParen, "after condition")?;
        self.statement()?;

        if self.match_keyword(KeywordId::Else) {
            self.statement()?;
        }
        Ok(())
    }

    /// `'while' '(' Condition ')' Block`
    fn while_stmt(&mut self) -> Result<(), CompileError> {
        self.trace_rule("while");
        self.expect_keyword(KeywordId::While, "to start a while loop")?;
        self.expect_punct(PunctuationId::LParen, "after 'while'")?;
        self.condition()?;
        self.expect_punct(PunctuationId::RParen, "after condition")?;
        self.block()
    }

    /// `'repeat' (Statement ';')* 'until' Condition`
    fn repeat_stmt(&mut self) -> Result<(), CompileError> {
        self.trace_rule("repeat");
        self.expect_keyword(KeywordId::Repeat, "to start a repeat loop")?;

        while !self.check_keyword(KeywordId::Until) && !self.is_at_end() {
            self.statement()?;
            self.terminator()?;
        }

        self.expect_keyword(KeywordId::Until, "after repeat body")?;
        self.condition()
    }

    /// `'call' Identifier`
    fn call_stmt(&mut self) -> Result<(), CompileError> {
        self.trace_rule("call");
        self.expect_keyword(KeywordId::Call, "to start a call")?;
        self.expect_ident("Expected function name after 'call'")
    }

    /// `'cin' '>' '>' Identifier`
    fn cin_stmt(&mut self) -> Result<(), CompileError> {
        self.trace_rule("cin");
        self.expect_keyword(KeywordId::Cin, "to start an input statement")?;
        self.expect_op(OperatorId::Gt, "after 'cin' (input is written 'cin >> name')")?;
        self.expect_op(OperatorId::Gt, "after 'cin >' (input is written 'cin >> name')")?;
        self.expect_ident("Expected variable after 'cin >>'")
    }

    /// `'cout' '<' '<' (Identifier | Number)`
    fn cout_stmt(&mut self) -> Result<(), CompileError> {
        self.trace_rule("cout");
        self.expect_keyword(KeywordId::Cout, "to start an output statement")?;
        self.expect_op(OperatorId::Lt, "after 'cout' (output is written 'cout << value')")?;
        self.expect_op(OperatorId::Lt, "after 'cout <' (output is written 'cout << value')")?;

        if self.stream.check(&TokenKind::Ident) || self.stream.check(&TokenKind::Number) {
            self.advance();
            Ok(())
        } else {
            Err(self.error("Expected variable or number after 'cout <<'"))
        }
    }

    /// `'exit'` inside a block. Its `;` belongs to the enclosing block.
    fn exit_stmt(&mut self) {
        self.trace_rule("exit");
        self.advance();
    }

    /// `Identifier ':=' Expression`
    fn assignment(&mut self) -> Result<(), CompileError> {
        self.trace_rule("assignment");
        self.expect_ident("Expected variable name for assignment")?;
        if self.check_op(OperatorId::Eq) {
            return Err(self
                .error("Expected ':=' in assignment")
                .with_hint("assignment is written ':='; '=' only compares values inside a condition"));
        }
        self.expect_op(OperatorId::Assign, "in assignment")?;
        self.expression()
    }
}
