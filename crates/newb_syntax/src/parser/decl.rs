// Declaration parsing methods.
//
// This chunk parses the fixed top-level sequence of a program: `#include` lines, `const` and `var`
// declarations, `function` declarations, the main block and the closing `exit`.
//
// ## Notes
// - Sections cannot recur: once the parser moves past a declaration class, a later keyword of that
//   class is an ordering error rather than a generic "expected 'newb'".

impl<'a> Parser<'a> {
    // ========================================================================
    // Program
    // ========================================================================

    fn program(&mut self) -> Result<(), CompileError> {
        self.trace_rule("program");
        let mut last: Option<KeywordId> = None;

        while self.check_keyword(KeywordId::Include) {
            self.library_decl()?;
            last = Some(KeywordId::Include);
        }
        while self.check_keyword(KeywordId::Const) {
            self.const_decl()?;
            last = Some(KeywordId::Const);
        }
        while self.check_keyword(KeywordId::Var) {
            self.var_decl()?;
            last = Some(KeywordId::Var);
        }
        while self.check_keyword(KeywordId::Function) {
            self.function_decl()?;
            last = Some(KeywordId::Function);
        }

        if let Some(found) = self.declaration_keyword() {
            return Err(self.misplaced_declaration(found, last, TOP_LEVEL_ORDER_HINT));
        }

        self.block()?;
        self.program_exit()
    }

    /// `'exit' ';'?` followed by the end of input.
    fn program_exit(&mut self) -> Result<(), CompileError> {
        self.trace_rule("exit");
        if !self.check_keyword(KeywordId::Exit) {
            let mut err = self.error("Expected 'exit' after the main block");
            if self.check_keyword(KeywordId::Newb) {
                err = err.with_hint("a program has exactly one top-level block; nest further blocks inside it");
            }
            return Err(err);
        }
        self.advance();
        self.match_punct(PunctuationId::Semicolon);

        if !self.is_at_end() {
            return Err(self.error("Unexpected token after 'exit'"));
        }
        Ok(())
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// `'#include' '<' Identifier '>' ';'`
    fn library_decl(&mut self) -> Result<(), CompileError> {
        self.trace_rule("library_decl");
        self.expect_keyword(KeywordId::Include, "to start a library declaration")?;
        self.expect_punct(PunctuationId::LAngle, "after '#include'")?;
        self.expect_ident("Expected library name after '<'")?;
        self.expect_punct(PunctuationId::RAngle, "after library name")?;
        self.expect_punct(PunctuationId::Semicolon, "after library declaration")?;
        self.summary.libraries += 1;
        Ok(())
    }

    /// `'const' Identifier Identifier '=' Number ';'`
    fn const_decl(&mut self) -> Result<(), CompileError> {
        self.trace_rule("const_decl");
        self.expect_keyword(KeywordId::Const, "to start a constant declaration")?;
        self.expect_ident("Expected type (e.g. int, float) after 'const'")?;
        self.expect_ident("Expected constant name after type")?;
        if self.check_op(OperatorId::Assign) {
            return Err(self
                .error("Expected '=' after constant name")
                .with_hint("constants are initialized with '=', ':=' is for assignments"));
        }
        self.expect_op(OperatorId::Eq, "after constant name")?;
        self.expect_number("Expected constant value after '='")?;
        self.expect_punct(PunctuationId::Semicolon, "at the end of constant declaration")?;
        self.summary.constants += 1;
        Ok(())
    }

    /// `'var' Identifier Identifier (',' Identifier)* ';'`
    fn var_decl(&mut self) -> Result<(), CompileError> {
        self.trace_rule("var_decl");
        self.expect_keyword(KeywordId::Var, "to start a variable declaration")?;
        self.expect_ident("Expected type after 'var'")?;
        self.expect_ident("Expected variable name")?;
        self.summary.variables += 1;

        while self.match_punct(PunctuationId::Comma) {
            self.expect_ident("Expected variable name after ','")?;
            self.summary.variables += 1;
        }

        self.expect_punct(PunctuationId::Semicolon, "at the end of variable declaration")
    }

    /// `'function' Identifier ';' ConstDecl* VarDecl* Block ';'`
    fn function_decl(&mut self) -> Result<(), CompileError> {
        self.trace_rule("function_decl");
        self.expect_keyword(KeywordId::Function, "to start a function declaration")?;
        self.expect_ident("Expected function name")?;
        self.expect_punct(PunctuationId::Semicolon, "after function name")?;

        let mut last: Option<KeywordId> = None;
        while self.check_keyword(KeywordId::Const) {
            self.const_decl()?;
            last = Some(KeywordId::Const);
        }
        while self.check_keyword(KeywordId::Var) {
            self.var_decl()?;
            last = Some(KeywordId::Var);
        }
        if let Some(found) = self.declaration_keyword() {
            return Err(self.misplaced_declaration(found, last, FUNCTION_ORDER_HINT));
        }

        self.block()?;
        self.expect_punct(PunctuationId::Semicolon, "after function body")?;
        self.summary.functions += 1;
        Ok(())
    }
}
