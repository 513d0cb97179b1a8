use crate::{
    ast::{Block, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{core::ParseResult, expression::Precedence},
    },
};

impl crate::interpreter::parser::Parser<'_> {
    /// Parses a single statement, dispatching on the lookahead token.
    ///
    /// Grammar:
    /// ```text
    /// statement := let_statement
    ///            | const_statement
    ///            | return_statement
    ///            | expression_statement
    /// ```
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.peek.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Const => self.parse_const_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <ident> = <expr>` with an optional trailing `;`.
    ///
    /// Also used by the for-loop header, whose initializer must be a
    /// let-statement.
    pub(super) fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let (name, value, line) = self.parse_binding()?;
        Ok(Statement::Let { name, value, line })
    }

    /// Parses `const <ident> = <expr>` with an optional trailing `;`.
    fn parse_const_statement(&mut self) -> ParseResult<Statement> {
        let (name, value, line) = self.parse_binding()?;
        Ok(Statement::Const { name, value, line })
    }

    /// Shared body of `let` and `const`: the keyword sits in `peek` on
    /// entry and the whole binding, including an optional `;`, is consumed.
    fn parse_binding(&mut self) -> ParseResult<(String, Expr, usize)> {
        self.advance();
        let line = self.current.pos.line;

        if !self.peek_is(TokenKind::Ident) {
            return Err(ParseError::ExpectedIdentifier { found: self.peek.to_string(),
                                                        line:  self.peek.pos.line, });
        }
        self.advance();
        let name = self.current.literal.clone();

        self.expect(TokenKind::Assign, "=")?;
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok((name, value, line))
    }

    /// Parses `return <expr>` with an optional trailing `;`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.advance();
        let line = self.current.pos.line;

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Return { value, line })
    }

    /// Parses a bare expression in statement position, with an optional
    /// trailing `;`.
    ///
    /// Also used by the for-loop header for its post position.
    pub(super) fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.peek.pos.line;

        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Expression { expr, line })
    }

    /// Parses statements up to (but not through) the closing `}`.
    ///
    /// The brace stays in `peek`; the caller consumes it, so a construct
    /// owning a block decides what may follow it.
    pub(super) fn parse_block(&mut self) -> ParseResult<Block> {
        let mut statements = Vec::new();

        while !self.peek_is(TokenKind::RBrace) && !self.peek_is(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
        }

        Ok(Block { statements })
    }
}
