use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::TokenKind, parser::core::ParseResult},
};

/// Binding power of an operator, weakest first.
///
/// The ordering is deliberate: `Call` binds tightest, and `Assign` sits
/// above `Prefix`, so `-x = y` parses as `-(x = y)` and compound targets
/// evaluate right to left. `LessEqual`/`GreaterEqual` share the `Equals`
/// level, below `Less`/`Greater`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Default floor; non-operators live here.
    Lowest,
    /// `==` `!=` `<=` `>=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/` `%`
    Product,
    /// Unary `-` and `!`
    Prefix,
    /// `=` `+=` `-=` `*=` `/=` `%=`
    Assign,
    /// `(` as a call
    Call,
}

impl Precedence {
    /// The binding power of the given token kind, `Lowest` for anything
    /// that is not an infix operator.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual => Self::Equals,
            TokenKind::Less | TokenKind::Greater => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Self::Product,
            TokenKind::Assign
            | TokenKind::PlusAssign
            | TokenKind::MinusAssign
            | TokenKind::AsteriskAssign
            | TokenKind::SlashAssign
            | TokenKind::PercentAssign => Self::Assign,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// Maps a token to its infix operator, `None` for tokens that cannot appear
/// between two operands.
const fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Equal => Some(BinaryOperator::Equal),
        TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Assign => Some(BinaryOperator::Assign),
        TokenKind::PlusAssign => Some(BinaryOperator::AddAssign),
        TokenKind::MinusAssign => Some(BinaryOperator::SubAssign),
        TokenKind::AsteriskAssign => Some(BinaryOperator::MulAssign),
        TokenKind::SlashAssign => Some(BinaryOperator::DivAssign),
        TokenKind::PercentAssign => Some(BinaryOperator::ModAssign),
        _ => None,
    }
}

impl crate::interpreter::parser::Parser<'_> {
    /// Parses an expression with at least the given binding power.
    ///
    /// This is the Pratt loop: advance onto the first token, apply its
    /// prefix handler, then repeatedly fold infix operators onto the left
    /// operand while the lookahead binds tighter than `precedence`. A `;`
    /// in the lookahead always terminates the expression.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expr> {
        self.advance();
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            self.advance();
            left = match self.current.kind {
                TokenKind::LParen => self.parse_call(left)?,
                _ => self.parse_infix(left)?,
            };
        }

        Ok(left)
    }

    /// Dispatches on `current` to the prefix ("nud") handler for its kind.
    fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let line = self.current.pos.line;

        match self.current.kind {
            TokenKind::Ident => Ok(Expr::Identifier { name: self.current.literal.clone(),
                                                      line }),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True => Ok(Expr::BooleanLiteral { value: true, line }),
            TokenKind::False => Ok(Expr::BooleanLiteral { value: false, line }),
            TokenKind::Str => Ok(Expr::StringLiteral { value: self.current.literal.clone(),
                                                       line }),
            TokenKind::Minus => self.parse_unary(UnaryOperator::Neg, line),
            TokenKind::Bang => self.parse_unary(UnaryOperator::Not, line),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::Function => self.parse_function_literal(line),
            TokenKind::If => self.parse_if(line),
            TokenKind::For => self.parse_for(line),
            TokenKind::Eof => Err(ParseError::UnexpectedEndOfInput { line }),
            _ => Err(ParseError::UnexpectedToken { token: self.current.to_string(),
                                                   line }),
        }
    }

    /// Parses the base-10 integer literal sitting in `current`.
    fn parse_integer_literal(&mut self) -> ParseResult<Expr> {
        let line = self.current.pos.line;
        let value = self.current
                        .literal
                        .parse::<i64>()
                        .map_err(|_| ParseError::LiteralTooLarge { literal:
                                                                       self.current.literal.clone(),
                                                                   line })?;

        Ok(Expr::IntegerLiteral { value, line })
    }

    /// Parses `-x` or `!x`; the operand binds at `Prefix` power.
    fn parse_unary(&mut self, op: UnaryOperator, line: usize) -> ParseResult<Expr> {
        let expr = Box::new(self.parse_expression(Precedence::Prefix)?);
        Ok(Expr::UnaryOp { op, expr, line })
    }

    /// Parses `( <expr> )`. Grouping produces no node of its own.
    fn parse_grouped(&mut self) -> ParseResult<Expr> {
        let inner = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::RParen, ")")?;
        Ok(inner)
    }

    /// Folds one infix ("led") operator onto `left`.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// makes every level left-associative.
    fn parse_infix(&mut self, left: Expr) -> ParseResult<Expr> {
        let line = self.current.pos.line;
        let op = binary_operator(self.current.kind)
            .ok_or_else(|| ParseError::UnexpectedToken { token: self.current.to_string(),
                                                         line })?;

        let right = self.parse_expression(Precedence::of(self.current.kind))?;
        Ok(Expr::BinaryOp { left: Box::new(left),
                            op,
                            right: Box::new(right),
                            line })
    }

    /// Parses `fn [name] ( params ) { body }`.
    ///
    /// A leading identifier names the function; the literal then binds
    /// itself at evaluation time instead of producing a value. The closing
    /// `}` of the body is consumed here, like `if` and `for` bodies, so a
    /// named literal works as a statement inside a block.
    fn parse_function_literal(&mut self, line: usize) -> ParseResult<Expr> {
        let name = if self.peek_is(TokenKind::Ident) {
            self.advance();
            Some(self.current.literal.clone())
        } else {
            None
        };

        self.expect(TokenKind::LParen, "(")?;
        let parameters = self.parse_parameters()?;

        self.expect(TokenKind::LBrace, "{")?;
        let body = self.parse_block()?;
        self.expect(TokenKind::RBrace, "}")?;

        Ok(Expr::FunctionLiteral { name,
                                   parameters,
                                   body,
                                   line })
    }

    /// Parses a comma-separated parameter list up to and including the
    /// closing `)`. The empty list is allowed.
    fn parse_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Ok(parameters);
        }

        parameters.push(self.parse_parameter_name()?);
        while self.peek_is(TokenKind::Comma) {
            self.advance();
            parameters.push(self.parse_parameter_name()?);
        }

        self.expect(TokenKind::RParen, ")")?;
        Ok(parameters)
    }

    fn parse_parameter_name(&mut self) -> ParseResult<String> {
        if !self.peek_is(TokenKind::Ident) {
            return Err(ParseError::ExpectedIdentifier { found: self.peek.to_string(),
                                                        line:  self.peek.pos.line, });
        }
        self.advance();
        Ok(self.current.literal.clone())
    }

    /// Parses `if ( cond ) { … }` with an optional `else { … }`.
    fn parse_if(&mut self, line: usize) -> ParseResult<Expr> {
        self.expect(TokenKind::LParen, "(")?;
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);
        self.expect(TokenKind::RParen, ")")?;

        self.expect(TokenKind::LBrace, "{")?;
        let consequence = self.parse_block()?;
        self.expect(TokenKind::RBrace, "}")?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect(TokenKind::LBrace, "{")?;
            let block = self.parse_block()?;
            self.expect(TokenKind::RBrace, "}")?;
            Some(block)
        } else {
            None
        };

        Ok(Expr::If { condition,
                      consequence,
                      alternative,
                      line })
    }

    /// Parses `for ( let …; cond; post; ) { body }`.
    ///
    /// The initializer must be a let-statement and consumes its own `;`;
    /// the `;` after the condition is required; the one after the post
    /// statement is optional, consumed by the expression statement itself.
    fn parse_for(&mut self, line: usize) -> ParseResult<Expr> {
        self.expect(TokenKind::LParen, "(")?;

        if !self.peek_is(TokenKind::Let) {
            return Err(ParseError::ExpectedToken { expected: "let",
                                                   found:    self.peek.to_string(),
                                                   line:     self.peek.pos.line, });
        }
        let init = Box::new(self.parse_let_statement()?);

        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);
        self.expect(TokenKind::Semicolon, ";")?;

        let post = Box::new(self.parse_expression_statement()?);
        self.expect(TokenKind::RParen, ")")?;

        self.expect(TokenKind::LBrace, "{")?;
        let body = self.parse_block()?;
        self.expect(TokenKind::RBrace, "}")?;

        Ok(Expr::For { init,
                       condition,
                       post,
                       body,
                       line })
    }

    /// Parses the argument list of a call; `current` is the `(` and `left`
    /// is the callee expression.
    fn parse_call(&mut self, left: Expr) -> ParseResult<Expr> {
        let line = self.current.pos.line;
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
        } else {
            arguments.push(self.parse_expression(Precedence::Lowest)?);
            while self.peek_is(TokenKind::Comma) {
                self.advance();
                arguments.push(self.parse_expression(Precedence::Lowest)?);
            }
            self.expect(TokenKind::RParen, ")")?;
        }

        Ok(Expr::Call { callee: Box::new(left),
                        arguments,
                        line })
    }
}
