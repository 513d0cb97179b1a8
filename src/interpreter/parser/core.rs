use crate::{
    ast::Program,
    error::ParseError,
    interpreter::lexer::{Position, Scanner, Token, TokenKind},
};

/// Result type used by all grammar rules.
pub type ParseResult<T> = Result<T, ParseError>;

/// Builds an abstract syntax tree from a token stream.
///
/// The parser pulls tokens from the [`Scanner`] on demand and keeps exactly
/// two of them: `current`, the token a handler is looking at, and `peek`,
/// the single token of lookahead every parsing decision is allowed.
/// Statement dispatch inspects `peek`; expression handlers advance first and
/// then dispatch on `current`.
///
/// # Example
/// ```
/// use pica::interpreter::parser::Parser;
///
/// let program = Parser::new("let x = 1 + 2;").parse().unwrap();
/// assert_eq!(program.statements.len(), 1);
/// ```
pub struct Parser<'src> {
    scanner:            Scanner<'src>,
    pub(super) current: Token,
    pub(super) peek:    Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser over the given source text and primes the lookahead.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut scanner = Scanner::new(source);
        let peek = scanner.next_token();
        Self { scanner,
               current: Token::eof(Position::default()),
               peek }
    }

    /// Parses the whole program, consuming tokens until end of input.
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered; the parser does not
    /// recover.
    pub fn parse(mut self) -> ParseResult<Program> {
        let mut program = Program::default();

        while !self.peek_is(TokenKind::Eof) {
            program.statements.push(self.parse_statement()?);
        }

        Ok(program)
    }

    /// Promotes `peek` into `current` and refills `peek` from the scanner.
    pub(super) fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.scanner.next_token());
    }

    /// Whether the lookahead token has the given kind.
    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Consumes the lookahead token if it has the given kind; fails with
    /// an [`ParseError::ExpectedToken`] naming `spelling` otherwise.
    pub(super) fn expect(&mut self, kind: TokenKind, spelling: &'static str) -> ParseResult<()> {
        if self.peek_is(kind) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::ExpectedToken { expected: spelling,
                                            found:    self.peek.to_string(),
                                            line:     self.peek.pos.line, })
        }
    }

    /// Consumes the statement terminator if one is present. Trailing
    /// semicolons are optional after every statement.
    pub(super) fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }
}
