use logos::Logos;

/// A line/column pair locating a token in the source text.
///
/// Lines start at 0 and advance on every `\n`; columns count characters from
/// the start of the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// 0-indexed source line.
    pub line:   usize,
    /// 0-indexed column of the token's first character.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Classifies a lexical token.
///
/// This enum defines every token the language recognizes. Variants carrying
/// text (identifiers, literals) do not store it themselves; the [`Scanner`]
/// pairs each kind with the matched source slice in a [`Token`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Identifier such as `x` or `counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    /// Integer literal such as `42`. Kept textual; the parser converts it.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal such as `"hello"`. The stored literal excludes the
    /// quotes. Escape sequences pass through untouched; `print` resolves
    /// them on output.
    #[regex(r#""[^"]*""#)]
    Str,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    AsteriskAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `%=`
    #[token("%=")]
    PercentAssign,

    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `for`
    #[token("for")]
    For,
    /// `return`
    #[token("return")]
    Return,

    /// A character no other rule recognizes. The scanner never fails; it
    /// emits this kind and lets the parser report the error.
    #[regex(r".", priority = 0)]
    Illegal,
    /// End of input. A NUL byte in the stream also ends it, matching the
    /// byte-reader contract this scanner replaces.
    #[token("\0")]
    Eof,

    /// `\n`. Skipped, but tracked so positions stay accurate.
    #[token("\n", newline)]
    Newline,
}

/// State carried by the lexer while tokenizing.
///
/// Tracks the current line and the byte offset at which it starts, so token
/// columns can be recovered from spans.
#[derive(Default)]
pub struct LexerExtras {
    /// The current 0-indexed line number.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Advances the line counter past a `\n` and skips it.
fn newline(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// A single classified token with its exact source text and position.
///
/// Tokens are immutable values; the parser holds at most two of them
/// (current and peek) at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:    TokenKind,
    /// The exact matched source text. Operators carry their canonical
    /// spelling; string literals exclude their quotes.
    pub literal: String,
    /// Where the token starts.
    pub pos:     Position,
}

impl Token {
    /// A synthetic end-of-input token, also used to seed the parser's
    /// lookahead slots.
    #[must_use]
    pub const fn eof(pos: Position) -> Self {
        Self { kind: TokenKind::Eof,
               literal: String::new(),
               pos }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.literal),
        }
    }
}

/// Produces tokens on demand from a source string.
///
/// `Scanner` wraps the generated [`logos`] lexer and turns its raw matches
/// into [`Token`] values: it attaches positions, strips the quotes off
/// string literals, maps unmatched input to [`TokenKind::Illegal`] and
/// end-of-input to [`TokenKind::Eof`]. Scanning itself never fails.
///
/// # Example
/// ```
/// use pica::interpreter::lexer::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("let x = 5;");
/// assert_eq!(scanner.next_token().kind, TokenKind::Let);
/// assert_eq!(scanner.next_token().literal, "x");
/// ```
pub struct Scanner<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    src:   &'src str,
    done:  bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source),
               src:   source,
               done:  false, }
    }

    /// Returns the next token, or an `Eof` token once the input is
    /// exhausted. Every call after the first `Eof` yields `Eof` again.
    pub fn next_token(&mut self) -> Token {
        if self.done {
            return Token::eof(self.position_at(self.inner.span().start));
        }

        match self.inner.next() {
            Some(Ok(TokenKind::Eof)) | None => {
                self.done = true;
                Token::eof(self.position_at(self.inner.span().start))
            },
            Some(Ok(kind)) => {
                let pos = self.position_at(self.inner.span().start);
                let slice = self.inner.slice();
                let literal = match kind {
                    TokenKind::Str => slice[1..slice.len() - 1].to_string(),
                    _ => slice.to_string(),
                };
                Token { kind, literal, pos }
            },
            Some(Err(())) => {
                Token { kind:    TokenKind::Illegal,
                        literal: self.inner.slice().to_string(),
                        pos:     self.position_at(self.inner.span().start), }
            },
        }
    }

    /// Returns `true` once the end of input has been reached.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.done
    }

    /// Computes the line/column position of a byte offset from the lexer's
    /// line bookkeeping. Columns count characters, not bytes.
    fn position_at(&self, offset: usize) -> Position {
        let line_start = self.inner.extras.line_start;
        Position { line:   self.inner.extras.line,
                   column: self.src[line_start..offset].chars().count(), }
    }
}
