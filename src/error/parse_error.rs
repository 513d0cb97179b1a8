#[derive(Debug)]
/// Represents all errors that can occur while turning source text into an
/// abstract syntax tree.
pub enum ParseError {
    /// Found a token that no grammar rule expects at this point.
    UnexpectedToken {
        /// A rendering of the offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but something else appeared.
    ExpectedToken {
        /// The spelling of the required token.
        expected: &'static str,
        /// A rendering of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binding or parameter position required an identifier.
    ExpectedIdentifier {
        /// A rendering of the token actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal's text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token {token}.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
            Self::ExpectedToken { expected, found, line } => {
                write!(f, "Error on line {line}: Expected '{expected}' but found {found}.")
            },
            Self::ExpectedIdentifier { found, line } => {
                write!(f, "Error on line {line}: Expected an identifier but found {found}.")
            },
            Self::LiteralTooLarge { literal, line } => {
                write!(f,
                       "Error on line {line}: Integer literal '{literal}' does not fit in 64 bits.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
