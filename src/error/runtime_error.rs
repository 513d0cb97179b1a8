#[derive(Debug)]
/// Represents all errors that can occur while evaluating a program.
///
/// Every variant is fatal; the language has no catch construct.
pub enum RuntimeError {
    /// Tried to read or assign a name with no binding in any scope.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a `const` binding.
    ConstReassignment {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operation received operands of an unsupported type.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division or modulus by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call supplied the wrong number of arguments.
    WrongArity {
        /// How many arguments the callee takes.
        expected: usize,
        /// How many arguments the call supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A builtin rejected one of its arguments.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reading or writing a host stream failed.
    Io {
        /// The underlying I/O error, rendered.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::ConstReassignment { name, line } => {
                write!(f, "Error on line {line}: Cannot reassign constant '{name}'.")
            },
            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::WrongArity { expected, found, line } => {
                write!(f,
                       "Error on line {line}: Wrong number of arguments: expected {expected}, found {found}.")
            },
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::Io { details, line } => write!(f, "Error on line {line}: I/O error: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
