/// Parsing errors.
///
/// Defines all error types that can occur during scanning and parsing of
/// source code. Parse errors include unexpected tokens, missing delimiters,
/// malformed bindings, and oversized integer literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined variables, constant reassignment, type
/// mismatches, division by zero, and arity violations. All of them are
/// fatal; the language has no catch construct.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
