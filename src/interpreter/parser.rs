/// Parser state and the top-level parse loop.
///
/// Holds the two-token lookahead window over the scanner and the shared
/// helpers (advance, expect) the grammar rules are written against.
pub mod core;

/// Statement parsing.
///
/// Implements the statement-boundary dispatch: `let`, `const`, `return`,
/// expression statements, and braced blocks.
pub mod statement;

/// Expression parsing.
///
/// The Pratt precedence ladder and the prefix/infix handlers for every
/// expression form, from literals to function literals, conditionals,
/// loops, and calls.
pub mod expression;

pub use core::Parser;
