/// Core evaluation logic and context management.
///
/// Contains the evaluation context (global scope plus host I/O handles) and
/// the match-dispatch over statement and expression nodes.
pub mod core;

/// Unary operator evaluation.
///
/// Implements logical negation of truthiness and arithmetic negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, comparison, and the assignment forms, including
/// the rebind path for identifier targets.
pub mod binary;

/// Control-flow evaluation.
///
/// Evaluates conditionals and C-style for-loops, including the loop's
/// dedicated child scope and early-return handling.
pub mod flow;

/// Function evaluation.
///
/// Handles function literals, closure capture, calls, arity checking, and
/// unwrapping of propagating return values.
pub mod function;

/// Builtin functions.
///
/// The host-side function registry (`print`, `scan`, `int`), consulted only
/// when identifier lookup fails in every lexical scope.
pub mod builtin;
