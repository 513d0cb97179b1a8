//! # pica
//!
//! pica is a tree-walking interpreter for a small C-like scripting language,
//! written in Rust. Programs live in `.pc` files and flow through a strict
//! pipeline: a scanner turns characters into tokens, a Pratt parser turns
//! tokens into an abstract syntax tree, and an evaluator walks the tree
//! against a chain of lexically scoped binding maps.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Context, parser::Parser};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement`, and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser, never mutated afterwards, and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Keeps the node inventory closed so evaluation can dispatch by variant.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning,
/// parsing, or evaluating code. Every error carries the source line it was
/// detected on; all of them are fatal, because the language has no catch
/// construct.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, evaluation, scopes, values,
/// and the builtin registry to provide a complete runtime for `.pc`
/// programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, scope, and
///   value types.
/// - Provides entry points for interpreting user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and evaluates a complete program.
///
/// Output goes to stdout and `scan` reads from stdin. The program's own
/// result value is discarded; observable behavior happens through the
/// builtins.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
///
/// # Examples
/// ```
/// use pica::run_source;
///
/// // Simple program: evaluation succeeds and no error occurs.
/// let res = run_source("const x = 5; x + 1;");
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let res = run_source("let y = x + 1;"); // 'x' is not defined
/// assert!(res.is_err());
/// ```
pub fn run_source(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = Context::new();
    run_with_context(source, &mut context)
}

/// Parses and evaluates a complete program against an existing context.
///
/// The context supplies the global scope and the I/O handles, so callers
/// (tests in particular) can capture what the program prints and feed what
/// it scans.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
pub fn run_with_context(source: &str,
                        context: &mut Context)
                        -> Result<(), Box<dyn std::error::Error>> {
    let program = Parser::new(source).parse()?;
    context.eval_program(&program)?;
    Ok(())
}
