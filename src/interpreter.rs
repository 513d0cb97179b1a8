/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// threads the scope chain, and produces values. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages bindings, closures, and control flow.
/// - Reports runtime errors such as undefined variables or division by
///   zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The scanner reads the raw source text and produces tokens on demand,
/// each corresponding to a meaningful language element such as an integer,
/// an identifier, an operator, a delimiter, or a keyword. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, literal
///   text, and source position.
/// - Handles integer and string literals, identifiers, and the compound
///   operators.
/// - Surfaces unrecognized input as `Illegal` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the scanner with a single token of
/// lookahead and constructs an AST via top-down operator-precedence (Pratt)
/// parsing.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves precedence and associativity across prefix, infix, call,
///   grouping and control-flow forms.
/// - Reports syntax errors with source line information.
pub mod parser;
/// The scope module implements the lexical binding environment.
///
/// Scopes form a chain from the innermost binding map out to the global
/// one. Function values share scope nodes with their enclosing code, which
/// is how closures capture outer mutable state.
///
/// # Responsibilities
/// - Declares bindings with their kind (`const`, `let`, function).
/// - Resolves names innermost-first along the chain.
/// - Enforces the `const` discipline on assignment.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the tagged `Value` enum covering every type a
/// program can produce, along with the truthiness predicate and the inspect
/// forms used for output.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Implements equality, truthiness, and display formatting.
/// - Carries user functions together with their captured scopes.
pub mod value;
