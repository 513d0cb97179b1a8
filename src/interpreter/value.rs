use std::rc::Rc;

use crate::{
    ast::Block,
    interpreter::{evaluator::builtin::Builtin, scope::ScopeRef},
};

/// A user-defined function value.
///
/// Carries the parameter list, the body to evaluate on call, and the scope
/// captured where the literal was evaluated. The captured scope is what
/// makes closures work: it is shared, so mutations of outer bindings remain
/// visible through it.
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The lexical scope captured at definition time.
    pub scope:      ScopeRef,
}

impl std::fmt::Debug for Function {
    /// Omits the captured scope: a closure bound in the scope it captured
    /// forms a reference cycle that a derived `Debug` would chase forever.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .finish_non_exhaustive()
    }
}

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce. `Return` is internal
/// plumbing: it wraps the operand of a `return` statement while it unwinds
/// through enclosing blocks and is unwrapped at the call boundary, so user
/// code never observes it.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, produced by literals and comparisons.
    Bool(bool),
    /// An owned UTF-8 string.
    Str(String),
    /// The absence of a value. Statements and side-effecting expressions
    /// evaluate to this.
    Null,
    /// A user-defined function together with its captured scope.
    Function(Rc<Function>),
    /// A host-provided builtin function.
    Builtin(Builtin),
    /// A value unwinding out of a `return` statement.
    Return(Box<Self>),
}

impl Value {
    /// The truthiness predicate used by `if`, `for`, and `!`.
    ///
    /// Only `Bool(true)` is truthy. Integers and strings are not; conditions
    /// must be explicit comparisons.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// A short name for the value's type, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::Null => "null",
            Self::Function(_) => "function",
            Self::Builtin(_) => "builtin function",
            Self::Return(inner) => inner.type_name(),
        }
    }

    /// Unwraps one `Return` layer, if present.
    ///
    /// Call evaluation applies this exactly once when a function body
    /// finishes, which is the only place the wrapper may be removed.
    #[must_use]
    pub fn unwrap_return(self) -> Self {
        match self {
            Self::Return(inner) => *inner,
            other => other,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl PartialEq for Value {
    /// Data values compare by content. Functions compare by identity (two
    /// function values are equal only if they are the same closure), and a
    /// `Return` wrapper compares as its payload.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a == b,
            (Self::Return(a), Self::Return(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    /// Renders the value's inspect form: integers as decimal digits,
    /// booleans as `true`/`false`, null as `null`, strings as their raw
    /// bytes, functions as opaque labels.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Function(_) => write!(f, "function"),
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(inner) => write!(f, "{inner}"),
        }
    }
}
