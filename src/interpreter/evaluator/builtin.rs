use std::io::{Read, Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context (for its I/O handles), the
/// already-evaluated arguments, and the call's line number.
pub type BuiltinFn = fn(&mut Context, &[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    /// The builtin takes exactly this many arguments.
    Exact(usize),
    /// The builtin takes any number of arguments.
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Variadic => true,
        }
    }

    /// The exact count this constraint demands, if it demands one.
    const fn expected(self) -> usize {
        match self {
            Self::Exact(m) => m,
            Self::Variadic => 0,
        }
    }
}

/// A host-provided function, as stored in the registry and inside
/// [`Value::Builtin`].
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name user code calls it by.
    pub name: &'static str,
    arity:    Arity,
    func:     BuiltinFn,
}

impl Builtin {
    /// Checks arity and invokes the handler.
    pub(crate) fn call(&self,
                       context: &mut Context,
                       args: &[Value],
                       line: usize)
                       -> EvalResult<Value> {
        if !self.arity.check(args.len()) {
            return Err(RuntimeError::WrongArity { expected: self.arity.expected(),
                                                  found:    args.len(),
                                                  line });
        }
        (self.func)(context, args, line)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Defines the builtin registry.
///
/// Each entry provides a name, an arity specification, and the handler.
/// The macro produces the static lookup table and the public list of
/// builtin names.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of every builtin function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print" => { arity: Arity::Variadic, func: print },
    "scan"  => { arity: Arity::Variadic, func: scan },
    "int"   => { arity: Arity::Exact(1), func: int },
}

/// Finds a builtin by name.
///
/// The evaluator consults this only after lookup fails in every lexical
/// scope, so user bindings shadow builtins.
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().copied().find(|b| b.name == name)
}

/// Maps a host stream failure to the fatal runtime error for `line`.
fn io_error(e: &std::io::Error, line: usize) -> RuntimeError {
    RuntimeError::Io { details: e.to_string(),
                       line }
}

/// Writes the inspect form of each argument, in order, with no separator.
///
/// Escape sequences left in string literals by the scanner (`\n`, `\t`,
/// `\r`, `\"`, `\\`) are resolved here, on the output path. Returns Null.
fn print(context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    for arg in args {
        write!(context.out, "{}", unescape(&arg.to_string())).map_err(|e| io_error(&e, line))?;
    }
    context.out.flush().map_err(|e| io_error(&e, line))?;

    Ok(Value::Null)
}

/// Prompts with its arguments, then reads one whitespace-delimited token
/// from the input handle and returns it as a String.
fn scan(context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    print(context, args, line)?;

    let mut token = Vec::new();
    let mut byte = [0_u8; 1];
    loop {
        let n = context.input.read(&mut byte).map_err(|e| io_error(&e, line))?;
        if n == 0 {
            break;
        }
        if byte[0].is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(byte[0]);
    }

    Ok(Value::Str(String::from_utf8_lossy(&token).into_owned()))
}

/// Converts its argument to an Integer.
///
/// Integers pass through unchanged; strings are parsed as base-10. Any
/// other type, and any string that does not parse, is fatal.
fn int(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Str(s) => {
            s.parse::<i64>()
             .map(Value::Integer)
             .map_err(|_| RuntimeError::InvalidArgument { details: format!("'{s}' is not a base-10 integer"),
                                                          line })
        },
        other => Err(RuntimeError::InvalidArgument { details: format!("`int` does not accept a {}",
                                                                      other.type_name()),
                                                     line }),
    }
}

/// Replaces the two-character escape sequences `\n`, `\t`, `\r`, `\"` and
/// `\\` with their literal counterparts, in that order.
fn unescape(s: &str) -> String {
    s.replace("\\n", "\n")
     .replace("\\t", "\t")
     .replace("\\r", "\r")
     .replace("\\\"", "\"")
     .replace("\\\\", "\\")
}
