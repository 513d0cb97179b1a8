use std::{
    io::{BufRead, Write},
    rc::Rc,
};

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::builtin,
        scope::{BindingKind, Scope, ScopeRef},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state that outlives any single node:
/// the global scope at the root of every scope chain, and the host streams
/// the builtins write to and read from. Inner scopes are created and
/// dropped as evaluation enters functions and loops; the context itself is
/// created once per run.
pub struct Context {
    pub(crate) globals: ScopeRef,
    pub(crate) out:     Box<dyn Write>,
    pub(crate) input:   Box<dyn BufRead>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with an empty global scope, writing to stdout and
    /// reading from stdin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(Box::new(std::io::stdout()), Box::new(std::io::stdin().lock()))
    }

    /// Creates a context with the given output and input handles.
    ///
    /// Tests use this to capture what a program prints and to feed `scan`.
    #[must_use]
    pub fn with_io(out: Box<dyn Write>, input: Box<dyn BufRead>) -> Self {
        Self { globals: Scope::new(),
               out,
               input }
    }

    /// Evaluates a whole program in the global scope and returns the last
    /// statement's value.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised; evaluation stops there.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Value> {
        let scope = Rc::clone(&self.globals);
        self.eval_statements(&program.statements, &scope)
    }

    /// Evaluates a braced block in the given scope.
    ///
    /// Blocks do not open scopes of their own; only functions and for-loops
    /// do.
    pub(crate) fn eval_block(&mut self, block: &Block, scope: &ScopeRef) -> EvalResult<Value> {
        self.eval_statements(&block.statements, scope)
    }

    /// Runs statements in order and returns the last one's value, or Null
    /// for an empty sequence.
    ///
    /// A `Return` value stops the walk and is handed back unwrapped, so it
    /// keeps propagating until a call boundary removes the wrapper.
    fn eval_statements(&mut self, statements: &[Statement], scope: &ScopeRef) -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in statements {
            result = self.eval_statement(statement, scope)?;
            if matches!(result, Value::Return(_)) {
                break;
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement. Statements evaluate to Null unless
    /// they are expression statements or returns.
    pub(crate) fn eval_statement(&mut self,
                                 statement: &Statement,
                                 scope: &ScopeRef)
                                 -> EvalResult<Value> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval_expr(value, scope)?;
                scope.borrow_mut().declare(name, value, BindingKind::Let);
                Ok(Value::Null)
            },
            Statement::Const { name, value, .. } => {
                let value = self.eval_expr(value, scope)?;
                scope.borrow_mut().declare(name, value, BindingKind::Const);
                Ok(Value::Null)
            },
            Statement::Return { value, .. } => {
                let value = self.eval_expr(value, scope)?;
                Ok(Value::Return(Box::new(value)))
            },
            Statement::Expression { expr, .. } => self.eval_expr(expr, scope),
        }
    }

    /// Evaluates a single expression node.
    ///
    /// This is the heart of the tree walk: dispatch by variant, recursing
    /// into operands in left-to-right pre-order.
    pub(crate) fn eval_expr(&mut self, expr: &Expr, scope: &ScopeRef) -> EvalResult<Value> {
        match expr {
            Expr::Identifier { name, line } => Self::eval_identifier(name, *line, scope),
            Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
            Expr::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),
            Expr::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),
            Expr::UnaryOp { op, expr, .. } => self.eval_unary_op(*op, expr, scope),
            Expr::BinaryOp { left, op, right, line } => {
                self.eval_binary_op(left, *op, right, *line, scope)
            },
            Expr::If { condition,
                       consequence,
                       alternative, .. } => {
                self.eval_if(condition, consequence, alternative.as_ref(), scope)
            },
            Expr::For { init,
                        condition,
                        post,
                        body, .. } => self.eval_for(init, condition, post, body, scope),
            Expr::FunctionLiteral { name,
                                    parameters,
                                    body, .. } => {
                Ok(Self::eval_function_literal(name.as_deref(), parameters, body, scope))
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line, scope),
        }
    }

    /// Resolves a name: the scope chain first, then the builtin registry.
    ///
    /// The ordering lets user bindings shadow builtins.
    fn eval_identifier(name: &str, line: usize, scope: &ScopeRef) -> EvalResult<Value> {
        if let Some(value) = scope.borrow().get(name) {
            return Ok(value);
        }
        if let Some(builtin) = builtin::lookup(name) {
            return Ok(Value::Builtin(builtin));
        }

        Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                              line })
    }
}
