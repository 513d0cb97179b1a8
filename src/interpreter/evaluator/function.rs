use std::rc::Rc;

use crate::{
    ast::{Block, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        scope::{BindingKind, Scope, ScopeRef},
        value::{Function, Value},
    },
};

impl Context {
    /// Evaluates a function literal.
    ///
    /// The function captures a fresh child of the current scope, which is
    /// what later calls chain their parameter scopes onto. A named literal
    /// binds itself in the current scope (kind FUNC) and evaluates to Null;
    /// an anonymous one evaluates to the function value.
    pub(crate) fn eval_function_literal(name: Option<&str>,
                                        parameters: &[String],
                                        body: &Block,
                                        scope: &ScopeRef)
                                        -> Value {
        let function = Value::Function(Rc::new(Function { parameters: parameters.to_vec(),
                                                          body:       body.clone(),
                                                          scope:      Scope::child_of(scope), }));

        match name {
            Some(name) => {
                scope.borrow_mut().declare(name, function, BindingKind::Func);
                Value::Null
            },
            None => function,
        }
    }

    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments left to right.
    /// Calling a value that is neither a function nor a builtin yields
    /// Null.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize,
                            scope: &ScopeRef)
                            -> EvalResult<Value> {
        let callee = self.eval_expr(callee, scope)?;

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_expr(argument, scope)?);
        }

        match callee {
            Value::Function(function) => self.apply_function(&function, args, line),
            Value::Builtin(builtin) => builtin.call(self, &args, line),
            _ => Ok(Value::Null),
        }
    }

    /// Applies a user-defined function to already-evaluated arguments.
    ///
    /// Parameters bind in a fresh scope whose parent is the function's
    /// captured scope, not the caller's, which is what makes scoping
    /// lexical. The body's result is unwrapped here, exactly once, if a
    /// `return` produced it.
    fn apply_function(&mut self,
                      function: &Rc<Function>,
                      args: Vec<Value>,
                      line: usize)
                      -> EvalResult<Value> {
        if args.len() != function.parameters.len() {
            return Err(RuntimeError::WrongArity { expected: function.parameters.len(),
                                                  found:    args.len(),
                                                  line });
        }

        let call_scope = Scope::child_of(&function.scope);
        for (parameter, arg) in function.parameters.iter().zip(args) {
            call_scope.borrow_mut().declare(parameter, arg, BindingKind::Let);
        }

        let result = self.eval_block(&function.body, &call_scope)?;
        Ok(result.unwrap_return())
    }
}
