use crate::{
    ast::{Block, Expr, Statement},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        scope::{Scope, ScopeRef},
        value::Value,
    },
};

impl Context {
    /// Evaluates an `if` expression.
    ///
    /// The branches run in the enclosing scope; conditionals do not open a
    /// scope of their own. A missing alternative yields Null.
    pub(crate) fn eval_if(&mut self,
                          condition: &Expr,
                          consequence: &Block,
                          alternative: Option<&Block>,
                          scope: &ScopeRef)
                          -> EvalResult<Value> {
        if self.eval_expr(condition, scope)?.is_truthy() {
            self.eval_block(consequence, scope)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, scope)
        } else {
            Ok(Value::Null)
        }
    }

    /// Evaluates a `for` loop.
    ///
    /// The loop owns a child scope; the initializer runs in it once, and
    /// every pass evaluates the condition, then the body, then the post
    /// statement. A `return` unwinding out of the body breaks the loop.
    /// The loop expression itself always evaluates to Null; the body's
    /// values are discarded.
    pub(crate) fn eval_for(&mut self,
                           init: &Statement,
                           condition: &Expr,
                           post: &Statement,
                           body: &Block,
                           scope: &ScopeRef)
                           -> EvalResult<Value> {
        let loop_scope = Scope::child_of(scope);
        self.eval_statement(init, &loop_scope)?;

        loop {
            if !self.eval_expr(condition, &loop_scope)?.is_truthy() {
                break;
            }

            let result = self.eval_block(body, &loop_scope)?;
            if matches!(result, Value::Return(_)) {
                break;
            }

            self.eval_statement(post, &loop_scope)?;
        }

        Ok(Value::Null)
    }
}
