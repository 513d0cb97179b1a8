use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        scope::ScopeRef,
        value::Value,
    },
};

impl Context {
    /// Evaluates a prefix operation.
    ///
    /// `!` negates truthiness by value: `!true` is `false`, `!false` and
    /// `!null` are `true`, and anything else negates to `false`.
    ///
    /// `-` negates an Integer with two's-complement wrapping; on any other
    /// operand it yields Null, which then propagates like any other value.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                expr: &Expr,
                                scope: &ScopeRef)
                                -> EvalResult<Value> {
        let operand = self.eval_expr(expr, scope)?;

        Ok(match op {
            UnaryOperator::Not => match operand {
                Value::Bool(b) => Value::Bool(!b),
                Value::Null => Value::Bool(true),
                _ => Value::Bool(false),
            },
            UnaryOperator::Neg => match operand {
                Value::Integer(n) => Value::Integer(n.wrapping_neg()),
                _ => Value::Null,
            },
        })
    }
}
