use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        scope::ScopeRef,
        value::Value,
    },
};

impl Context {
    /// Evaluates an infix operation.
    ///
    /// Assignments whose target is an identifier take the rebind path.
    /// Everything else evaluates both operands, left first, and dispatches
    /// on the pair of value types; combinations outside the supported
    /// lattice yield Null rather than an error.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize,
                                 scope: &ScopeRef)
                                 -> EvalResult<Value> {
        if op.is_assignment()
           && let Expr::Identifier { name, .. } = left
        {
            return self.eval_rebind(name, op, right, line, scope);
        }

        let lhs = self.eval_expr(left, scope)?;
        let rhs = self.eval_expr(right, scope)?;

        match (lhs, rhs) {
            (Value::Integer(a), Value::Integer(b)) => integer_binop(op, a, b, line),
            (Value::Str(a), Value::Str(b)) => Ok(string_binop(op, &a, &b)),
            (Value::Bool(a), Value::Bool(b)) => Ok(boolean_binop(op, a, b)),
            _ => Ok(Value::Null),
        }
    }

    /// Replaces the value of an existing binding.
    ///
    /// The right-hand side is evaluated first, then the current value is
    /// fetched; both the original binding kind and the owning scope are
    /// preserved by [`crate::interpreter::scope::Scope::assign`]. Plain `=`
    /// stores the new value directly; the compound forms combine it with
    /// the current one and require matching operand types.
    fn eval_rebind(&mut self,
                   name: &str,
                   op: BinaryOperator,
                   right: &Expr,
                   line: usize,
                   scope: &ScopeRef)
                   -> EvalResult<Value> {
        let rhs = self.eval_expr(right, scope)?;
        let current = scope.borrow()
                           .get(name)
                           .ok_or_else(|| RuntimeError::UndefinedVariable { name:
                                                                                name.to_string(),
                                                                            line })?;

        let next = match op {
            BinaryOperator::Assign => rhs,
            _ => compound_value(op, &current, &rhs, line)?,
        };

        scope.borrow_mut().assign(name, next, line)?;
        Ok(Value::Null)
    }
}

/// Computes the stored value of a compound assignment.
///
/// Both sides must be Integers, or both Strings under `+=`. Any other
/// combination is a fatal type mismatch.
fn compound_value(op: BinaryOperator,
                  current: &Value,
                  rhs: &Value,
                  line: usize)
                  -> EvalResult<Value> {
    match (current, rhs) {
        (Value::Integer(a), Value::Integer(b)) => match op {
            BinaryOperator::AddAssign => Ok(Value::Integer(a.wrapping_add(*b))),
            BinaryOperator::SubAssign => Ok(Value::Integer(a.wrapping_sub(*b))),
            BinaryOperator::MulAssign => Ok(Value::Integer(a.wrapping_mul(*b))),
            BinaryOperator::DivAssign => checked_div(*a, *b, line),
            BinaryOperator::ModAssign => checked_rem(*a, *b, line),
            _ => Err(type_mismatch(op, current, rhs, line)),
        },
        (Value::Str(a), Value::Str(b)) if op == BinaryOperator::AddAssign => {
            Ok(Value::Str(format!("{a}{b}")))
        },
        _ => Err(type_mismatch(op, current, rhs, line)),
    }
}

fn type_mismatch(op: BinaryOperator, lhs: &Value, rhs: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply '{}' to {} and {}",
                                                  op.symbol(),
                                                  lhs.type_name(),
                                                  rhs.type_name()),
                                 line }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps per two's-complement `i64`; division and modulus
/// truncate toward zero and are fatal on a zero divisor. Operators outside
/// the integer set (the assignment forms reaching here through a
/// non-identifier target) yield Null.
fn integer_binop(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Integer(a.wrapping_add(b))),
        BinaryOperator::Sub => Ok(Value::Integer(a.wrapping_sub(b))),
        BinaryOperator::Mul => Ok(Value::Integer(a.wrapping_mul(b))),
        BinaryOperator::Div => checked_div(a, b, line),
        BinaryOperator::Mod => checked_rem(a, b, line),
        BinaryOperator::Equal => Ok(Value::Bool(a == b)),
        BinaryOperator::NotEqual => Ok(Value::Bool(a != b)),
        BinaryOperator::Less => Ok(Value::Bool(a < b)),
        BinaryOperator::Greater => Ok(Value::Bool(a > b)),
        BinaryOperator::LessEqual => Ok(Value::Bool(a <= b)),
        BinaryOperator::GreaterEqual => Ok(Value::Bool(a >= b)),
        _ => Ok(Value::Null),
    }
}

/// Strings support concatenation and equality; everything else is Null.
fn string_binop(op: BinaryOperator, a: &str, b: &str) -> Value {
    match op {
        BinaryOperator::Add => Value::Str(format!("{a}{b}")),
        BinaryOperator::Equal => Value::Bool(a == b),
        BinaryOperator::NotEqual => Value::Bool(a != b),
        _ => Value::Null,
    }
}

/// Booleans support equality only; everything else is Null.
fn boolean_binop(op: BinaryOperator, a: bool, b: bool) -> Value {
    match op {
        BinaryOperator::Equal => Value::Bool(a == b),
        BinaryOperator::NotEqual => Value::Bool(a != b),
        _ => Value::Null,
    }
}

fn checked_div(a: i64, b: i64, line: usize) -> EvalResult<Value> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    Ok(Value::Integer(a.wrapping_div(b)))
}

fn checked_rem(a: i64, b: i64, line: usize) -> EvalResult<Value> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    Ok(Value::Integer(a.wrapping_rem(b)))
}
