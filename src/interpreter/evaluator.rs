use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting integer.
///
/// The walk is an exhaustive match over the two node shapes: literals yield
/// their stored value, binary operations evaluate their left child, then
/// their right child, then apply the operator. A failing sub-expression
/// terminates evaluation of the whole tree; no partial result is produced.
///
/// # Parameters
/// - `expr`: Root of the expression tree to evaluate.
///
/// # Returns
/// The computed `i64` value.
///
/// # Errors
/// Returns a `RuntimeError` on division by zero or integer overflow.
///
/// # Example
/// ```
/// use calq::{interpreter::evaluator::eval, parse};
///
/// let expr = parse("2 + 3 * 4").unwrap();
/// assert_eq!(eval(&expr).unwrap(), 14);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::BinaryOp { left,
                         op,
                         right,
                         offset, } => {
            let left = eval(left)?;
            let right = eval(right)?;
            eval_binary(*op, left, right, *offset)
        },
    }
}

/// Applies a binary operator to two already-evaluated operands.
///
/// All four operations use checked `i64` arithmetic: a result outside the
/// representable range fails with `RuntimeError::Overflow` instead of
/// wrapping. Division truncates toward zero, and the divisor is checked for
/// zero before the division is performed.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Byte offset of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<i64>` containing the computed value.
///
/// # Example
/// ```
/// use calq::{ast::BinaryOperator, interpreter::evaluator::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Div, 7, 2, 0).unwrap(), 3);
/// assert!(eval_binary(BinaryOperator::Div, 7, 0, 0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, offset: usize) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    match op {
        Add => left.checked_add(right)
                   .ok_or(RuntimeError::Overflow { offset }),
        Sub => left.checked_sub(right)
                   .ok_or(RuntimeError::Overflow { offset }),
        Mul => left.checked_mul(right)
                   .ok_or(RuntimeError::Overflow { offset }),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { offset });
            }
            // checked_div still fails for i64::MIN / -1.
            left.checked_div(right)
                .ok_or(RuntimeError::Overflow { offset })
        },
    }
}
