use crate::interpreter::builtins::CallResolver;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::parser::ast::{BinOp, Position};

impl<R: CallResolver> Interpreter<R> {
    /// Both operands of every operator must be ints
    #[inline]
    fn int_operands(
        op: BinOp,
        left: Value,
        right: Value,
        position: Position,
    ) -> Result<(i64, i64), RuntimeError> {
        match (&left, &right) {
            (Value::Int(a), Value::Int(b)) => Ok((*a, *b)),
            _ => Err(RuntimeError::TypeMismatch {
                op,
                left,
                right,
                position,
            }),
        }
    }

    #[inline]
    fn checked_add_values(a: i64, b: i64, position: Position) -> Result<Value, RuntimeError> {
        a.checked_add(b)
            .ok_or(RuntimeError::IntegerOverflow {
                operation: format!("{} + {}", a, b),
                position,
            })
            .map(Value::Int)
    }

    #[inline]
    fn checked_sub_values(a: i64, b: i64, position: Position) -> Result<Value, RuntimeError> {
        a.checked_sub(b)
            .ok_or(RuntimeError::IntegerOverflow {
                operation: format!("{} - {}", a, b),
                position,
            })
            .map(Value::Int)
    }

    #[inline]
    fn compare_values<F>(a: i64, b: i64, cmp: F) -> Value
    where
        F: Fn(i64, i64) -> bool,
    {
        Value::Boolean(cmp(a, b))
    }

    /// Apply `op` to two already evaluated operands
    pub(crate) fn evaluate_binary_op(
        op: BinOp,
        left: Value,
        right: Value,
        position: Position,
    ) -> Result<Value, RuntimeError> {
        use BinOp::*;

        let (a, b) = Self::int_operands(op, left, right, position)?;

        match op {
            Add => Self::checked_add_values(a, b, position),
            Sub => Self::checked_sub_values(a, b, position),

            Eq => Ok(Self::compare_values(a, b, |a, b| a == b)),
            Lt => Ok(Self::compare_values(a, b, |a, b| a < b)),
            Le => Ok(Self::compare_values(a, b, |a, b| a <= b)),
            Gt => Ok(Self::compare_values(a, b, |a, b| a > b)),
            Ge => Ok(Self::compare_values(a, b, |a, b| a >= b)),
        }
    }
}
