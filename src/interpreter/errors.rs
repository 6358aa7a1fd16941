//! Runtime error types for the interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! during program execution (as opposed to parse or check errors).
//!
//! All runtime errors are fatal - they stop the current function and no symbol
//! table is returned for it.

use crate::interpreter::builtins::CallError;
use crate::memory::value::Value;
use crate::parser::ast::{BinOp, Position};
use thiserror::Error;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Variable read before any assignment in the current function
    #[error("Undeclared variable '{name}' at {position}")]
    UndeclaredVariable { name: String, position: Position },

    /// Operand of a binary operator is not an int
    #[error("Type error at {position}: '{op}' expects int operands, got {left:?} and {right:?} (not an int)")]
    TypeMismatch {
        op: BinOp,
        left: Value,
        right: Value,
        position: Position,
    },

    /// Integer overflow in arithmetic operation
    #[error("Integer overflow in operation: {operation} at {position}")]
    IntegerOverflow { operation: String, position: Position },

    /// Expression deeper than the configured limit
    #[error("Expression nests more than {limit} operators at {position}")]
    ExpressionTooDeep { limit: usize, position: Position },

    /// The builtin resolver rejected a call
    #[error("Call to '{function}' failed at {position}: {source}")]
    Call {
        function: String,
        #[source]
        source: CallError,
        position: Position,
    },
}

impl RuntimeError {
    pub fn position(&self) -> Position {
        match self {
            RuntimeError::UndeclaredVariable { position, .. }
            | RuntimeError::TypeMismatch { position, .. }
            | RuntimeError::IntegerOverflow { position, .. }
            | RuntimeError::ExpressionTooDeep { position, .. }
            | RuntimeError::Call { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = RuntimeError::UndeclaredVariable {
            name: "y".to_string(),
            position: Position::new(1, 18, 17),
        };
        assert_eq!(err.to_string(), "Undeclared variable 'y' at line 1, column 18");

        let err = RuntimeError::TypeMismatch {
            op: BinOp::Add,
            left: Value::Int(1),
            right: Value::from("abc"),
            position: Position::new(2, 3, 9),
        };
        assert_eq!(
            err.to_string(),
            "Type error at line 2, column 3: '+' expects int operands, got Int(1) and String(\"abc\") (not an int)"
        );
        assert_eq!(err.position(), Position::new(2, 3, 9));
    }
}
