//! Static checks run between parsing and interpretation
//!
//! Function bodies are straight-line code, so the type of every variable at
//! every point is known statically. [`StaticChecker`] follows assignments in
//! order and reports the same problems the interpreter would hit, before any
//! builtin has been called.
//!
//! # Typing Rules
//!
//! - Literals have their natural type
//! - Variables have the type of their most recent assignment
//! - `+` and `-` yield `int`, comparisons yield `boolean`
//! - Both operands of every binary operator must be `int`

use crate::parser::ast::*;
use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors found before execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("Undeclared variable '{name}' at {position}")]
    UndeclaredVariable { name: String, position: Position },

    #[error("Type error at {position}: '{op}' expects int operands, got {left} and {right}")]
    TypeMismatch {
        op: BinOp,
        left: Type,
        right: Type,
        position: Position,
    },
}

impl CheckError {
    pub fn position(&self) -> Position {
        match self {
            CheckError::UndeclaredVariable { position, .. }
            | CheckError::TypeMismatch { position, .. } => *position,
        }
    }
}

/// Validates parsed functions before they are interpreted
pub trait Checker {
    fn check(&self, functions: &[Function]) -> Result<(), CheckError>;
}

/// Accepts every program; errors surface at runtime instead
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Checker for AcceptAll {
    fn check(&self, _functions: &[Function]) -> Result<(), CheckError> {
        Ok(())
    }
}

/// Flow-sensitive type checker over each function body
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticChecker;

impl StaticChecker {
    pub fn new() -> Self {
        StaticChecker
    }

    fn check_function(&self, function: &Function) -> Result<(), CheckError> {
        debug!("checking function '{}'", function.name);

        let mut types: FxHashMap<&str, Type> = FxHashMap::default();
        for instruction in &function.instructions {
            match instruction {
                Instruction::Assignment {
                    variable, value, ..
                } => {
                    let ty = self.type_of(value, &types)?;
                    types.insert(variable.as_str(), ty);
                }
                Instruction::Call { args, .. } => {
                    for arg in args {
                        self.type_of(arg, &types)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Static type of `expr` given the variables assigned so far
    fn type_of(&self, expr: &Expression, types: &FxHashMap<&str, Type>) -> Result<Type, CheckError> {
        match expr {
            Expression::IntLiteral(..) => Ok(Type::Int),
            Expression::StringLiteral(..) => Ok(Type::String),
            Expression::BoolLiteral(..) => Ok(Type::Boolean),

            Expression::Variable(name, position) => {
                types
                    .get(name.as_str())
                    .copied()
                    .ok_or_else(|| CheckError::UndeclaredVariable {
                        name: name.clone(),
                        position: *position,
                    })
            }

            Expression::BinaryOp {
                op,
                left,
                right,
                position,
            } => {
                let left = self.type_of(left, types)?;
                let right = self.type_of(right, types)?;

                if left != Type::Int || right != Type::Int {
                    return Err(CheckError::TypeMismatch {
                        op: *op,
                        left,
                        right,
                        position: *position,
                    });
                }

                Ok(if op.is_comparison() {
                    Type::Boolean
                } else {
                    Type::Int
                })
            }
        }
    }
}

impl Checker for StaticChecker {
    fn check(&self, functions: &[Function]) -> Result<(), CheckError> {
        functions
            .iter()
            .try_for_each(|function| self.check_function(function))
    }
}
