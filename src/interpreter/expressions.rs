//! Expression evaluation implementation
//!
//! Literals evaluate to themselves, variables are looked up in the current
//! function's symbol table, and binary operators evaluate their left operand
//! before their right one. Variables are resolved here and nowhere earlier,
//! so reading a variable before its first assignment is a runtime error.

use crate::interpreter::builtins::CallResolver;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::symbols::SymbolTable;
use crate::memory::value::Value;
use crate::parser::ast::*;

impl<R: CallResolver> Interpreter<R> {
    /// Evaluate an expression and return its value
    pub fn eval(&self, expr: &Expression, symbols: &SymbolTable) -> Result<Value, RuntimeError> {
        self.eval_at_depth(expr, symbols, 0)
    }

    fn eval_at_depth(
        &self,
        expr: &Expression,
        symbols: &SymbolTable,
        depth: usize,
    ) -> Result<Value, RuntimeError> {
        match expr {
            Expression::IntLiteral(n, _) => Ok(Value::Int(*n)),

            Expression::StringLiteral(s, _) => Ok(Value::String(s.clone())),

            Expression::BoolLiteral(b, _) => Ok(Value::Boolean(*b)),

            Expression::Variable(name, pos) => {
                symbols
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndeclaredVariable {
                        name: name.clone(),
                        position: *pos,
                    })
            }

            Expression::BinaryOp {
                op,
                left,
                right,
                position,
            } => {
                if depth >= self.config.max_expression_depth {
                    return Err(RuntimeError::ExpressionTooDeep {
                        limit: self.config.max_expression_depth,
                        position: *position,
                    });
                }

                let left = self.eval_at_depth(left, symbols, depth + 1)?;
                let right = self.eval_at_depth(right, symbols, depth + 1)?;
                Self::evaluate_binary_op(*op, left, right, *position)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::interpreter::builtins::NoBuiltins;
    use crate::parser::parse::Parser;
    use test_log::test;

    fn run(source: &str) -> Result<SymbolTable, RuntimeError> {
        let function = Parser::new(source).parse().unwrap();
        Interpreter::new(NoBuiltins).interpret_function(&function)
    }

    #[test]
    fn test_comparisons() {
        let symbols = run("void main () { x=5<=7;y=15<20;z=8>3;t=16>=12;w=36==42;}").unwrap();

        assert_eq!(symbols.get("x"), Some(&Value::Boolean(true)));
        assert_eq!(symbols.get("y"), Some(&Value::Boolean(true)));
        assert_eq!(symbols.get("z"), Some(&Value::Boolean(true)));
        assert_eq!(symbols.get("t"), Some(&Value::Boolean(true)));
        assert_eq!(symbols.get("w"), Some(&Value::Boolean(false)));
    }

    #[test]
    fn test_literals() {
        let symbols = run("void main () { s=\"abc\"; t=true; f=false; n=0; }").unwrap();

        assert_eq!(symbols.get("s"), Some(&Value::from("abc")));
        assert_eq!(symbols.get("t"), Some(&Value::Boolean(true)));
        assert_eq!(symbols.get("f"), Some(&Value::Boolean(false)));
        assert_eq!(symbols.get("n"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_right_nested_subtraction() {
        // 10 - (3 - 2)
        let symbols = run("void main () { x=10-3-2; }").unwrap();
        assert_eq!(symbols.get("x"), Some(&Value::Int(9)));
    }

    #[test]
    fn test_negative_results() {
        let symbols = run("void main () { x=0-5; y=x+2; }").unwrap();

        assert_eq!(symbols.get("x"), Some(&Value::Int(-5)));
        assert_eq!(symbols.get("y"), Some(&Value::Int(-3)));
    }

    #[test]
    fn test_string_operand_is_type_error() {
        let err = run("void main () { x=1+\"abc\";}").unwrap_err();

        assert_eq!(
            err,
            RuntimeError::TypeMismatch {
                op: BinOp::Add,
                left: Value::Int(1),
                right: Value::from("abc"),
                position: Position::new(1, 19, 18),
            }
        );
    }

    #[test]
    fn test_comparison_result_is_not_an_int() {
        // 1 + (2 < 3): the right operand evaluates to a boolean
        let err = run("void main () { x=1+2<3; }").unwrap_err();

        assert!(matches!(
            err,
            RuntimeError::TypeMismatch { op: BinOp::Add, right: Value::Boolean(true), .. }
        ));
    }

    #[test]
    fn test_left_error_reported_first() {
        let err = run("void main () { x=a+b; }").unwrap_err();

        assert!(matches!(
            err,
            RuntimeError::UndeclaredVariable { ref name, .. } if name == "a"
        ));
    }

    #[test]
    fn test_depth_limit() {
        let one = || Box::new(Expression::IntLiteral(1, Position::start()));
        let expr = Expression::BinaryOp {
            op: BinOp::Add,
            left: one(),
            right: Box::new(Expression::BinaryOp {
                op: BinOp::Add,
                left: one(),
                right: one(),
                position: Position::new(1, 4, 3),
            }),
            position: Position::new(1, 2, 1),
        };
        let symbols = SymbolTable::new();

        let shallow = Interpreter::with_config(NoBuiltins, Config::new().with_max_expression_depth(1));
        assert_eq!(
            shallow.eval(&expr, &symbols),
            Err(RuntimeError::ExpressionTooDeep {
                limit: 1,
                position: Position::new(1, 4, 3),
            })
        );

        let deep = Interpreter::with_config(NoBuiltins, Config::new().with_max_expression_depth(2));
        assert_eq!(deep.eval(&expr, &symbols), Ok(Value::Int(3)));
    }
}
