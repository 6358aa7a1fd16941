//! Expression parsing
//!
//! ```text
//! Expr    := Primary [ BinOp Expr ]
//! Primary := Number | Ident | StringLiteral | 'true' | 'false'
//! ```
//!
//! There is no precedence and no left associativity. A binary operator takes
//! the whole rest of the expression as its right operand, so `a - b + c`
//! parses as `a - (b + c)` and `1 + 2 < 3` as `1 + (2 < 3)`.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_primary()?;

        let token = self.cursor.scan();
        let Some(op) = binary_operator(token.kind) else {
            self.cursor.unscan();
            return Ok(left);
        };

        if self.depth >= self.config.max_expression_depth {
            return Err(ParseError::ExpressionTooDeep {
                limit: self.config.max_expression_depth,
                position: token.position,
            });
        }

        self.depth += 1;
        let right = self.parse_expression();
        self.depth -= 1;

        Ok(Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right?),
            position: token.position,
        })
    }

    /// Parse primary (literals and variables)
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        let token = self.cursor.scan();
        let pos = token.position;

        match token.kind {
            TokenKind::Number => token
                .literal
                .parse::<i64>()
                .map(|n| Expression::IntLiteral(n, pos))
                .map_err(|_| ParseError::InvalidNumber {
                    literal: token.literal.clone(),
                    position: pos,
                }),
            TokenKind::Ident => Ok(Expression::Variable(token.literal, pos)),
            TokenKind::StringLiteral => Ok(Expression::StringLiteral(token.literal, pos)),
            TokenKind::True => Ok(Expression::BoolLiteral(true, pos)),
            TokenKind::False => Ok(Expression::BoolLiteral(false, pos)),
            _ => Err(ParseError::unexpected(&token, "expression")),
        }
    }
}

fn binary_operator(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Plus => Some(BinOp::Add),
        TokenKind::Minus => Some(BinOp::Sub),
        TokenKind::EqEq => Some(BinOp::Eq),
        TokenKind::Lt => Some(BinOp::Lt),
        TokenKind::Le => Some(BinOp::Le),
        TokenKind::Gt => Some(BinOp::Gt),
        TokenKind::Ge => Some(BinOp::Ge),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use test_log::test;

    fn assigned(source: &str) -> Expression {
        let mut function = Parser::new(&format!("void main() {{ x={}; }}", source))
            .parse()
            .unwrap();
        match function.instructions.remove(0) {
            Instruction::Assignment { value, .. } => value,
            other => panic!("Expected assignment, got {:?}", other),
        }
    }

    /// Strip positions so tree shapes can be compared
    fn shape(expr: &Expression) -> String {
        match expr {
            Expression::IntLiteral(n, _) => n.to_string(),
            Expression::StringLiteral(s, _) => format!("{:?}", s),
            Expression::BoolLiteral(b, _) => b.to_string(),
            Expression::Variable(name, _) => name.clone(),
            Expression::BinaryOp {
                op, left, right, ..
            } => format!("({} {} {})", shape(left), op, shape(right)),
        }
    }

    #[test]
    fn test_primaries() {
        assert!(matches!(assigned("42"), Expression::IntLiteral(42, _)));
        assert!(matches!(assigned("y"), Expression::Variable(ref n, _) if n == "y"));
        assert!(matches!(assigned("\"hi\""), Expression::StringLiteral(ref s, _) if s == "hi"));
        assert!(matches!(assigned("true"), Expression::BoolLiteral(true, _)));
        assert!(matches!(assigned("false"), Expression::BoolLiteral(false, _)));
    }

    #[test]
    fn test_binary_positions() {
        // void main() { x=a+15; }
        let expr = assigned("a+15");

        assert_eq!(
            expr,
            Expression::BinaryOp {
                op: BinOp::Add,
                left: Box::new(Expression::Variable("a".to_string(), Position::new(1, 17, 16))),
                right: Box::new(Expression::IntLiteral(15, Position::new(1, 19, 18))),
                position: Position::new(1, 18, 17),
            }
        );
    }

    #[test]
    fn test_right_nesting() {
        assert_eq!(shape(&assigned("a+b+c")), "(a + (b + c))");
        assert_eq!(shape(&assigned("10-3-2")), "(10 - (3 - 2))");
        assert_eq!(shape(&assigned("1+2<3")), "(1 + (2 < 3))");
        assert_eq!(shape(&assigned("1<2+3")), "(1 < (2 + 3))");
        assert_eq!(shape(&assigned("a == b >= c")), "(a == (b >= c))");
    }

    #[test]
    fn test_all_operators() {
        for (source, op) in [
            ("1+2", BinOp::Add),
            ("1-2", BinOp::Sub),
            ("1==2", BinOp::Eq),
            ("1<2", BinOp::Lt),
            ("1<=2", BinOp::Le),
            ("1>2", BinOp::Gt),
            ("1>=2", BinOp::Ge),
        ] {
            assert!(matches!(assigned(source), Expression::BinaryOp { op: o, .. } if o == op));
        }
    }

    #[test]
    fn test_missing_right_operand() {
        let err = Parser::new("void main() { x=1+; }").parse().unwrap_err();

        assert!(matches!(
            err,
            ParseError::Syntax { ref expected, ref found, .. }
                if expected == "expression" && found == "';'"
        ));
    }

    #[test]
    fn test_unsupported_operator() {
        // '*' is a token but not an operator of the language
        let err = Parser::new("void main() { x=2*3; }").parse().unwrap_err();

        assert!(matches!(
            err,
            ParseError::Syntax { ref expected, ref found, .. }
                if expected == "';' after assignment" && found == "'*'"
        ));
    }

    #[test]
    fn test_number_overflow() {
        let err = Parser::new("void main() { x=99999999999999999999; }")
            .parse()
            .unwrap_err();

        assert!(matches!(
            err,
            ParseError::InvalidNumber { ref literal, .. } if literal == "99999999999999999999"
        ));
    }

    #[test]
    fn test_depth_limit() {
        let config = Config::new().with_max_expression_depth(2);

        assert!(Parser::with_config("void f() { x=1+2+3; }", config)
            .parse()
            .is_ok());

        let err = Parser::with_config("void f() { x=1+2+3+4; }", config)
            .parse()
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::ExpressionTooDeep {
                limit: 2,
                position: Position::new(1, 19, 18),
            }
        );
    }

    #[test]
    fn test_depth_resets_between_expressions() {
        let config = Config::new().with_max_expression_depth(1);

        assert!(Parser::with_config("void f() { x=1+2; y=3-4; print(5+6, 7<8); }", config)
            .parse()
            .is_ok());
    }
}
