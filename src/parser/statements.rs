//! Instruction parsing
//!
//! Both instruction forms start with an identifier; the token after it
//! decides between an assignment (`=`) and a call (`(`).

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{ParseError, Parser};
use log::trace;

impl Parser {
    /// Parse the rest of an instruction whose leading identifier is `ident`
    pub(crate) fn parse_instruction(&mut self, ident: Token) -> Result<Instruction, ParseError> {
        let next = self.cursor.scan();

        let instruction = match next.kind {
            TokenKind::Assign => {
                let value = self.parse_expression()?;
                self.expect(TokenKind::Semicolon, "';' after assignment")?;
                Instruction::Assignment {
                    variable: ident.literal,
                    value,
                    position: ident.position,
                }
            }
            TokenKind::LParen => {
                let args = self.parse_call_arguments(&ident)?;
                self.expect(TokenKind::Semicolon, "';' after call")?;
                Instruction::Call {
                    function: ident.literal,
                    args,
                    position: ident.position,
                }
            }
            _ => return Err(ParseError::unexpected(&next, "'=' or '('")),
        };

        trace!("parsed instruction {:?}", instruction);
        Ok(instruction)
    }

    /// Parse argument list after the opening '(' up to and including ')'
    fn parse_call_arguments(&mut self, callee: &Token) -> Result<Vec<Expression>, ParseError> {
        let mut args = Vec::new();

        if self.cursor.peek().is(TokenKind::RParen) {
            self.cursor.scan();
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);

            let token = self.cursor.scan();
            match token.kind {
                TokenKind::Comma => continue,
                TokenKind::RParen => break,
                TokenKind::Illegal => return Err(ParseError::unexpected(&token, "',' or ')'")),
                _ => {
                    return Err(ParseError::InvalidCall {
                        function: callee.literal.clone(),
                        found: token.to_string(),
                        position: token.position,
                    })
                }
            }
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn body(source: &str) -> Result<Vec<Instruction>, ParseError> {
        Parser::new(&format!("void main() {{ {} }}", source))
            .parse()
            .map(|f| f.instructions)
    }

    #[test]
    fn test_parse_call() {
        let instructions = body("print(x, \"abc\", 3);").unwrap();

        match &instructions[0] {
            Instruction::Call { function, args, .. } => {
                assert_eq!(function, "print");
                assert_eq!(args.len(), 3);
                assert!(matches!(args[0], Expression::Variable(ref n, _) if n == "x"));
                assert!(matches!(args[1], Expression::StringLiteral(ref s, _) if s == "abc"));
                assert!(matches!(args[2], Expression::IntLiteral(3, _)));
            }
            other => panic!("Expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_call_without_arguments() {
        let instructions = body("flush();").unwrap();

        assert!(matches!(
            &instructions[0],
            Instruction::Call { function, args, .. } if function == "flush" && args.is_empty()
        ));
    }

    #[test]
    fn test_call_argument_expressions() {
        let instructions = body("print(a+1, b<2);").unwrap();

        match &instructions[0] {
            Instruction::Call { args, .. } => {
                assert!(matches!(args[0], Expression::BinaryOp { op: BinOp::Add, .. }));
                assert!(matches!(args[1], Expression::BinaryOp { op: BinOp::Lt, .. }));
            }
            other => panic!("Expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_call() {
        let err = body("print(x y);").unwrap_err();

        assert!(matches!(
            err,
            ParseError::InvalidCall { ref function, ref found, .. }
                if function == "print" && found == "identifier 'y'"
        ));

        let err = body("print(x;").unwrap_err();
        assert!(matches!(err, ParseError::InvalidCall { ref found, .. } if found == "';'"));
    }

    #[test]
    fn test_trailing_comma_in_call() {
        let err = body("print(x,);").unwrap_err();

        assert!(matches!(
            err,
            ParseError::Syntax { ref expected, ref found, .. }
                if expected == "expression" && found == "')'"
        ));
    }

    #[test]
    fn test_missing_semicolon() {
        let err = body("x=1 y=2;").unwrap_err();

        assert!(matches!(
            err,
            ParseError::Syntax { ref expected, ref found, .. }
                if expected == "';' after assignment" && found == "identifier 'y'"
        ));

        let err = body("print(1)").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Syntax { ref expected, .. } if expected == "';' after call"
        ));
    }

    #[test]
    fn test_instruction_needs_assign_or_call() {
        let err = body("x;").unwrap_err();

        assert!(matches!(
            err,
            ParseError::Syntax { ref expected, ref found, .. }
                if expected == "'=' or '('" && found == "';'"
        ));
    }

    #[test]
    fn test_keyword_cannot_be_assigned() {
        let err = body("true=1;").unwrap_err();

        assert!(matches!(
            err,
            ParseError::Syntax { ref expected, ref found, .. }
                if expected == "instruction or '}'" && found == "'true'"
        ));
    }
}
