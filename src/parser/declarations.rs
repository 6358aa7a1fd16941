//! Function declaration parsing
//!
//! `Type Ident '(' ')' '{' Instruction* '}'`

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use log::debug;

impl Parser {
    /// Parse function definition: type name() { body }
    pub(crate) fn parse_function(&mut self) -> Result<Function, ParseError> {
        let return_type = self.parse_type()?;
        let name = self.expect(TokenKind::Ident, "function name")?;

        self.expect(TokenKind::LParen, "'('")?;
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::LBrace, "'{'")?;

        let mut instructions = Vec::new();
        loop {
            let token = self.cursor.scan();
            match token.kind {
                TokenKind::RBrace => break,
                TokenKind::Ident => instructions.push(self.parse_instruction(token)?),
                _ => return Err(ParseError::unexpected(&token, "instruction or '}'")),
            }
        }

        debug!(
            "parsed function '{}' ({} instructions)",
            name.literal,
            instructions.len()
        );

        Ok(Function {
            return_type,
            name: name.literal,
            instructions,
            position: name.position,
        })
    }

    /// Parse type: void | int | string | boolean
    pub(crate) fn parse_type(&mut self) -> Result<TypeSpec, ParseError> {
        let token = self.cursor.scan();
        let ty = match token.kind {
            TokenKind::Void => Type::Void,
            TokenKind::Int => Type::Int,
            TokenKind::String => Type::String,
            TokenKind::Boolean => Type::Boolean,
            _ => return Err(ParseError::unexpected(&token, "type")),
        };

        Ok(TypeSpec {
            ty,
            position: token.position,
        })
    }
}
