//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the parse entry points.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: function headers and return types
//! - `statements`: assignment and call instructions
//! - `expressions`: right-nested binary expressions and primaries
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::config::Config;
use crate::parser::ast::*;
use crate::parser::cursor::TokenCursor;
use crate::parser::lexer::{Scanner, Token, TokenKind};
use thiserror::Error;

/// Parser error type
///
/// Parsing stops at the first error; no partial AST is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The scanner met a character outside the language
    #[error("Parse error at {position}: illegal character '{character}'")]
    IllegalCharacter { character: String, position: Position },

    /// A token did not match what the grammar expects here
    #[error("Parse error at {position}: expected {expected}, found {found}")]
    Syntax {
        expected: String,
        found: String,
        position: Position,
    },

    /// A call argument was followed by something other than ',' or ')'
    #[error("Parse error at {position}: invalid call to '{function}': expected ',' or ')' after argument, found {found}")]
    InvalidCall {
        function: String,
        found: String,
        position: Position,
    },

    /// Integer literal does not fit in 64 bits
    #[error("Parse error at {position}: invalid integer literal {literal}")]
    InvalidNumber { literal: String, position: Position },

    #[error("Parse error at {position}: expression nests more than {limit} operators")]
    ExpressionTooDeep { limit: usize, position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::IllegalCharacter { position, .. }
            | ParseError::Syntax { position, .. }
            | ParseError::InvalidCall { position, .. }
            | ParseError::InvalidNumber { position, .. }
            | ParseError::ExpressionTooDeep { position, .. } => *position,
        }
    }

    /// Error for `token` showing up where `expected` was required
    pub(crate) fn unexpected(token: &Token, expected: &str) -> Self {
        if token.is(TokenKind::Illegal) {
            ParseError::IllegalCharacter {
                character: token.literal.clone(),
                position: token.position,
            }
        } else {
            ParseError::Syntax {
                expected: expected.to_string(),
                found: token.to_string(),
                position: token.position,
            }
        }
    }
}

/// Recursive descent parser
pub struct Parser {
    pub(crate) cursor: TokenCursor,
    pub(crate) config: Config,
    /// Binary operators currently open in `parse_expression`
    pub(crate) depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self::with_config(source, Config::default())
    }

    pub fn with_config(source: &str, config: Config) -> Self {
        Self {
            cursor: TokenCursor::new(Scanner::new(source)),
            config,
            depth: 0,
        }
    }

    /// Parse exactly one function declaration spanning the whole input
    pub fn parse(&mut self) -> Result<Function, ParseError> {
        let function = self.parse_function()?;
        self.expect(TokenKind::Eof, "end of input")?;
        Ok(function)
    }

    /// Parse every function declaration up to the end of input
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.cursor.peek().is(TokenKind::Eof) {
            program.functions.push(self.parse_function()?);
        }

        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &str,
    ) -> Result<Token, ParseError> {
        let token = self.cursor.scan();
        if token.is(kind) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(&token, expected))
        }
    }
}
