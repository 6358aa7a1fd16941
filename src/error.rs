//! Crate-level error type for [`run_source`](crate::run_source)

use crate::checker::CheckError;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::Position;
use crate::parser::parse::ParseError;
use thiserror::Error;

/// Any failure of the parse, check, interpret pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    pub fn position(&self) -> Position {
        match self {
            Error::Parse(e) => e.position(),
            Error::Check(e) => e.position(),
            Error::Runtime(e) => e.position(),
        }
    }
}
