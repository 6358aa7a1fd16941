//! Builtin function resolution
//!
//! Call instructions are not interpreted by the engine itself. After the
//! arguments are evaluated, the engine hands the function name and the
//! argument values to a [`CallResolver`]. Return values are not part of the
//! language, so a resolver only reports success or failure.
//!
//! # Supported Built-ins
//!
//! [`Builtins`], the default resolver, knows two functions:
//!
//! - `print(args...)`: writes the arguments separated by single spaces
//! - `println(args...)`: same, then ends the line
//!
//! Output goes to a [`MockTerminal`] so callers can inspect it afterwards.

use crate::memory::value::Value;
use crate::parser::ast::Position;
use crate::terminal::MockTerminal;
use log::trace;
use thiserror::Error;

/// Errors reported by a [`CallResolver`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    /// Failure specific to a resolver implementation
    #[error("{0}")]
    Failed(String),
}

/// Performs the side effect of a builtin call
pub trait CallResolver {
    fn call(&mut self, name: &str, args: &[Value], position: Position) -> Result<(), CallError>;
}

impl<R: CallResolver + ?Sized> CallResolver for &mut R {
    fn call(&mut self, name: &str, args: &[Value], position: Position) -> Result<(), CallError> {
        (**self).call(name, args, position)
    }
}

impl<R: CallResolver + ?Sized> CallResolver for Box<R> {
    fn call(&mut self, name: &str, args: &[Value], position: Position) -> Result<(), CallError> {
        (**self).call(name, args, position)
    }
}

/// Default resolver writing to a mock terminal
#[derive(Debug, Clone, Default)]
pub struct Builtins {
    terminal: MockTerminal,
}

impl Builtins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terminal(&self) -> &MockTerminal {
        &self.terminal
    }

    fn format_args(args: &[Value]) -> String {
        args.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl CallResolver for Builtins {
    fn call(&mut self, name: &str, args: &[Value], position: Position) -> Result<(), CallError> {
        trace!("builtin {}({:?}) at {}", name, args, position);

        match name {
            "print" => self.terminal.print(&Self::format_args(args), position),
            "println" => self.terminal.println(&Self::format_args(args), position),
            _ => {
                return Err(CallError::UnknownFunction {
                    name: name.to_string(),
                })
            }
        }

        Ok(())
    }
}

/// Resolver that knows no functions
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBuiltins;

impl CallResolver for NoBuiltins {
    fn call(&mut self, name: &str, _args: &[Value], _position: Position) -> Result<(), CallError> {
        Err(CallError::UnknownFunction {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_and_println() {
        let mut builtins = Builtins::new();
        let pos = Position::start();

        builtins
            .call("print", &[Value::Int(1), Value::from("a")], pos)
            .unwrap();
        builtins.call("println", &[Value::Boolean(true)], pos).unwrap();
        builtins.call("println", &[], pos).unwrap();

        assert_eq!(builtins.terminal().get_output(), vec!["1 atrue", ""]);
    }

    #[test]
    fn test_unknown_function() {
        let mut builtins = Builtins::new();

        assert_eq!(
            builtins.call("printf", &[], Position::start()),
            Err(CallError::UnknownFunction {
                name: "printf".to_string()
            })
        );
        assert!(NoBuiltins.call("print", &[], Position::start()).is_err());
    }

    #[test]
    fn test_resolver_through_reference() {
        fn call_through<R: CallResolver>(mut resolver: R) {
            resolver
                .call("println", &[Value::Int(5)], Position::start())
                .unwrap();
        }

        let mut builtins = Builtins::new();
        call_through(&mut builtins);
        assert_eq!(builtins.terminal().get_output(), vec!["5"]);
    }
}
