//! # Introduction
//!
//! Hephaestus parses and executes a tiny statement language: typed function
//! declarations whose bodies are assignments and builtin calls over ints,
//! strings and booleans.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Scanner → Parser → AST → Checker → Interpreter → Symbol tables
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds an AST by recursive descent
//!    with one token of lookahead.
//! 2. [`checker`]: optional static pass over the AST ([`checker::Checker`]).
//! 3. [`interpreter`]: walks each function with a fresh
//!    [`memory::symbols::SymbolTable`] and forwards calls to a
//!    [`interpreter::builtins::CallResolver`].
//! 4. [`memory`]: runtime [`memory::value::Value`]s and symbol tables.
//! 5. [`terminal`]: the [`terminal::MockTerminal`] that records `print`
//!    output of the default builtins.
//!
//! ## Language
//!
//! ```text
//! int main() {
//!     x = 10;
//!     y = x + 15;
//!     print("y is", y);
//! }
//! ```
//!
//! Types: `void`, `int`, `string`, `boolean`. Operators: `+ - == < <= > >=`,
//! all binary, right-nested and without precedence (`a - b - c` is
//! `a - (b - c)`).

pub mod checker;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod terminal;

pub use crate::config::Config;
pub use crate::error::Error;

use crate::checker::Checker;
use crate::interpreter::builtins::CallResolver;
use crate::interpreter::engine::Interpreter;
use crate::memory::symbols::SymbolTable;
use crate::parser::parse::Parser;
use log::debug;

/// Parse, check and interpret every function in `source`.
///
/// Returns one symbol table per function in declaration order. Builtin
/// output stays with `resolver`; pass `&mut resolver` to inspect it
/// afterwards.
pub fn run_source<C, R>(
    source: &str,
    config: &Config,
    checker: &C,
    resolver: R,
) -> Result<Vec<SymbolTable>, Error>
where
    C: Checker + ?Sized,
    R: CallResolver,
{
    let program = Parser::with_config(source, *config).parse_program()?;
    debug!("parsed {} functions", program.functions.len());

    checker.check(&program.functions)?;

    let mut interpreter = Interpreter::with_config(resolver, *config);
    Ok(interpreter.interpret(&program.functions)?)
}
