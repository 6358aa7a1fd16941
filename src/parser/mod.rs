//! Source code parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Scanning (source text → tokens)
//! - [`cursor`]: One-token pushback over the scanner
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! A source file holds function declarations with no parameters. A body is
//! a list of assignments (`x = expr;`) and builtin calls (`print(a, b);`).
//! Expressions are integer, string and boolean literals, variables, and the
//! binary operators `+ - == < <= > >=`.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! Binary expressions nest to the right without precedence.

pub mod ast;
pub mod cursor;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
