//! Tree-walking interpreter
//!
//! This module provides the execution logic:
//! - [`engine`]: the [`Interpreter`](engine::Interpreter) and per-function driver
//! - [`errors`]: Runtime error types
//! - [`builtins`]: the [`CallResolver`](builtins::CallResolver) seam and default builtins
//!
//! # Execution Model
//!
//! Functions run independently, in declaration order. Each gets a fresh
//! symbol table which is returned once its last instruction has executed.
//! Values are dynamically typed; binary operators accept ints only.

pub mod builtins;
pub mod engine;
pub mod errors;
mod expressions;
mod ops;
mod statements;
