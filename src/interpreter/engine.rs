// Execution engine for the interpreter

use crate::config::Config;
use crate::interpreter::builtins::CallResolver;
use crate::interpreter::errors::RuntimeError;
use crate::memory::symbols::SymbolTable;
use crate::parser::ast::Function;
use log::debug;

/// Tree-walking interpreter
///
/// Each function runs against its own fresh [`SymbolTable`]. Calls are
/// forwarded to the resolver `R`, which keeps whatever state its builtins
/// need (see [`Interpreter::resolver`]).
pub struct Interpreter<R> {
    /// Builtin call resolver
    pub(crate) resolver: R,

    pub(crate) config: Config,
}

impl<R: CallResolver> Interpreter<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_config(resolver, Config::default())
    }

    pub fn with_config(resolver: R, config: Config) -> Self {
        Interpreter { resolver, config }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn into_resolver(self) -> R {
        self.resolver
    }

    /// Interpret functions in declaration order, one symbol table each.
    ///
    /// Stops at the first failing function; its error is returned and no
    /// tables are.
    pub fn interpret(&mut self, functions: &[Function]) -> Result<Vec<SymbolTable>, RuntimeError> {
        functions
            .iter()
            .map(|function| self.interpret_function(function))
            .collect()
    }

    /// Run every instruction of `function` in order against a new table
    pub fn interpret_function(&mut self, function: &Function) -> Result<SymbolTable, RuntimeError> {
        debug!("interpreting function '{}'", function.name);

        let mut symbols = SymbolTable::new();
        for instruction in &function.instructions {
            self.execute_instruction(instruction, &mut symbols)?;
        }

        debug!(
            "function '{}' finished with {} variables",
            function.name,
            symbols.len()
        );
        Ok(symbols)
    }
}
