//! Instruction execution
//!
//! - `Assignment`: evaluate, then insert or overwrite the variable
//! - `Call`: evaluate arguments left to right, then hand them to the resolver
//!
//! The first failure aborts the instruction. Assignments already applied to
//! the table stay applied.

use crate::interpreter::builtins::CallResolver;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::symbols::SymbolTable;
use crate::parser::ast::Instruction;
use log::trace;

impl<R: CallResolver> Interpreter<R> {
    pub(crate) fn execute_instruction(
        &mut self,
        instruction: &Instruction,
        symbols: &mut SymbolTable,
    ) -> Result<(), RuntimeError> {
        match instruction {
            Instruction::Assignment {
                variable, value, ..
            } => {
                let value = self.eval(value, symbols)?;
                trace!("{} = {:?}", variable, value);
                symbols.set(variable.as_str(), value);
                Ok(())
            }

            Instruction::Call {
                function,
                args,
                position,
            } => {
                let values = args
                    .iter()
                    .map(|arg| self.eval(arg, symbols))
                    .collect::<Result<Vec<_>, _>>()?;

                trace!("call {}({:?})", function, values);
                self.resolver
                    .call(function, &values, *position)
                    .map_err(|source| RuntimeError::Call {
                        function: function.clone(),
                        source,
                        position: *position,
                    })
            }
        }
    }
}
