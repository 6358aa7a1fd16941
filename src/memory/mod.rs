//! Memory model for the interpreter
//!
//! - [`value`]: Runtime value representation (Int, String, Boolean)
//! - [`symbols`]: Per-function symbol table mapping names to values
//!
//! Values are plain owned data; there is no heap and no sharing between
//! variables, so assignment clones the evaluated value into the table.

pub mod symbols;
pub mod value;
