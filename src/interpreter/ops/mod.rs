pub mod binary;

// Operator implementations live in `impl Interpreter` blocks
