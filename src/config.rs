//! Limits shared by the parser and the interpreter.

/// Default bound on expression nesting.
///
/// Binary expressions nest to the right, one level per operator, and both the
/// parser and the evaluator recurse once per level.
pub const DEFAULT_MAX_EXPRESSION_DEPTH: usize = 512;

/// Runtime configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of nested binary operators in a single expression
    pub max_expression_depth: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            max_expression_depth: DEFAULT_MAX_EXPRESSION_DEPTH,
        }
    }

    pub fn with_max_expression_depth(mut self, depth: usize) -> Self {
        self.max_expression_depth = depth;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
