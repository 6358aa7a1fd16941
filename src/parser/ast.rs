// AST (Abstract Syntax Tree) definitions for the interpreter

use std::fmt;

/// Source position information for error reporting
///
/// `line` and `column` are 1-based, `offset` is the 0-based character offset
/// from the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Position of the first character of an input
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Types a function can declare as its return type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Void,
    Int,
    String,
    Boolean,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Int => write!(f, "int"),
            Type::String => write!(f, "string"),
            Type::Boolean => write!(f, "boolean"),
        }
    }
}

/// A type as written in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpec {
    pub ty: Type,
    pub position: Position,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    // Comparison
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinOp {
    /// Whether the operator yields a boolean
    pub fn is_comparison(&self) -> bool {
        !matches!(self, BinOp::Add | BinOp::Sub)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Eq => "==",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Expressions
///
/// Binary operators nest to the right: `a + b - c` is
/// `a + (b - c)`. The parser never rebalances the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    IntLiteral(i64, Position),
    StringLiteral(String, Position),
    BoolLiteral(bool, Position),
    Variable(String, Position),
    BinaryOp {
        op: BinOp,
        left: Box<Expression>,
        right: Box<Expression>,
        position: Position,
    },
}

impl Expression {
    /// Get the source position of this node
    pub fn position(&self) -> Position {
        match self {
            Expression::IntLiteral(_, pos)
            | Expression::StringLiteral(_, pos)
            | Expression::BoolLiteral(_, pos)
            | Expression::Variable(_, pos) => *pos,
            Expression::BinaryOp { position, .. } => *position,
        }
    }

    /// Number of binary operators on the deepest path of this tree
    pub fn depth(&self) -> usize {
        match self {
            Expression::BinaryOp { left, right, .. } => {
                1 + left.depth().max(right.depth())
            }
            _ => 0,
        }
    }
}

/// Instructions of a function body, executed in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Assignment {
        variable: String,
        value: Expression,
        position: Position,
    },
    Call {
        function: String,
        args: Vec<Expression>,
        position: Position,
    },
}

impl Instruction {
    pub fn position(&self) -> Position {
        match self {
            Instruction::Assignment { position, .. } => *position,
            Instruction::Call { position, .. } => *position,
        }
    }
}

/// A function declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub return_type: TypeSpec,
    pub name: String,
    pub instructions: Vec<Instruction>,
    pub position: Position,
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub functions: Vec<Function>, // Declaration order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
