//! Abstract Syntax Tree node definitions.
//!
//! The tree is a closed set of variants: every parent exclusively owns its
//! children (no sharing, no cycles) and statement order inside a block is
//! significant. Nodes carry no behavior of their own; the parser builds
//! them and the analyzer walks them by exhaustive matching.

use crate::lexer::tokens::{Number, Token};

/// An expression node.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Numeric literal
    Number { value: Number },
    /// String literal
    Str { value: String },
    /// Reference to a variable by name
    Variable { name: String },
    /// Binary operation. The operator token is kept whole so diagnostics
    /// can point at its source position.
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// Function call by name with ordered arguments
    Call { name: String, arguments: Vec<Expr> },
}

/// A statement node.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// Assignment to a named target, declaring it on first use.
    /// `is_local` records whether the `local` keyword was present.
    Assignment {
        target: String,
        is_local: bool,
        value: Expr,
    },
    /// If statement with an optional else block
    If {
        condition: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },
    /// While loop
    While { condition: Expr, body: Block },
    /// Function declaration with ordered parameter names
    FunctionDecl {
        name: String,
        params: Vec<String>,
        body: Block,
    },
    /// Return statement with an optional value
    Return { value: Option<Expr> },
    /// An expression evaluated for effect, e.g. a bare `print(...)` call
    Expression(Expr),
}

/// An ordered sequence of statements. The whole program is one `Block`.
#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }
}
