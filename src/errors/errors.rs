use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal diagnostic from the parser or the semantic analyzer.
///
/// Carries the fault itself plus the source position where it was detected.
/// Analyzer faults that have no positional data (condition type errors,
/// returns outside functions and the like) carry `None`.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Option<Position>) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// The taxonomy name of the fault, e.g. for test assertions and logs.
    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "ParseError",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::UndefinedFunction { .. } => "UndefinedFunction",
            ErrorImpl::DuplicateVariable { .. } => "DuplicateDeclaration",
            ErrorImpl::DuplicateFunction { .. } => "DuplicateDeclaration",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::ConditionNotBoolean { .. } => "ConditionTypeError",
            ErrorImpl::ArityMismatch { .. } => "ArityMismatch",
            ErrorImpl::ReturnOutsideFunction => "ReturnOutsideFunction",
        }
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{} at {}", self.internal_error, position),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

/// The closed set of fatal faults.
///
/// `UnexpectedToken` covers every grammar-rule violation; the remaining
/// variants are the semantic sub-kinds. The two duplicate-declaration
/// variants exist so the variable and function wordings stay distinct.
#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("{message}")]
    UnexpectedToken { token: String, message: String },
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },
    #[error("Undefined function '{name}'.")]
    UndefinedFunction { name: String },
    #[error("Variable '{name}' is already declared in this scope")]
    DuplicateVariable { name: String },
    #[error("Function '{name}' is already defined.")]
    DuplicateFunction { name: String },
    #[error("Cannot perform arithmetic between {left} and {right}")]
    TypeMismatch { left: String, right: String },
    #[error("{construct} condition must be boolean, got {found}")]
    ConditionNotBoolean { construct: String, found: String },
    #[error("Function '{name}' expects {expected} arguments but got {received}.")]
    ArityMismatch {
        name: String,
        expected: usize,
        received: usize,
    },
    #[error("Return statement outside of function.")]
    ReturnOutsideFunction,
}

/// A non-fatal lexical fault. The lexer reports these and keeps scanning,
/// so one source file can produce several of them without failing the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexWarning {
    #[error("Unexpected character: {character} at line {line}, column {column}")]
    UnexpectedCharacter {
        character: char,
        line: u32,
        column: u32,
    },
    #[error("Unterminated string at line {line}")]
    UnterminatedString { line: u32 },
}
