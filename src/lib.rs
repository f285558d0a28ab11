#![allow(clippy::module_inception)]

use crate::ast::ast::Block;
use crate::errors::errors::{Error, LexWarning};

pub mod analyzer;
pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A line/column position in the source text, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Runs the full front-end pipeline on a source string: tokenize, parse,
/// analyze.
///
/// Lexical faults are non-fatal and come back as warnings alongside the
/// verdict; the first parse or semantic fault aborts the run and becomes the
/// returned error. On success the root `Block` of the program is returned so
/// callers can inspect the tree if they want more than a pass/fail.
pub fn check_source(source: &str) -> (Vec<LexWarning>, Result<Block, Error>) {
    let (tokens, warnings) = lexer::lexer::tokenize(source);

    let ast = match parser::parser::parse(tokens) {
        Ok(ast) => ast,
        Err(error) => return (warnings, Err(error)),
    };

    match analyzer::analyzer::analyze(&ast) {
        Ok(()) => (warnings, Ok(ast)),
        Err(error) => (warnings, Err(error)),
    }
}
