//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an AST rooted at a top-level block. It handles:
//!
//! - Statement parsing dispatched on the first token
//! - Expression parsing with precedence expressed as layered parse rules
//!   (concatenation lowest, multiplicative highest, all left-associative)
//! - Fail-fast error reporting with the offending token's position
//!
//! There is no error recovery: the first grammar violation aborts parsing.

pub mod expr;
pub mod parser;
pub mod stmt;
