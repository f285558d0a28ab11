//! Semantic analysis module.
//!
//! This module performs scope-aware name resolution and type checking on
//! the AST. It walks the tree once, fail-fast, while:
//!
//! - Inferring a type for every expression from the closed set
//!   number/string/boolean/any
//! - Resolving variable and function references through the scope chain
//! - Checking arithmetic operand types, condition types and call arities
//! - Managing nested scopes with strict stack discipline
//!
//! Nothing is executed or lowered; the result is a pass/fail verdict.

pub mod analyzer;
pub mod scope;
