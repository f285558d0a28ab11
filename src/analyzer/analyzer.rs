//! The semantic analyzer: one recursive, fail-fast traversal of the AST.

use crate::{
    ast::ast::{Block, Expr, Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::scope::{FunctionInfo, SymbolTable, ValueType};

/// Analysis state: the scope chain and the name of the function currently
/// being analyzed, if any.
pub struct Analyzer {
    symbols: SymbolTable,
    current_function: Option<String>,
}

/// Checks a parsed program for semantic well-formedness.
///
/// Builds a fresh scope chain rooted in the global scope, walks the tree
/// once and aborts on the first rule violation. Re-running on the same AST
/// always gives the same verdict; no state survives between invocations.
pub fn analyze(root: &Block) -> Result<(), Error> {
    Analyzer::new().analyze_block(root)
}

impl Analyzer {
    pub fn new() -> Self {
        Analyzer {
            symbols: SymbolTable::new(),
            current_function: None,
        }
    }

    /// Analyzes a block in its own child scope; declarations made inside
    /// are invisible once the block ends.
    fn analyze_block(&mut self, block: &Block) -> Result<(), Error> {
        self.symbols.enter_scope();
        for stmt in &block.statements {
            self.analyze_stmt(stmt)?;
        }
        self.symbols.exit_scope();
        Ok(())
    }

    fn analyze_stmt(&mut self, stmt: &Stmt) -> Result<(), Error> {
        match stmt {
            Stmt::Assignment { target, value, .. } => {
                let expr_type = self.analyze_expr(value)?;
                // First assignment declares the name in the current scope;
                // later assignments leave the recorded type unchanged.
                if self.symbols.lookup_variable(target).is_none() {
                    self.symbols.declare_variable(target, expr_type)?;
                }
                Ok(())
            }
            Stmt::If {
                condition,
                then_block,
                else_block,
            } => {
                let condition_type = self.analyze_expr(condition)?;
                if condition_type != ValueType::Boolean {
                    return Err(Error::new(
                        ErrorImpl::ConditionNotBoolean {
                            construct: String::from("If"),
                            found: condition_type.to_string(),
                        },
                        None,
                    ));
                }

                self.analyze_block(then_block)?;
                if let Some(else_block) = else_block {
                    self.analyze_block(else_block)?;
                }
                Ok(())
            }
            Stmt::While { condition, body } => {
                let condition_type = self.analyze_expr(condition)?;
                if condition_type != ValueType::Boolean {
                    return Err(Error::new(
                        ErrorImpl::ConditionNotBoolean {
                            construct: String::from("While"),
                            found: condition_type.to_string(),
                        },
                        None,
                    ));
                }

                self.analyze_block(body)
            }
            Stmt::FunctionDecl { name, params, body } => {
                self.analyze_function_decl(name, params, body)
            }
            Stmt::Return { value } => {
                if self.current_function.is_none() {
                    return Err(Error::new(ErrorImpl::ReturnOutsideFunction, None));
                }
                if let Some(value) = value {
                    self.analyze_expr(value)?;
                }
                Ok(())
            }
            Stmt::Expression(expr) => {
                self.analyze_expr(expr)?;
                Ok(())
            }
        }
    }

    fn analyze_function_decl(
        &mut self,
        name: &str,
        params: &[String],
        body: &Block,
    ) -> Result<(), Error> {
        self.symbols.enter_scope();
        let previous_function = self.current_function.replace(name.to_string());

        // Parameters are untyped in this language; duplicates are still an
        // error.
        for param in params {
            self.symbols.declare_variable(param, ValueType::Any)?;
        }

        // The return type comes from the first value-carrying return in
        // the body's direct statement list; nested blocks are not scanned.
        let mut return_type = None;
        for stmt in &body.statements {
            if let Stmt::Return { value: Some(value) } = stmt {
                return_type = Some(self.analyze_expr(value)?);
                break;
            }
        }

        // Registered in the enclosing scope before the body is analyzed,
        // so the function is visible to siblings and to its own recursive
        // calls.
        self.symbols.declare_function_in_enclosing(
            name,
            FunctionInfo {
                arity: params.len(),
                param_types: vec![ValueType::Any; params.len()],
                return_type,
            },
        )?;

        self.analyze_block(body)?;

        self.current_function = previous_function;
        self.symbols.exit_scope();
        Ok(())
    }

    fn analyze_expr(&mut self, expr: &Expr) -> Result<ValueType, Error> {
        match expr {
            Expr::Number { .. } => Ok(ValueType::Number),
            Expr::Str { .. } => Ok(ValueType::String),
            Expr::Variable { name } => self.symbols.lookup_variable(name).ok_or_else(|| {
                Error::new(ErrorImpl::UndefinedVariable { name: name.clone() }, None)
            }),
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left_type = self.analyze_expr(left)?;
                let right_type = self.analyze_expr(right)?;

                match operator.kind {
                    // Concatenation stringifies its operands, whatever
                    // their types are.
                    TokenKind::DotDot => Ok(ValueType::String),
                    TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash => {
                        if left_type != ValueType::Number || right_type != ValueType::Number {
                            return Err(Error::new(
                                ErrorImpl::TypeMismatch {
                                    left: left_type.to_string(),
                                    right: right_type.to_string(),
                                },
                                Some(operator.position),
                            ));
                        }
                        Ok(ValueType::Number)
                    }
                    // The remaining binary operators are comparisons.
                    _ => Ok(ValueType::Boolean),
                }
            }
            Expr::Call { name, arguments } => {
                let info = self
                    .symbols
                    .lookup_function(name)
                    .cloned()
                    .ok_or_else(|| {
                        Error::new(ErrorImpl::UndefinedFunction { name: name.clone() }, None)
                    })?;

                if arguments.len() != info.arity {
                    return Err(Error::new(
                        ErrorImpl::ArityMismatch {
                            name: name.clone(),
                            expected: info.arity,
                            received: arguments.len(),
                        },
                        None,
                    ));
                }

                // Arguments are analyzed for well-formedness only; their
                // types are not matched against the untyped parameters.
                for argument in arguments {
                    self.analyze_expr(argument)?;
                }

                Ok(info.return_type.unwrap_or(ValueType::Any))
            }
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new()
    }
}
