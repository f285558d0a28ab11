//! The scope-chained symbol table.

use std::collections::HashMap;
use std::fmt::Display;

use crate::errors::errors::{Error, ErrorImpl};

/// The closed set of inferred types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Number,
    String,
    Boolean,
    Any,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Number => write!(f, "number"),
            ValueType::String => write!(f, "string"),
            ValueType::Boolean => write!(f, "boolean"),
            ValueType::Any => write!(f, "any"),
        }
    }
}

/// What the table records about a declared function.
#[derive(Debug, Clone)]
pub struct FunctionInfo {
    pub arity: usize,
    pub param_types: Vec<ValueType>,
    pub return_type: Option<ValueType>,
}

/// A single lexical scope: its own variable and function namespaces plus
/// the index of the enclosing scope.
#[derive(Debug)]
struct Scope {
    variables: HashMap<String, ValueType>,
    functions: HashMap<String, FunctionInfo>,
    parent: Option<usize>,
}

impl Scope {
    fn new(parent: Option<usize>) -> Self {
        Scope {
            variables: HashMap::new(),
            functions: HashMap::new(),
            parent,
        }
    }
}

/// An arena of scope records chained by parent indices.
///
/// Scopes are strictly nested and torn down in reverse creation order, so
/// the chain is a plain index walk rather than owned back-pointers. One
/// table lives exactly as long as one analysis run.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    current: usize,
}

impl SymbolTable {
    /// Creates the table with its global scope, pre-populated with the
    /// built-in `print` function (one argument of any type, no return
    /// value).
    pub fn new() -> Self {
        let mut global = Scope::new(None);
        global.functions.insert(
            String::from("print"),
            FunctionInfo {
                arity: 1,
                param_types: vec![ValueType::Any],
                return_type: None,
            },
        );

        SymbolTable {
            scopes: vec![global],
            current: 0,
        }
    }

    /// Pushes a fresh scope under the current one and enters it.
    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::new(Some(self.current)));
        self.current = self.scopes.len() - 1;
    }

    /// Leaves the current scope. Declarations made in it become invisible;
    /// the record itself stays in the arena until the run ends.
    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current].parent {
            self.current = parent;
        }
    }

    /// Declares a variable in the current scope. A name may be declared at
    /// most once per scope.
    pub fn declare_variable(&mut self, name: &str, value_type: ValueType) -> Result<(), Error> {
        let scope = &mut self.scopes[self.current];
        if scope.variables.contains_key(name) {
            return Err(Error::new(
                ErrorImpl::DuplicateVariable {
                    name: name.to_string(),
                },
                None,
            ));
        }
        scope.variables.insert(name.to_string(), value_type);
        Ok(())
    }

    /// Looks a variable up through the scope chain, innermost first.
    pub fn lookup_variable(&self, name: &str) -> Option<ValueType> {
        let mut scope = Some(self.current);
        while let Some(index) = scope {
            if let Some(value_type) = self.scopes[index].variables.get(name) {
                return Some(*value_type);
            }
            scope = self.scopes[index].parent;
        }
        None
    }

    /// Declares a function in the scope enclosing the current one. Used by
    /// function declarations, which have already entered their own scope
    /// but register themselves where siblings can see them.
    pub fn declare_function_in_enclosing(
        &mut self,
        name: &str,
        info: FunctionInfo,
    ) -> Result<(), Error> {
        let target = self.scopes[self.current].parent.unwrap_or(self.current);
        let scope = &mut self.scopes[target];
        if scope.functions.contains_key(name) {
            return Err(Error::new(
                ErrorImpl::DuplicateFunction {
                    name: name.to_string(),
                },
                None,
            ));
        }
        scope.functions.insert(name.to_string(), info);
        Ok(())
    }

    /// Looks a function up through the scope chain, innermost first.
    pub fn lookup_function(&self, name: &str) -> Option<&FunctionInfo> {
        let mut scope = Some(self.current);
        while let Some(index) = scope {
            if let Some(info) = self.scopes[index].functions.get(name) {
                return Some(info);
            }
            scope = self.scopes[index].parent;
        }
        None
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
