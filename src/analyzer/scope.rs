//! Lexical scope tree.
//!
//! Scopes live in an arena and refer to their parent and children by index.
//! The global scope is always at index 0.

use std::collections::HashMap;

use crate::{ast::types::DataType, errors::errors::SemanticError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    /// Body of the named function
    Function { name: String },
    /// if / else-if / else / while / for body
    Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableInfo {
    pub data_type: DataType,
    /// Number of variable declarations made anywhere in the tree before this one
    pub declared_at: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub parameters: Vec<(String, DataType)>,
    pub return_type: DataType,
}

#[derive(Debug)]
pub struct Scope {
    pub id: ScopeId,
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    pub children: Vec<ScopeId>,
    variables: HashMap<String, VariableInfo>,
    functions: HashMap<String, FunctionSignature>,
}

impl Scope {
    pub fn get_variable(&self, name: &str) -> Option<&VariableInfo> {
        self.variables.get(name)
    }

    pub fn get_function(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.get(name)
    }
}

#[derive(Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    declarations: usize,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTree {
    pub const GLOBAL: ScopeId = ScopeId(0);

    /// Creates a tree holding only the global scope.
    pub fn new() -> Self {
        ScopeTree {
            scopes: vec![Scope {
                id: Self::GLOBAL,
                kind: ScopeKind::Global,
                parent: None,
                children: Vec::new(),
                variables: HashMap::new(),
                functions: HashMap::new(),
            }],
            declarations: 0,
        }
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Variable declarations made so far. Any variable declared later gets an
    /// ordinal at or above this value.
    pub fn declaration_count(&self) -> usize {
        self.declarations
    }

    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    /// Opens a new scope under `parent` and returns its id.
    pub fn add_child(&mut self, parent: ScopeId, kind: ScopeKind) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            id,
            kind,
            parent: Some(parent),
            children: Vec::new(),
            variables: HashMap::new(),
            functions: HashMap::new(),
        });
        self.scopes[parent.0].children.push(id);

        id
    }

    /// The scope chain from `scope` outward to the global scope.
    pub fn ancestors(&self, scope: ScopeId) -> impl Iterator<Item = &Scope> + '_ {
        std::iter::successors(Some(self.get(scope)), move |current| {
            current.parent.map(|parent| self.get(parent))
        })
    }

    pub fn declare_variable(
        &mut self,
        scope: ScopeId,
        name: &str,
        data_type: DataType,
    ) -> Result<(), SemanticError> {
        let variables = &mut self.scopes[scope.0].variables;
        if variables.contains_key(name) {
            return Err(SemanticError::VariableAlreadyDeclared {
                variable: name.to_string(),
            });
        }

        variables.insert(
            name.to_string(),
            VariableInfo {
                data_type,
                declared_at: self.declarations,
            },
        );
        self.declarations += 1;

        Ok(())
    }

    pub fn declare_function(
        &mut self,
        scope: ScopeId,
        name: &str,
        signature: FunctionSignature,
    ) -> Result<(), SemanticError> {
        let functions = &mut self.scopes[scope.0].functions;
        if functions.contains_key(name) {
            return Err(SemanticError::FunctionAlreadyDeclared {
                function: name.to_string(),
            });
        }

        functions.insert(name.to_string(), signature);
        Ok(())
    }

    /// Innermost declaration of variable `name` visible from `scope`.
    pub fn lookup_variable(&self, scope: ScopeId, name: &str) -> Option<&VariableInfo> {
        self.ancestors(scope)
            .find_map(|current| current.get_variable(name))
    }

    /// Innermost declaration of variable `name` visible from `scope`, ignoring
    /// declarations whose ordinal is `before` or later.
    pub fn lookup_variable_before(
        &self,
        scope: ScopeId,
        name: &str,
        before: usize,
    ) -> Option<&VariableInfo> {
        self.ancestors(scope).find_map(|current| {
            current
                .get_variable(name)
                .filter(|variable| variable.declared_at < before)
        })
    }

    /// Innermost declaration of function `name` visible from `scope`.
    pub fn lookup_function(&self, scope: ScopeId, name: &str) -> Option<&FunctionSignature> {
        self.ancestors(scope)
            .find_map(|current| current.get_function(name))
    }

    /// Return type of the function whose body encloses `scope`.
    ///
    /// The nearest function scope names the function; its signature is then
    /// looked up from that scope's parent outward.
    pub fn enclosing_return_type(&self, scope: ScopeId) -> Result<DataType, SemanticError> {
        let function_scope = self
            .ancestors(scope)
            .find(|current| matches!(current.kind, ScopeKind::Function { .. }))
            .ok_or(SemanticError::ReturnOutsideFunction)?;

        let name = match &function_scope.kind {
            ScopeKind::Function { name } => name,
            _ => return Err(SemanticError::ReturnOutsideFunction),
        };

        function_scope
            .parent
            .and_then(|parent| self.lookup_function(parent, name))
            .map(|signature| signature.return_type)
            .ok_or_else(|| SemanticError::FunctionNotDeclared {
                function: name.clone(),
            })
    }
}
