use std::collections::HashSet;

use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, Program},
        expressions::FunctionCallExpr,
        types::{DataType, OperatorCategory},
    },
    errors::errors::SemanticError,
};

use super::{
    check::check_stmt,
    config::AnalyzerConfig,
    context::ContextStack,
    pending::{PendingCall, PendingReason, Site},
    resolve::drain_pending,
    scope::{ScopeId, ScopeKind, ScopeTree},
};

/// Outcome of checking an expression in the first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checked {
    Known(DataType),
    /// Depends on a function call; resolved in the second pass
    Deferred,
}

#[derive(Debug)]
pub struct SemanticAnalyzer<'a> {
    pub config: AnalyzerConfig,
    pub scopes: ScopeTree,
    pub current_scope: ScopeId,
    pub pending: Vec<PendingCall<'a>>,
    pub context: ContextStack,
    /// Calls currently being resolved, keyed by node address
    pub resolving: HashSet<*const FunctionCallExpr>,
    /// Nesting of calls currently being resolved
    pub depth: usize,
}

impl<'a> SemanticAnalyzer<'a> {
    pub fn new(config: AnalyzerConfig) -> Self {
        SemanticAnalyzer {
            config,
            scopes: ScopeTree::new(),
            current_scope: ScopeTree::GLOBAL,
            pending: Vec::new(),
            context: ContextStack::default(),
            resolving: HashSet::new(),
            depth: 0,
        }
    }

    /// Opens a child of the current scope and makes it current.
    /// Returns the scope that was current before.
    pub fn enter_scope(&mut self, kind: ScopeKind) -> ScopeId {
        let previous = self.current_scope;
        self.current_scope = self.scopes.add_child(previous, kind);

        previous
    }

    pub fn exit_scope(&mut self, previous: ScopeId) {
        self.current_scope = previous;
    }

    /// Queues `expr` for the second pass, remembering the scope it appeared in.
    pub fn defer(&mut self, expr: &'a Expr, reason: PendingReason<'a>) {
        let site = Site {
            scope: self.current_scope,
            declarations: self.scopes.declaration_count(),
        };
        trace!(expr = ?expr.get_expr_type(), reason = ?reason, scope = site.scope.0, "deferred");
        self.pending.push(PendingCall { expr, site, reason });
    }

    /// First pass: declares names and queues whatever depends on a call.
    pub fn check_program(&mut self, program: &'a Program) -> Result<(), SemanticError> {
        for stmt in &program.body {
            check_stmt(self, stmt)?;
        }
        debug!(
            scopes = self.scopes.scope_count(),
            pending = self.pending.len(),
            "first pass complete"
        );

        Ok(())
    }

    /// Runs both passes over `program` and returns the finished scope tree.
    pub fn run(mut self, program: &'a Program) -> Result<ScopeTree, SemanticError> {
        self.check_program(program)?;
        drain_pending(&mut self)?;
        debug!("second pass complete");

        Ok(self.scopes)
    }
}

/// Result type of `left operator right` once both sides are known.
pub fn binary_result(
    operator: &str,
    left: DataType,
    right: DataType,
) -> Result<DataType, SemanticError> {
    if left != right {
        return Err(SemanticError::TypeMatchError {
            expected: left,
            received: right,
        });
    }

    match OperatorCategory::of(operator) {
        Some(OperatorCategory::Comparison) => Ok(DataType::Boolean),
        Some(OperatorCategory::Logical) if left == DataType::Boolean => Ok(DataType::Boolean),
        Some(OperatorCategory::Logical) => Err(SemanticError::NonBooleanOperand {
            operator: operator.to_string(),
            received: left,
        }),
        Some(OperatorCategory::Arithmetic) if left.is_numeric() => Ok(left),
        Some(OperatorCategory::Arithmetic) => Err(SemanticError::NonNumericOperand {
            operator: operator.to_string(),
            received: left,
        }),
        None => Err(SemanticError::InvalidOperator {
            operator: operator.to_string(),
        }),
    }
}

pub fn analyze(program: &Program) -> Result<(), SemanticError> {
    analyze_with_config(program, AnalyzerConfig::default())
}

pub fn analyze_with_config(program: &Program, config: AnalyzerConfig) -> Result<(), SemanticError> {
    SemanticAnalyzer::new(config).run(program).map(|_| ())
}
