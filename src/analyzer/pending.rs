//! Expressions whose type waits for the second pass.

use crate::ast::{ast::Expr, types::DataType};

use super::scope::ScopeId;

/// The other side of a binary expression whose first side is pending.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<'a> {
    Resolved(DataType),
    Pending(&'a Expr),
}

/// What the resolved type has to satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingReason<'a> {
    /// Expression statement; only the call itself is checked
    Bare,
    /// Initializer of `variable`
    AssignTo { variable: &'a str, expected: DataType },
    /// Value returned from a function returning `expected`
    ReturnValue { expected: DataType },
    /// One side of `operator`; `deferred_left` tells which
    BinaryOperand {
        operator: &'a str,
        other: Operand<'a>,
        deferred_left: bool,
    },
    /// if / while / for condition
    Condition,
    /// Operand of a for loop increment
    NumericOperand { operator: &'a str },
}

/// Where a pending expression appeared. Names are resolved from `scope`
/// against the variables declared before `declarations` was reached, so the
/// second pass sees the same bindings the first pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub scope: ScopeId,
    pub declarations: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingCall<'a> {
    pub expr: &'a Expr,
    pub site: Site,
    pub reason: PendingReason<'a>,
}
