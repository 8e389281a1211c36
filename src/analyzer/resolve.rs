//! Second pass: resolves pending expressions once every function signature
//! is known.

use tracing::{debug, trace};

use crate::{
    ast::{ast::Expr, expressions::FunctionCallExpr, types::DataType},
    errors::errors::SemanticError,
};

use super::{
    analyzer::{binary_result, SemanticAnalyzer},
    pending::{Operand, PendingCall, PendingReason, Site},
};

/// Pops pending expressions last-in first-out until none remain.
pub fn drain_pending<'a>(analyzer: &mut SemanticAnalyzer<'a>) -> Result<(), SemanticError> {
    debug!(pending = analyzer.pending.len(), "draining pending expressions");

    while let Some(pending) = analyzer.pending.pop() {
        resolve_pending(analyzer, pending)?;
    }

    Ok(())
}

fn resolve_pending<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    pending: PendingCall<'a>,
) -> Result<(), SemanticError> {
    let received = resolve_type(analyzer, pending.expr, pending.site)?;
    trace!(reason = ?pending.reason, resolved = %received, "resolved pending expression");

    match pending.reason {
        PendingReason::Bare => Ok(()),
        PendingReason::AssignTo { expected, .. } | PendingReason::ReturnValue { expected } => {
            if received == expected {
                Ok(())
            } else {
                Err(SemanticError::TypeMatchError { expected, received })
            }
        }
        PendingReason::BinaryOperand {
            operator,
            other,
            deferred_left,
        } => {
            let other = match other {
                Operand::Resolved(data_type) => data_type,
                Operand::Pending(expr) => resolve_type(analyzer, expr, pending.site)?,
            };

            if deferred_left {
                binary_result(operator, received, other).map(|_| ())
            } else {
                binary_result(operator, other, received).map(|_| ())
            }
        }
        PendingReason::Condition if received == DataType::Boolean => Ok(()),
        PendingReason::Condition => Err(SemanticError::NonBooleanCondition { received }),
        PendingReason::NumericOperand { .. } if received.is_numeric() => Ok(()),
        PendingReason::NumericOperand { operator } => Err(SemanticError::NonNumericOperand {
            operator: operator.to_string(),
            received,
        }),
    }
}

/// Type of `expr` as seen from `site`, resolving any calls inside it.
pub fn resolve_type<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    expr: &'a Expr,
    site: Site,
) -> Result<DataType, SemanticError> {
    match expr {
        Expr::Literal(literal) => Ok(literal.data_type),
        Expr::Identifier(identifier) => lookup_variable_type(analyzer, site, &identifier.name),
        Expr::Assignment(assignment) => {
            let name = match assignment.target.as_ref() {
                Expr::Identifier(identifier) => &identifier.name,
                _ => return Err(SemanticError::InvalidAssignmentTarget),
            };
            let expected = lookup_variable_type(analyzer, site, name)?;

            if assignment.is_compound() && !expected.is_numeric() {
                return Err(SemanticError::NonNumericOperand {
                    operator: assignment.operator.clone(),
                    received: expected,
                });
            }

            let received = resolve_type(analyzer, &assignment.value, site)?;
            if received != expected {
                return Err(SemanticError::TypeMatchError { expected, received });
            }

            Ok(expected)
        }
        Expr::Binary(binary) => {
            let left = resolve_type(analyzer, &binary.left, site)?;
            let right = resolve_type(analyzer, &binary.right, site)?;
            binary_result(&binary.operator, left, right)
        }
        Expr::Unary(unary) => resolve_type(analyzer, &unary.operand, site),
        Expr::FunctionCall(call) => resolve_call(analyzer, call, site),
    }
}

fn lookup_variable_type(
    analyzer: &SemanticAnalyzer,
    site: Site,
    name: &str,
) -> Result<DataType, SemanticError> {
    analyzer
        .scopes
        .lookup_variable_before(site.scope, name, site.declarations)
        .map(|variable| variable.data_type)
        .ok_or_else(|| SemanticError::VariableNotDeclared {
            variable: name.to_string(),
        })
}

/// Checks a call against the callee's signature and yields its return type.
///
/// Re-entering a call still listed in `resolving` is a `ResolutionCycle`.
/// Calls in an owned `Program` are distinct nodes and never re-enter, so
/// only the depth limit bounds resolution of parsed input.
pub fn resolve_call<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    call: &'a FunctionCallExpr,
    site: Site,
) -> Result<DataType, SemanticError> {
    let limit = analyzer.config.max_resolution_depth;
    if analyzer.depth >= limit {
        return Err(SemanticError::ResolutionTooDeep { limit });
    }

    let key = call as *const FunctionCallExpr;
    if !analyzer.resolving.insert(key) {
        return Err(SemanticError::ResolutionCycle {
            function: call.callee.clone(),
        });
    }

    analyzer.depth += 1;
    let resolved = check_call(analyzer, call, site);
    analyzer.depth -= 1;
    analyzer.resolving.remove(&key);

    resolved
}

fn check_call<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    call: &'a FunctionCallExpr,
    site: Site,
) -> Result<DataType, SemanticError> {
    let signature = analyzer
        .scopes
        .lookup_function(site.scope, &call.callee)
        .cloned()
        .ok_or_else(|| SemanticError::FunctionNotDeclared {
            function: call.callee.clone(),
        })?;

    let expected = signature.parameters.len();
    let received = call.arguments.len();
    if received > expected {
        return Err(SemanticError::UnexpectedArguments {
            function: call.callee.clone(),
            expected,
            received,
        });
    }
    if received < expected {
        return Err(SemanticError::MissingArguments {
            function: call.callee.clone(),
            expected,
            received,
        });
    }

    for (index, (argument, (_, parameter_type))) in call
        .arguments
        .iter()
        .zip(&signature.parameters)
        .enumerate()
    {
        let argument_type = resolve_type(analyzer, argument, site)?;
        if argument_type != *parameter_type {
            return Err(SemanticError::ArgumentTypeMatchError {
                function: call.callee.clone(),
                position: index + 1,
                expected: *parameter_type,
                received: argument_type,
            });
        }
    }

    Ok(signature.return_type)
}
