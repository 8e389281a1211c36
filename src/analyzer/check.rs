//! First pass: walks the tree in source order, declaring names and checking
//! every expression whose type does not depend on a function call.

use tracing::trace;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{AssignmentExpr, BinaryExpr, UnaryExpr},
        statements::{ControlFlow, FnDeclStmt, ForStmt, IfStmt, ReturnStmt, VarDeclStmt, WhileStmt},
        types::{DataType, OperatorCategory},
    },
    errors::errors::SemanticError,
};

use super::{
    analyzer::{binary_result, Checked, SemanticAnalyzer},
    pending::{Operand, PendingReason},
    scope::{FunctionSignature, ScopeKind},
};

pub fn check_stmt<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    stmt: &'a Stmt,
) -> Result<(), SemanticError> {
    trace!(kind = ?stmt.get_stmt_type(), scope = analyzer.current_scope.0, "checking statement");

    match stmt {
        Stmt::VarDecl(decl) => check_var_decl_stmt(analyzer, decl),
        Stmt::FnDecl(decl) => check_fn_decl_stmt(analyzer, decl),
        Stmt::Expression(stmt) => {
            if check_expr(analyzer, &stmt.expression)? == Checked::Deferred {
                analyzer.defer(&stmt.expression, PendingReason::Bare);
            }
            Ok(())
        }
        Stmt::Return(stmt) => check_return_stmt(analyzer, stmt),
        Stmt::If(stmt) => check_if_stmt(analyzer, stmt),
        Stmt::While(stmt) => check_while_stmt(analyzer, stmt),
        Stmt::For(stmt) => check_for_stmt(analyzer, stmt),
        Stmt::ControlFlow(ControlFlow::Break) if !analyzer.context.allows_break() => {
            Err(SemanticError::InvalidBreak)
        }
        Stmt::ControlFlow(ControlFlow::Continue) if !analyzer.context.allows_continue() => {
            Err(SemanticError::InvalidContinue)
        }
        Stmt::ControlFlow(_) => Ok(()),
    }
}

/// Checks `body` inside a fresh block scope.
pub fn check_block<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    body: &'a [Stmt],
) -> Result<(), SemanticError> {
    let previous = analyzer.enter_scope(ScopeKind::Block);
    for stmt in body {
        check_stmt(analyzer, stmt)?;
    }
    analyzer.exit_scope(previous);

    Ok(())
}

fn check_var_decl_stmt<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    decl: &'a VarDeclStmt,
) -> Result<(), SemanticError> {
    // The initializer cannot see the variable it initializes
    match check_expr(analyzer, &decl.initializer)? {
        Checked::Known(received) if received != decl.data_type => {
            return Err(SemanticError::TypeMatchError {
                expected: decl.data_type,
                received,
            });
        }
        Checked::Known(_) => {}
        Checked::Deferred => analyzer.defer(
            &decl.initializer,
            PendingReason::AssignTo {
                variable: &decl.identifier,
                expected: decl.data_type,
            },
        ),
    }

    analyzer
        .scopes
        .declare_variable(analyzer.current_scope, &decl.identifier, decl.data_type)
}

fn check_fn_decl_stmt<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    decl: &'a FnDeclStmt,
) -> Result<(), SemanticError> {
    let signature = FunctionSignature {
        parameters: decl
            .parameters
            .iter()
            .map(|parameter| (parameter.name.clone(), parameter.data_type))
            .collect(),
        return_type: decl.return_type,
    };
    analyzer
        .scopes
        .declare_function(analyzer.current_scope, &decl.identifier, signature)?;

    let previous = analyzer.enter_scope(ScopeKind::Function {
        name: decl.identifier.clone(),
    });
    for parameter in &decl.parameters {
        analyzer.scopes.declare_variable(
            analyzer.current_scope,
            &parameter.name,
            parameter.data_type,
        )?;
    }

    analyzer.context.enter_function();
    for stmt in &decl.body {
        check_stmt(analyzer, stmt)?;
    }
    analyzer.context.exit();
    analyzer.exit_scope(previous);

    Ok(())
}

fn check_return_stmt<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    stmt: &'a ReturnStmt,
) -> Result<(), SemanticError> {
    let expected = analyzer.scopes.enclosing_return_type(analyzer.current_scope)?;

    let value = match &stmt.value {
        Some(value) => value,
        None if expected == DataType::Void => return Ok(()),
        None => return Err(SemanticError::MissingReturnValue { expected }),
    };

    match check_expr(analyzer, value)? {
        Checked::Known(received) if received != expected => {
            Err(SemanticError::TypeMatchError { expected, received })
        }
        Checked::Known(_) => Ok(()),
        Checked::Deferred => {
            analyzer.defer(value, PendingReason::ReturnValue { expected });
            Ok(())
        }
    }
}

fn check_condition<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    condition: &'a Expr,
) -> Result<(), SemanticError> {
    match check_expr(analyzer, condition)? {
        Checked::Known(DataType::Boolean) => Ok(()),
        Checked::Known(received) => Err(SemanticError::NonBooleanCondition { received }),
        Checked::Deferred => {
            analyzer.defer(condition, PendingReason::Condition);
            Ok(())
        }
    }
}

fn check_if_stmt<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    stmt: &'a IfStmt,
) -> Result<(), SemanticError> {
    check_condition(analyzer, &stmt.condition)?;
    check_block(analyzer, &stmt.body)?;

    for branch in &stmt.else_if_branches {
        check_condition(analyzer, &branch.condition)?;
        check_block(analyzer, &branch.body)?;
    }

    if let Some(else_body) = &stmt.else_body {
        check_block(analyzer, else_body)?;
    }

    Ok(())
}

fn check_while_stmt<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    stmt: &'a WhileStmt,
) -> Result<(), SemanticError> {
    check_condition(analyzer, &stmt.condition)?;

    analyzer.context.enter_loop();
    check_block(analyzer, &stmt.body)?;
    analyzer.context.exit();

    Ok(())
}

/// The initializer, condition, increment and body share one scope.
fn check_for_stmt<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    stmt: &'a ForStmt,
) -> Result<(), SemanticError> {
    analyzer.context.enter_loop();
    let previous = analyzer.enter_scope(ScopeKind::Block);

    match stmt.initializer.as_ref() {
        Stmt::VarDecl(decl) => check_var_decl_stmt(analyzer, decl)?,
        _ => return Err(SemanticError::InvalidForInitializer),
    }

    check_condition(analyzer, &stmt.condition)?;
    check_for_increment(analyzer, &stmt.increment)?;

    for body_stmt in &stmt.body {
        check_stmt(analyzer, body_stmt)?;
    }

    analyzer.exit_scope(previous);
    analyzer.context.exit();

    Ok(())
}

fn check_for_increment<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    increment: &'a Expr,
) -> Result<(), SemanticError> {
    let unary = match increment {
        Expr::Unary(unary) if unary.is_increment() => unary,
        _ => return Err(SemanticError::InvalidForIncrement),
    };

    match check_expr(analyzer, &unary.operand)? {
        Checked::Known(received) if received.is_numeric() => Ok(()),
        Checked::Known(received) => Err(SemanticError::NonNumericOperand {
            operator: unary.operator.clone(),
            received,
        }),
        Checked::Deferred => {
            analyzer.defer(
                &unary.operand,
                PendingReason::NumericOperand {
                    operator: &unary.operator,
                },
            );
            Ok(())
        }
    }
}

pub fn check_expr<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    expr: &'a Expr,
) -> Result<Checked, SemanticError> {
    match expr {
        Expr::Literal(literal) => Ok(Checked::Known(literal.data_type)),
        Expr::Identifier(identifier) => analyzer
            .scopes
            .lookup_variable(analyzer.current_scope, &identifier.name)
            .map(|variable| Checked::Known(variable.data_type))
            .ok_or_else(|| SemanticError::VariableNotDeclared {
                variable: identifier.name.clone(),
            }),
        Expr::Assignment(assignment) => check_assignment_expr(analyzer, assignment),
        Expr::Binary(binary) => check_binary_expr(analyzer, binary),
        Expr::Unary(unary) => check_unary_expr(analyzer, unary),
        // Every call waits for the second pass so that functions declared
        // later in the program can be called
        Expr::FunctionCall(_) => Ok(Checked::Deferred),
    }
}

fn check_assignment_expr<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    assignment: &'a AssignmentExpr,
) -> Result<Checked, SemanticError> {
    let name = match assignment.target.as_ref() {
        Expr::Identifier(identifier) => &identifier.name,
        _ => return Err(SemanticError::InvalidAssignmentTarget),
    };

    let expected = analyzer
        .scopes
        .lookup_variable(analyzer.current_scope, name)
        .map(|variable| variable.data_type)
        .ok_or_else(|| SemanticError::VariableNotDeclared {
            variable: name.clone(),
        })?;

    if assignment.is_compound() && !expected.is_numeric() {
        return Err(SemanticError::NonNumericOperand {
            operator: assignment.operator.clone(),
            received: expected,
        });
    }

    // A pending value makes the whole assignment pending; the enclosing
    // statement queues it
    match check_expr(analyzer, &assignment.value)? {
        Checked::Known(received) if received != expected => {
            Err(SemanticError::TypeMatchError { expected, received })
        }
        Checked::Known(_) => Ok(Checked::Known(expected)),
        Checked::Deferred => Ok(Checked::Deferred),
    }
}

/// Queues the pending side of a binary expression, paired with the other
/// side. The result type is known whenever the operator fixes it: comparison
/// and logical operators yield boolean, arithmetic yields the type of a known
/// operand. Arithmetic over two pending sides stays deferred and is queued
/// whole by the enclosing statement.
fn check_binary_expr<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    binary: &'a BinaryExpr,
) -> Result<Checked, SemanticError> {
    let left = check_expr(analyzer, &binary.left)?;
    let right = check_expr(analyzer, &binary.right)?;
    let operator = binary.operator.as_str();
    let category = OperatorCategory::of(operator).ok_or_else(|| SemanticError::InvalidOperator {
        operator: operator.to_string(),
    })?;

    let (pending, other, deferred_left) = match (left, right) {
        (Checked::Known(left), Checked::Known(right)) => {
            return Ok(Checked::Known(binary_result(operator, left, right)?));
        }
        (Checked::Deferred, Checked::Known(right)) => {
            (&binary.left, Operand::Resolved(right), true)
        }
        (Checked::Known(left), Checked::Deferred) => {
            (&binary.right, Operand::Resolved(left), false)
        }
        (Checked::Deferred, Checked::Deferred) => {
            (&binary.left, Operand::Pending(&binary.right), true)
        }
    };

    let result = match (category, &other) {
        (OperatorCategory::Comparison, _) => DataType::Boolean,
        (OperatorCategory::Logical, Operand::Resolved(known)) if *known != DataType::Boolean => {
            return Err(SemanticError::NonBooleanOperand {
                operator: operator.to_string(),
                received: *known,
            });
        }
        (OperatorCategory::Logical, _) => DataType::Boolean,
        (OperatorCategory::Arithmetic, Operand::Resolved(known)) if known.is_numeric() => *known,
        (OperatorCategory::Arithmetic, Operand::Resolved(known)) => {
            return Err(SemanticError::NonNumericOperand {
                operator: operator.to_string(),
                received: *known,
            });
        }
        (OperatorCategory::Arithmetic, Operand::Pending(_)) => return Ok(Checked::Deferred),
    };

    analyzer.defer(
        pending,
        PendingReason::BinaryOperand {
            operator,
            other,
            deferred_left,
        },
    );

    Ok(Checked::Known(result))
}

fn check_unary_expr<'a>(
    analyzer: &mut SemanticAnalyzer<'a>,
    unary: &'a UnaryExpr,
) -> Result<Checked, SemanticError> {
    check_expr(analyzer, &unary.operand)
}
