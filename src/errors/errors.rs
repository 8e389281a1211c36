use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::DataType, Position};

/// Raised by the scanner when no pattern matches at the cursor.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unrecognised character {character:?} at {line}:{column}")]
pub struct ScanError {
    pub character: char,
    pub line: u32,
    pub column: u32,
}

/// Raised by the parser on the first structural violation.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("expected {expected}, found `{found}` at {line}:{column}")]
pub struct ParseError {
    pub expected: String,
    pub found: String,
    pub line: u32,
    pub column: u32,
}

impl ParseError {
    pub fn new(expected: impl Into<String>, found: impl Into<String>, position: Position) -> Self {
        ParseError {
            expected: expected.into(),
            found: found.into(),
            line: position.line,
            column: position.column,
        }
    }

    pub fn get_position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// Raised by the semantic analyzer on the first violation it finds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("function {function:?} already declared")]
    FunctionAlreadyDeclared { function: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("function {function:?} not declared")]
    FunctionNotDeclared { function: String },
    #[error("types do not match: expected {expected}, received {received}")]
    TypeMatchError { expected: DataType, received: DataType },
    #[error("argument {position} of {function:?} does not match: expected {expected}, received {received}")]
    ArgumentTypeMatchError {
        function: String,
        position: usize,
        expected: DataType,
        received: DataType,
    },
    #[error("unexpected arguments to {function:?}: expected {expected}, received {received}")]
    UnexpectedArguments { function: String, expected: usize, received: usize },
    #[error("missing arguments to {function:?}: expected {expected}, received {received}")]
    MissingArguments { function: String, expected: usize, received: usize },
    #[error("condition must be boolean, received {received}")]
    NonBooleanCondition { received: DataType },
    #[error("for loop initializer must be a variable declaration")]
    InvalidForInitializer,
    #[error("for loop increment must be `++` or `--`")]
    InvalidForIncrement,
    #[error("operator {operator:?} requires numeric operands, received {received}")]
    NonNumericOperand { operator: String, received: DataType },
    #[error("operator {operator:?} requires boolean operands, received {received}")]
    NonBooleanOperand { operator: String, received: DataType },
    #[error("left hand side of an assignment must be an identifier")]
    InvalidAssignmentTarget,
    #[error("invalid operator {operator:?}")]
    InvalidOperator { operator: String },
    #[error("`break` outside of a loop or switch")]
    InvalidBreak,
    #[error("`continue` outside of a loop")]
    InvalidContinue,
    #[error("`return` outside of a function")]
    ReturnOutsideFunction,
    #[error("missing return value in function returning {expected}")]
    MissingReturnValue { expected: DataType },
    #[error("call to {function:?} requires resolving itself")]
    ResolutionCycle { function: String },
    #[error("call resolution exceeded depth {limit}")]
    ResolutionTooDeep { limit: usize },
    #[error("unrecognised node {node:?}")]
    UnrecognisedNode { node: String },
}

impl SemanticError {
    pub fn get_error_name(&self) -> &str {
        match self {
            SemanticError::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            SemanticError::FunctionAlreadyDeclared { .. } => "FunctionAlreadyDeclared",
            SemanticError::VariableNotDeclared { .. } => "VariableNotDeclared",
            SemanticError::FunctionNotDeclared { .. } => "FunctionNotDeclared",
            SemanticError::TypeMatchError { .. } => "TypeMatchError",
            SemanticError::ArgumentTypeMatchError { .. } => "ArgumentTypeMatchError",
            SemanticError::UnexpectedArguments { .. } => "UnexpectedArguments",
            SemanticError::MissingArguments { .. } => "MissingArguments",
            SemanticError::NonBooleanCondition { .. } => "NonBooleanCondition",
            SemanticError::InvalidForInitializer => "InvalidForInitializer",
            SemanticError::InvalidForIncrement => "InvalidForIncrement",
            SemanticError::NonNumericOperand { .. } => "NonNumericOperand",
            SemanticError::NonBooleanOperand { .. } => "NonBooleanOperand",
            SemanticError::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            SemanticError::InvalidOperator { .. } => "InvalidOperator",
            SemanticError::InvalidBreak => "InvalidBreak",
            SemanticError::InvalidContinue => "InvalidContinue",
            SemanticError::ReturnOutsideFunction => "ReturnOutsideFunction",
            SemanticError::MissingReturnValue { .. } => "MissingReturnValue",
            SemanticError::ResolutionCycle { .. } => "ResolutionCycle",
            SemanticError::ResolutionTooDeep { .. } => "ResolutionTooDeep",
            SemanticError::UnrecognisedNode { .. } => "UnrecognisedNode",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            SemanticError::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "`{}` is already declared in this scope, pick another name or declare it in a nested block",
                variable
            )),
            SemanticError::FunctionAlreadyDeclared { function } => {
                ErrorTip::Suggestion(format!("Function `{}` already declared", function))
            }
            SemanticError::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Declare `{}` before using it", variable))
            }
            SemanticError::FunctionNotDeclared { function } => {
                ErrorTip::Suggestion(format!("No function named `{}` is visible here", function))
            }
            SemanticError::UnexpectedArguments { expected, received, .. }
            | SemanticError::MissingArguments { expected, received, .. } => ErrorTip::Suggestion(
                format!("Expected {} arguments, received {}", expected, received),
            ),
            SemanticError::ArgumentTypeMatchError { expected, received, .. }
            | SemanticError::TypeMatchError { expected, received } => ErrorTip::Suggestion(
                format!("Expected type `{}`, received `{}`", expected, received),
            ),
            SemanticError::NonBooleanCondition { .. } => {
                ErrorTip::Suggestion(String::from("Compare the value to produce a boolean"))
            }
            SemanticError::InvalidForIncrement => {
                ErrorTip::Suggestion(String::from("Use `i++`, `i--`, `++i` or `--i`"))
            }
            SemanticError::MissingReturnValue { expected } => {
                ErrorTip::Suggestion(format!("Return a value of type `{}`", expected))
            }
            SemanticError::UnrecognisedNode { .. } => ErrorTip::Suggestion(String::from(
                "The parser produced a node the analyzer does not handle",
            )),
            _ => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// The first failure of any front end stage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}
