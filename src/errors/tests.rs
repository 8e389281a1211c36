//! Unit tests for error handling.

use crate::ast::types::DataType;
use crate::errors::errors::{Error, ErrorTip, ParseError, ScanError, SemanticError};
use crate::Position;

#[test]
fn test_parse_error_position() {
    let error = ParseError::new("`;`", "}", Position::new(3, 14));

    assert_eq!(error.line, 3);
    assert_eq!(error.column, 14);
    assert_eq!(error.get_position(), Position::new(3, 14));
}

#[test]
fn test_parse_error_display() {
    let error = ParseError::new("`)`", "{", Position::new(1, 9));
    assert_eq!(error.to_string(), "expected `)`, found `{` at 1:9");
}

#[test]
fn test_scan_error_display() {
    let error = ScanError { character: '@', line: 2, column: 5 };
    assert_eq!(error.to_string(), "unrecognised character '@' at 2:5");
}

#[test]
fn test_variable_already_declared_error() {
    let error = SemanticError::VariableAlreadyDeclared { variable: "x".to_string() };
    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
}

#[test]
fn test_type_mismatch_error() {
    let error = SemanticError::TypeMatchError {
        expected: DataType::Int,
        received: DataType::String,
    };

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(error.to_string(), "types do not match: expected int, received string");
}

#[test]
fn test_missing_arguments_error() {
    let error = SemanticError::MissingArguments {
        function: "add".to_string(),
        expected: 2,
        received: 1,
    };

    assert_eq!(error.get_error_name(), "MissingArguments");
    assert_eq!(error.get_tip().to_string(), "Expected 2 arguments, received 1");
}

#[test]
fn test_error_tip_none() {
    assert!(matches!(SemanticError::InvalidBreak.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = SemanticError::VariableNotDeclared { variable: "foo".to_string() };

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("foo")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_umbrella_error_from_stages() {
    let error: Error = SemanticError::InvalidContinue.into();
    assert!(matches!(error, Error::Semantic(SemanticError::InvalidContinue)));

    let error: Error = ParseError::new("expression", ";", Position::new(1, 1)).into();
    assert!(matches!(error, Error::Parse(_)));
    assert_eq!(error.to_string(), "expected expression, found `;` at 1:1");
}
