//! Integration tests for the whole front end.
//!
//! These tests run source text through scanning, parsing and semantic
//! analysis and check which stage, if any, rejects it.

use frontend::{
    analyze_source,
    ast::ast::{Stmt, StmtType},
    errors::errors::{Error, SemanticError},
    lexer::lexer::tokenize,
    parser::parser::parse,
    Position,
};

#[test]
fn test_analyze_simple_program() {
    let program = analyze_source("int x = 42;").unwrap();
    assert_eq!(program.statement_kinds(), vec![StmtType::VariableDeclaration]);
}

#[test]
fn test_analyze_full_program() {
    let source = r#"
        // running totals
        int count = 0;
        float average = 0.0;

        float function mean(float sum, int items) {
            if (items == 0) {
                return 0.0;
            }
            return sum / 2.0;
        }

        boolean function is_even(int n) {
            return n % 2 == 0;
        }

        void function tally(int limit) {
            for (int i = 0; i < limit; i++) {
                if (is_even(i)) {
                    continue;
                }
                count += 1;
            }
        }

        tally(10);
        average = mean(10.0, count);

        while (count > 0) {
            count--;
            if (count == 3) {
                break;
            }
        }
    "#;

    let program = analyze_source(source).unwrap();
    assert_eq!(
        program.statement_kinds(),
        vec![
            StmtType::VariableDeclaration,
            StmtType::VariableDeclaration,
            StmtType::FunctionDeclaration,
            StmtType::FunctionDeclaration,
            StmtType::FunctionDeclaration,
            StmtType::ExpressionStatement,
            StmtType::ExpressionStatement,
            StmtType::WhileLoop,
        ]
    );
}

#[test]
fn test_forward_reference_across_program() {
    let source = r#"
        int result = twice(square(3));

        int function twice(int n) {
            return n * 2;
        }

        int function square(int n) {
            return n ^ 2;
        }
    "#;

    assert!(analyze_source(source).is_ok());
}

#[test]
fn test_mutual_recursion() {
    let source = r#"
        boolean function is_even(int n) {
            if (n == 0) {
                return true;
            }
            return is_odd(n - 1);
        }

        boolean function is_odd(int n) {
            if (n == 0) {
                return false;
            }
            return is_even(n - 1);
        }

        boolean answer = is_even(10);
    "#;

    assert!(analyze_source(source).is_ok());
}

#[test]
fn test_scan_error_reported() {
    let error = analyze_source("int x = 1;\nint y = #;").unwrap_err();
    match error {
        Error::Scan(scan) => {
            assert_eq!(scan.character, '#');
            assert_eq!((scan.line, scan.column), (2, 9));
        }
        other => panic!("expected a scan error, got {:?}", other),
    }
}

#[test]
fn test_parse_error_reported() {
    let error = analyze_source("int x = 1\nint y = 2;").unwrap_err();
    match error {
        Error::Parse(parse_error) => {
            assert_eq!(parse_error.expected, "`;`");
            assert_eq!(parse_error.found, "int");
            assert_eq!(parse_error.get_position(), Position::new(2, 1));
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_semantic_error_reported() {
    let error = analyze_source("int x = 1; string x = \"again\";").unwrap_err();
    assert_eq!(
        error,
        Error::Semantic(SemanticError::VariableAlreadyDeclared {
            variable: "x".to_string()
        })
    );
    assert_eq!(error.to_string(), "variable \"x\" already declared");
}

#[test]
fn test_stages_can_run_separately() {
    let tokens = tokenize("void function f() { return; } f();").unwrap();
    let program = parse(&tokens).unwrap();

    assert_eq!(program.body.len(), 2);
    assert!(matches!(&program.body[0], Stmt::FnDecl(decl) if decl.parameters.is_empty()));
    assert!(frontend::analyzer::analyzer::analyze(&program).is_ok());
}

#[test]
fn test_control_flow_outside_loop() {
    let error = analyze_source("void function f() { continue; }").unwrap_err();
    assert_eq!(error, Error::Semantic(SemanticError::InvalidContinue));
}

#[test]
fn test_argument_mismatch_in_deferred_call() {
    let source = r#"
        string greeting = greet("world", 3);

        string function greet(string name, string punctuation) {
            return name;
        }
    "#;

    let error = analyze_source(source).unwrap_err();
    assert_eq!(
        error,
        Error::Semantic(SemanticError::ArgumentTypeMatchError {
            function: "greet".to_string(),
            position: 2,
            expected: frontend::ast::types::DataType::String,
            received: frontend::ast::types::DataType::Int,
        })
    );
}
