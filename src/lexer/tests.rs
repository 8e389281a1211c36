//! Unit tests for the scanner.

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("function if while for return break continue").unwrap();

    assert_eq!(tokens.len(), 7);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Keyword));
    assert_eq!(tokens[0].lexeme, "function");
    assert_eq!(tokens[6].lexeme, "continue");
}

#[test]
fn test_tokenize_types() {
    let tokens = tokenize("int string boolean float char void null").unwrap();

    assert_eq!(tokens.len(), 7);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Type));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "foo");
    assert_eq!(tokens[2].lexeme, "baz_123");
    assert_eq!(tokens[3].lexeme, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].lexeme, "CamelCase");
}

#[test]
fn test_tokenize_literals() {
    let tokens = tokenize(r#"42 3.14 "hello world" true false"#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].lexeme, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].lexeme, "\"hello world\"");
    assert_eq!(tokens[3].kind, TokenKind::Boolean);
    assert_eq!(tokens[4].kind, TokenKind::Boolean);
}

#[test]
fn test_tokenize_escaped_quote_in_string() {
    let tokens = tokenize(r#""quote\"test""#).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, r#""quote\"test""#);
}

#[test]
fn test_tokenize_operators_maximal_munch() {
    let tokens = tokenize("== != <= >= += -= *= /= && || ++ -- + - * / % ^ < > = !").unwrap();
    let lexemes: Vec<&str> = tokens.iter().map(|token| token.lexeme.as_str()).collect();

    assert_eq!(
        lexemes,
        vec![
            "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "&&", "||", "++", "--", "+", "-",
            "*", "/", "%", "^", "<", ">", "=", "!"
        ]
    );
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Operator));
}

#[test]
fn test_tokenize_unspaced_operators() {
    let tokens = tokenize("i++<=n").unwrap();
    let lexemes: Vec<&str> = tokens.iter().map(|token| token.lexeme.as_str()).collect();

    assert_eq!(lexemes, vec!["i", "++", "<=", "n"]);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) { } [ ] ; ,").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Parenthesis);
    assert_eq!(tokens[1].kind, TokenKind::Parenthesis);
    assert_eq!(tokens[2].kind, TokenKind::Brackets);
    assert_eq!(tokens[3].kind, TokenKind::Brackets);
    assert_eq!(tokens[4].kind, TokenKind::Brackets);
    assert_eq!(tokens[5].kind, TokenKind::Brackets);
    assert_eq!(tokens[6].kind, TokenKind::Punctuation);
    assert_eq!(tokens[7].kind, TokenKind::Punctuation);
}

#[test]
fn test_tokenize_fuses_else_if() {
    let tokens = tokenize("} else if (x) { } else {").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Keyword);
    assert_eq!(tokens[1].lexeme, "else if");
    assert_eq!(tokens[1].column, 3);
    assert_eq!(tokens[2].lexeme, "(");
    assert_eq!(tokens[7].lexeme, "else");
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("int x = 1;\n  x++;").unwrap();

    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (1, 5));
    assert_eq!((tokens[4].line, tokens[4].column), (1, 10));
    assert_eq!(tokens[5].lexeme, "x");
    assert_eq!((tokens[5].line, tokens[5].column), (2, 3));
    assert_eq!((tokens[6].line, tokens[6].column), (2, 4));
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("int x = 5; // trailing words\nint y = 10;").unwrap();

    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[5].lexeme, "int");
    assert_eq!(tokens[5].line, 2);
}

#[test]
fn test_tokenize_no_sentinel() {
    let tokens = tokenize("x").unwrap();
    assert_eq!(tokens.len(), 1);

    let tokens = tokenize("   ").unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("int x = @;").unwrap_err();

    assert_eq!(error.character, '@');
    assert_eq!((error.line, error.column), (1, 9));
}
