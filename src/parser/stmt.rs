use tracing::trace;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{
            ControlFlow, ElseIfBranch, ExpressionStmt, FnDeclStmt, ForStmt, IfStmt, Parameter,
            ReturnStmt, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::DEFAULT_BINDING_POWER},
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let token = parser.current_token_or("statement")?;
    trace!(lexeme = %token.lexeme, line = token.line, "parsing statement");

    if token.kind == TokenKind::Keyword {
        let handler = parser.get_stmt_lookup().get(token.lexeme.as_str()).copied();
        if let Some(handler) = handler {
            return handler(parser);
        }
    }

    if token.kind == TokenKind::Type {
        return parse_declaration_stmt(parser);
    }

    let expression = parse_expr(parser, DEFAULT_BINDING_POWER)?;

    parser.expect(";")?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

/// A type keyword starts either a function or a variable declaration; the
/// token after it decides which.
pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let is_function = parser
        .peek(1)
        .map_or(false, |token| token.kind == TokenKind::Keyword && token.is("function"));

    if is_function {
        parse_fn_decl_stmt(parser)
    } else {
        parse_var_decl_stmt(parser)
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let data_type = parse_type(parser, "variable type")?;
    let identifier = parser
        .expect_kind(TokenKind::Identifier, "identifier")?
        .lexeme
        .clone();

    parser.expect("=")?;
    let initializer = parse_expr(parser, DEFAULT_BINDING_POWER)?;
    parser.expect(";")?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        data_type,
        identifier,
        initializer,
    }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let return_type = parse_type(parser, "return type")?;
    parser.expect("function")?;

    let identifier = parser
        .expect_kind(TokenKind::Identifier, "function name")?
        .lexeme
        .clone();

    parser.expect("(")?;

    let mut parameters = Vec::new();
    if !parser.current_is(")") {
        loop {
            let data_type = parse_type(parser, "parameter type")?;
            let name = parser
                .expect_kind(TokenKind::Identifier, "parameter name")?
                .lexeme
                .clone();
            parameters.push(Parameter { name, data_type });

            if parser.current_is(",") {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(")")?;

    let body = parse_body(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        return_type,
        identifier,
        parameters,
        body,
    }))
}

/// Parses `{ statement* }`.
pub fn parse_body(parser: &mut Parser) -> Result<Vec<Stmt>, ParseError> {
    parser.expect("{")?;

    let mut statements = Vec::new();
    while !parser.current_is("}") {
        if !parser.has_tokens() {
            return Err(parser.unexpected("`}`"));
        }
        statements.push(parse_stmt(parser)?);
    }

    parser.expect("}")?;

    Ok(statements)
}

/// Parses `(condition)`.
fn parse_condition(parser: &mut Parser) -> Result<Expr, ParseError> {
    parser.expect("(")?;
    let condition = parse_expr(parser, DEFAULT_BINDING_POWER)?;
    parser.expect(")")?;

    Ok(condition)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.expect("if")?;

    let condition = parse_condition(parser)?;
    let body = parse_body(parser)?;

    // The scanner has already fused `else if` into one token.
    let mut else_if_branches = Vec::new();
    while parser.current_is("else if") {
        parser.advance();
        let condition = parse_condition(parser)?;
        let body = parse_body(parser)?;
        else_if_branches.push(ElseIfBranch { condition, body });
    }

    let else_body = if parser.current_is("else") {
        parser.advance();
        Some(parse_body(parser)?)
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        body,
        else_if_branches,
        else_body,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.expect("while")?;

    let condition = parse_condition(parser)?;
    let body = parse_body(parser)?;

    Ok(Stmt::While(WhileStmt { condition, body }))
}

/// `for (initializer condition; increment) { body }`. The initializer is a
/// full statement and brings its own `;`.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.expect("for")?;
    parser.expect("(")?;

    let initializer = parse_stmt(parser)?;
    let condition = parse_expr(parser, DEFAULT_BINDING_POWER)?;
    parser.expect(";")?;
    let increment = parse_expr(parser, DEFAULT_BINDING_POWER)?;

    parser.expect(")")?;
    let body = parse_body(parser)?;

    Ok(Stmt::For(ForStmt {
        initializer: Box::new(initializer),
        condition,
        increment,
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.expect("return")?;

    let value = if parser.current_is(";") {
        None
    } else {
        Some(parse_expr(parser, DEFAULT_BINDING_POWER)?)
    };

    parser.expect(";")?;

    Ok(Stmt::Return(ReturnStmt { value }))
}

pub fn parse_control_flow_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let control_flow = if parser.current_is("break") {
        ControlFlow::Break
    } else if parser.current_is("continue") {
        ControlFlow::Continue
    } else {
        return Err(parser.unexpected("`break` or `continue`"));
    };
    parser.advance();

    parser.expect(";")?;

    Ok(Stmt::ControlFlow(control_flow))
}
