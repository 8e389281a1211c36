use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryExpr, Fixity, FunctionCallExpr, IdentifierExpr, LiteralExpr,
            UnaryExpr,
        },
        types::DataType,
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BINDING_POWER_LOOKUP, DEFAULT_BINDING_POWER},
    parser::Parser,
};

const ASSIGNMENT_OPERATORS: [&str; 5] = ["=", "+=", "-=", "*=", "/="];

pub fn parse_expr(parser: &mut Parser, min_bp: u8) -> Result<Expr, ParseError> {
    // First parse NUD
    let token = parser.current_token_or("expression")?;
    let nud = match parser.get_nud_lookup().get(&token.kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("expression")),
    };

    let mut left = nud(parser)?;

    // Keep folding operators into the left side while they bind at least
    // as tightly as the caller allows
    while let Some(token) = parser.current_token() {
        if token.kind != TokenKind::Operator {
            break;
        }

        if token.is("++") || token.is("--") {
            parser.advance();
            left = Expr::Unary(UnaryExpr {
                operator: token.lexeme.clone(),
                fixity: Fixity::Postfix,
                operand: Box::new(left),
            });
            continue;
        }

        let bp = match BINDING_POWER_LOOKUP.get(token.lexeme.as_str()) {
            Some(bp) => *bp,
            None => break,
        };

        if bp.left < min_bp {
            break;
        }

        parser.advance();
        let right = parse_expr(parser, bp.right)?;

        left = Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator: token.lexeme.clone(),
            right: Box::new(right),
        });
    }

    Ok(left)
}

pub fn parse_literal_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token = parser.current_token_or("literal")?;
    let data_type = match token.kind {
        TokenKind::Int => DataType::Int,
        TokenKind::Float => DataType::Float,
        TokenKind::String => DataType::String,
        TokenKind::Boolean => DataType::Boolean,
        _ => return Err(parser.unexpected("literal")),
    };
    parser.advance();

    Ok(Expr::Literal(LiteralExpr {
        value: token.lexeme.clone(),
        data_type,
    }))
}

/// An identifier starts a call, an assignment or a plain reference,
/// depending on the token after it.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let name = parser
        .expect_kind(TokenKind::Identifier, "identifier")?
        .lexeme
        .clone();

    if parser.current_is("(") {
        return parse_call_expr(parser, name);
    }

    if let Some(operator) = parser
        .current_token()
        .filter(|token| ASSIGNMENT_OPERATORS.contains(&token.lexeme.as_str()))
    {
        parser.advance();
        let value = parse_expr(parser, DEFAULT_BINDING_POWER)?;

        return Ok(Expr::Assignment(AssignmentExpr {
            target: Box::new(Expr::Identifier(IdentifierExpr { name })),
            operator: operator.lexeme.clone(),
            value: Box::new(value),
        }));
    }

    Ok(Expr::Identifier(IdentifierExpr { name }))
}

pub fn parse_call_expr(parser: &mut Parser, callee: String) -> Result<Expr, ParseError> {
    parser.expect("(")?;

    let mut arguments = vec![];
    if !parser.current_is(")") {
        loop {
            arguments.push(parse_expr(parser, DEFAULT_BINDING_POWER)?);

            if parser.current_is(",") {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(")")?;

    Ok(Expr::FunctionCall(FunctionCallExpr { callee, arguments }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    if !parser.current_is("(") {
        return Err(parser.unexpected("expression"));
    }
    parser.advance();

    let expr = parse_expr(parser, DEFAULT_BINDING_POWER)?;
    parser.expect(")")?;

    Ok(expr)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token = parser.current_token_or("expression")?;
    let bp = match BINDING_POWER_LOOKUP.get(token.lexeme.as_str()) {
        Some(bp) if token.is("++") || token.is("--") => *bp,
        _ => return Err(parser.unexpected("expression")),
    };
    parser.advance();

    let operand = parse_expr(parser, bp.right)?;

    Ok(Expr::Unary(UnaryExpr {
        operator: token.lexeme.clone(),
        fixity: Fixity::Prefix,
        operand: Box::new(operand),
    }))
}
