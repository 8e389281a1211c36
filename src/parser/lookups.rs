use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Left and right binding power of an operator.
///
/// Powers are scaled by two so that a left-associative operator can bind
/// its right side one step tighter than its left. A right-associative
/// operator has a right power below its left power.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct BindingPower {
    pub left: u8,
    pub right: u8,
}

impl BindingPower {
    const fn left_assoc(power: u8) -> Self {
        BindingPower {
            left: power * 2,
            right: power * 2 + 1,
        }
    }

    const fn right_assoc(power: u8) -> Self {
        BindingPower {
            left: power * 2,
            right: power * 2 - 1,
        }
    }
}

/// Minimum binding power for a full expression.
pub const DEFAULT_BINDING_POWER: u8 = 0;

lazy_static! {
    pub static ref BINDING_POWER_LOOKUP: HashMap<&'static str, BindingPower> = {
        let mut map = HashMap::new();
        // Logical
        map.insert("||", BindingPower::left_assoc(0));
        map.insert("&&", BindingPower::left_assoc(1));

        // Relational
        map.insert("==", BindingPower::left_assoc(2));
        map.insert("!=", BindingPower::left_assoc(2));
        map.insert("<", BindingPower::left_assoc(3));
        map.insert("<=", BindingPower::left_assoc(3));
        map.insert(">", BindingPower::left_assoc(3));
        map.insert(">=", BindingPower::left_assoc(3));

        // Additive and multiplicative
        map.insert("+", BindingPower::left_assoc(4));
        map.insert("-", BindingPower::left_assoc(4));
        map.insert("*", BindingPower::left_assoc(5));
        map.insert("/", BindingPower::left_assoc(5));
        map.insert("%", BindingPower::left_assoc(5));

        map.insert("^", BindingPower::right_assoc(6));

        // Increment and decrement, prefix or postfix
        map.insert("++", BindingPower::left_assoc(7));
        map.insert("--", BindingPower::left_assoc(7));
        map
    };
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, ParseError>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, ParseError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.nud(TokenKind::Int, parse_literal_expr);
    parser.nud(TokenKind::Float, parse_literal_expr);
    parser.nud(TokenKind::String, parse_literal_expr);
    parser.nud(TokenKind::Boolean, parse_literal_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Parenthesis, parse_grouping_expr);
    parser.nud(TokenKind::Operator, parse_prefix_expr);

    // Statements led by a keyword
    parser.stmt("if", parse_if_stmt);
    parser.stmt("while", parse_while_stmt);
    parser.stmt("for", parse_for_stmt);
    parser.stmt("return", parse_return_stmt);
    parser.stmt("break", parse_control_flow_stmt);
    parser.stmt("continue", parse_control_flow_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<&'static str, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
