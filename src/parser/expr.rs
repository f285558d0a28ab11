//! Expression parsing.
//!
//! Operator precedence is expressed by the nesting order of the parse
//! rules: `concat` is the outermost (lowest-precedence) layer, then
//! comparison, additive and multiplicative, with `primary` innermost.
//! Every layer folds iteratively into a left-leaning `Binary` chain, so
//! all binary operators are left-associative.

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_concat(parser)
}

fn parse_concat(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_comparison(parser)?;

    while parser.current_token_kind() == TokenKind::DotDot {
        let operator = parser.advance().clone();
        let right = parse_comparison(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

fn parse_comparison(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_additive(parser)?;

    while matches!(
        parser.current_token_kind(),
        TokenKind::EqualEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual
            | TokenKind::Less
            | TokenKind::LessEqual
    ) {
        let operator = parser.advance().clone();
        let right = parse_additive(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

fn parse_additive(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_multiplicative(parser)?;

    while matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Minus
    ) {
        let operator = parser.advance().clone();
        let right = parse_multiplicative(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

fn parse_multiplicative(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_primary(parser)?;

    while matches!(
        parser.current_token_kind(),
        TokenKind::Star | TokenKind::Slash
    ) {
        let operator = parser.advance().clone();
        let right = parse_primary(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

/// Literals, variable references, function calls and parenthesized
/// groupings.
fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance();
            // The lexer always sets the literal on number tokens.
            Ok(Expr::Number {
                value: token.literal.unwrap(),
            })
        }
        TokenKind::String => Ok(Expr::Str {
            value: parser.advance().value.clone(),
        }),
        TokenKind::Identifier => {
            let name = parser.advance().value.clone();

            if parser.match_kind(TokenKind::LParen) {
                let arguments = parse_arguments(parser)?;
                parser.expect(TokenKind::RParen, "Expected ')' after function arguments")?;
                Ok(Expr::Call { name, arguments })
            } else {
                Ok(Expr::Variable { name })
            }
        }
        TokenKind::LParen => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::RParen, "Expected ')' after expression")?;
            Ok(expr)
        }
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                    message: format!("Unexpected token: {}", token),
                },
                Some(token.position),
            ))
        }
    }
}

fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::RParen {
        arguments.push(parse_expr(parser)?);
        while parser.match_kind(TokenKind::Comma) {
            arguments.push(parse_expr(parser)?);
        }
    }

    Ok(arguments)
}
