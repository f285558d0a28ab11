//! Statement parsing.

use crate::{
    ast::ast::{Block, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// Parses one statement, dispatching on the first token. A trailing `;`
/// after any statement is optional and consumed here.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let stmt = match parser.current_token_kind() {
        TokenKind::If => {
            parser.advance();
            parse_if_stmt(parser)?
        }
        TokenKind::While => {
            parser.advance();
            parse_while_stmt(parser)?
        }
        TokenKind::Function => {
            parser.advance();
            parse_function_decl(parser)?
        }
        TokenKind::Return => {
            parser.advance();
            parse_return_stmt(parser)?
        }
        TokenKind::Local => {
            parser.advance();
            parse_assignment(parser, true)?
        }
        TokenKind::Identifier if parser.next_token_kind() == TokenKind::Assign => {
            parse_assignment(parser, false)?
        }
        _ => Stmt::Expression(parse_expr(parser)?),
    };

    parser.match_kind(TokenKind::Semicolon);

    Ok(stmt)
}

/// Parses statements until one of the terminator keywords (or `Eof`) is
/// the current token. The terminator itself is left for the caller.
fn parse_statement_list(parser: &mut Parser, terminators: &[TokenKind]) -> Result<Vec<Stmt>, Error> {
    let mut statements = vec![];
    while !parser.at_eof() && !terminators.contains(&parser.current_token_kind()) {
        statements.push(parse_stmt(parser)?);
    }
    Ok(statements)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Then, "Expected 'then' after if")?;

    let then_block = Block::new(parse_statement_list(
        parser,
        &[TokenKind::Else, TokenKind::End],
    )?);

    let else_block = if parser.match_kind(TokenKind::Else) {
        Some(Block::new(parse_statement_list(parser, &[TokenKind::End])?))
    } else {
        None
    };

    parser.expect(TokenKind::End, "Expected 'end' after if/else block")?;

    Ok(Stmt::If {
        condition,
        then_block,
        else_block,
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Do, "Expected 'do' after while condition")?;

    let body = Block::new(parse_statement_list(parser, &[TokenKind::End])?);

    parser.expect(TokenKind::End, "Expected 'end' after while body")?;

    Ok(Stmt::While { condition, body })
}

pub fn parse_function_decl(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser
        .expect(TokenKind::Identifier, "Expected function name")?
        .value;

    parser.expect(TokenKind::LParen, "Expected '(' after function name")?;

    let mut params = vec![];
    if parser.current_token_kind() != TokenKind::RParen {
        params.push(
            parser
                .expect(TokenKind::Identifier, "Expected parameter name")?
                .value,
        );
        while parser.match_kind(TokenKind::Comma) {
            params.push(
                parser
                    .expect(TokenKind::Identifier, "Expected parameter name")?
                    .value,
            );
        }
    }

    parser.expect(TokenKind::RParen, "Expected ')' after parameters")?;

    let body = Block::new(parse_statement_list(parser, &[TokenKind::End])?);

    parser.expect(TokenKind::End, "Expected 'end' after function body")?;

    Ok(Stmt::FunctionDecl { name, params, body })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // A value follows unless the statement ends right here.
    let value = match parser.current_token_kind() {
        TokenKind::End | TokenKind::Else | TokenKind::Semicolon | TokenKind::Eof => None,
        _ => Some(parse_expr(parser)?),
    };

    Ok(Stmt::Return { value })
}

/// Parses `["local"] IDENT "=" expr`. The leading `local` keyword (when
/// present) has already been consumed by the dispatcher.
pub fn parse_assignment(parser: &mut Parser, is_local: bool) -> Result<Stmt, Error> {
    let target = if is_local {
        parser
            .expect(TokenKind::Identifier, "Expected variable name after 'local'")?
            .value
    } else {
        parser.advance().value.clone()
    };

    parser.expect(TokenKind::Assign, "Expected '=' after variable name")?;

    let value = parse_expr(parser)?;

    Ok(Stmt::Assignment {
        target,
        is_local,
        value,
    })
}
