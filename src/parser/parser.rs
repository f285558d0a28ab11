//! The main Parser struct and the top-level parse entry point.

use crate::{
    ast::ast::Block,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::stmt::parse_stmt;

/// Parsing state: the token stream and the current position in it.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Returns the kind of the token after the current one, `Eof` when the
    /// stream ends first.
    pub fn next_token_kind(&self) -> TokenKind {
        match self.tokens.get(self.pos + 1) {
            Some(token) => token.kind,
            None => TokenKind::Eof,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.current_token_kind() == TokenKind::Eof
    }

    /// Consumes the current token and returns it. The closing `Eof` token
    /// is never consumed.
    pub fn advance(&mut self) -> &Token {
        if !self.at_eof() {
            self.pos += 1;
        }
        &self.tokens[self.pos - 1]
    }

    /// Consumes the current token if it has the given kind.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == kind {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes a token of the expected kind or fails with the given
    /// message and the current token's position.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() == kind {
            Ok(self.advance().clone())
        } else {
            let token = self.current_token();
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                    message: message.to_string(),
                },
                Some(token.position),
            ))
        }
    }
}

/// Parses a token stream into the program's root `Block`.
///
/// Statements are parsed until the `Eof` token is reached; the first
/// grammar violation aborts with a `ParseError` carrying the offending
/// token's line and column.
pub fn parse(tokens: Vec<Token>) -> Result<Block, Error> {
    let mut parser = Parser::new(tokens);

    let mut statements = vec![];
    while !parser.at_eof() {
        statements.push(parse_stmt(&mut parser)?);
    }

    Ok(Block::new(statements))
}
