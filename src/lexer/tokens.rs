use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("function", TokenKind::Function);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("return", TokenKind::Return);
        map.insert("local", TokenKind::Local);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Number,
    String,
    Identifier,

    Assign,       // =
    Plus,         // +
    Minus,        // -
    Star,         // *
    Slash,        // /

    LParen,       // (
    RParen,       // )
    Comma,        // ,
    Semicolon,    // ;

    Greater,      // >
    GreaterEqual, // >=
    Less,         // <
    LessEqual,    // <=
    EqualEqual,   // ==
    DotDot,       // .. (concatenation)

    // Reserved
    Function,
    If,
    Then,
    Else,
    End,
    While,
    Do,
    Return,
    Local,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A parsed numeric literal. Float only when the lexeme has a fractional
/// part, integer otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Float(value) => write!(f, "{}", value),
        }
    }
}

/// A classified lexical unit.
///
/// `value` holds the identifier text, the string content without its
/// delimiters, or the raw lexeme. `literal` is only set for number tokens.
/// `position` is the line/column of the token's first character.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub literal: Option<Number>,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(vec![
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
        ]) {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }
}
