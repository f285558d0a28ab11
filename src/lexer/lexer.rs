use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::LexWarning, Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Number, Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Ordered pattern table, first match wins. Two-character operators sit
    // above their one-character prefixes, and the comment pattern above the
    // minus operator, so the longer lexeme is always taken.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("'[^']*'").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("--[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::EqualEqual, "==") },
        RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEqual, ">=") },
        RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEqual, "<=") },
        RegexPattern { regex: Regex::new("\\.\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::DotDot, "..") },
        RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
        RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
        RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    warnings: Vec<LexWarning>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            warnings: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Consumes `n` bytes, keeping the line and column cursors in step.
    /// A newline bumps the line counter and resets the column to 1.
    pub fn advance_n(&mut self, n: usize) {
        for ch in self.source[self.pos..self.pos + n].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn push_warning(&mut self, warning: LexWarning) {
        self.warnings.push(warning);
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let literal = if matched.contains('.') {
        Number::Float(matched.parse().unwrap())
    } else {
        match matched.parse::<i64>() {
            Ok(value) => Number::Int(value),
            // past the integer range, fall back to a float value
            Err(_) => Number::Float(matched.parse().unwrap()),
        }
    };

    lexer.push(Token {
        kind: TokenKind::Number,
        value: matched.clone(),
        literal: Some(literal),
        position: lexer.position(),
    });
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched);
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    // Strip the delimiters; the content is taken verbatim, embedded
    // newlines included.
    let content = matched[1..matched.len() - 1].to_string();

    lexer.push(MK_TOKEN!(TokenKind::String, content, lexer.position()));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    if let Some(kind) = RESERVED_LOOKUP.get(matched.as_str()) {
        lexer.push(MK_TOKEN!(*kind, matched.clone(), lexer.position()));
    } else {
        lexer.push(MK_TOKEN!(
            TokenKind::Identifier,
            matched.clone(),
            lexer.position()
        ));
    }

    lexer.advance_n(matched.len());
}

/// Converts a source string into an ordered token sequence terminated by a
/// single `Eof` token.
///
/// Lexical faults never abort tokenization: an unexpected character is
/// skipped and an unterminated string consumes the rest of the input, each
/// leaving a warning behind, so one source file may yield several warnings
/// alongside a usable token stream.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexWarning>) {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            let matches_here = pattern
                .regex
                .find(lex.remainder())
                .is_some_and(|found| found.start() == 0);

            if matches_here {
                (pattern.handler)(&mut lex, &pattern.regex);
                matched = true;
                break;
            }
        }

        if !matched {
            let character = lex.at();
            if character == '"' || character == '\'' {
                // An opening quote with no closing delimiter ahead. The rest
                // of the input is consumed, as the line counter still has to
                // advance past any newlines inside it.
                let rest = lex.remainder().len();
                lex.advance_n(rest);
                let line = lex.position().line;
                lex.push_warning(LexWarning::UnterminatedString { line });
            } else {
                let position = lex.position();
                lex.push_warning(LexWarning::UnexpectedCharacter {
                    character,
                    line: position.line,
                    column: position.column,
                });
                lex.advance_n(character.len_utf8());
            }
        }
    }

    lex.push(MK_TOKEN!(TokenKind::Eof, String::from("EOF"), lex.position()));
    (lex.tokens, lex.warnings)
}
