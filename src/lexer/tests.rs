//! Unit tests for the lexer module.
//!
//! Covers keywords, identifiers, numeric and string literals, operators,
//! comments, source positions and the non-fatal warning paths.

use crate::errors::errors::LexWarning;

use super::{
    lexer::tokenize,
    tokens::{Number, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let (tokens, warnings) = tokenize("function if then else end while do return local");

    assert!(warnings.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::If);
    assert_eq!(tokens[2].kind, TokenKind::Then);
    assert_eq!(tokens[3].kind, TokenKind::Else);
    assert_eq!(tokens[4].kind, TokenKind::End);
    assert_eq!(tokens[5].kind, TokenKind::While);
    assert_eq!(tokens[6].kind, TokenKind::Do);
    assert_eq!(tokens[7].kind, TokenKind::Return);
    assert_eq!(tokens[8].kind, TokenKind::Local);
    assert_eq!(tokens[9].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_identifiers() {
    let (tokens, _) = tokenize("foo bar baz_123 _underscore");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_numbers() {
    let (tokens, _) = tokenize("42 3.14 0 100.5");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[0].literal, Some(Number::Int(42)));
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[1].literal, Some(Number::Float(3.14)));
    assert_eq!(tokens[2].literal, Some(Number::Int(0)));
    assert_eq!(tokens[3].literal, Some(Number::Float(100.5)));
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_strings_both_quote_styles() {
    let (tokens, warnings) = tokenize("\"hello\" 'world'");

    assert!(warnings.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_empty_string() {
    let (tokens, _) = tokenize("\"\"");

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_string_with_embedded_newline() {
    let (tokens, warnings) = tokenize("\"a\nb\" x");

    assert!(warnings.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\nb");
    // The line counter advanced past the newline inside the literal.
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].position.line, 2);
}

#[test]
fn test_tokenize_operators() {
    let (tokens, _) = tokenize("== >= <= .. = > < + - * / ( ) , ;");

    assert_eq!(tokens[0].kind, TokenKind::EqualEqual);
    assert_eq!(tokens[1].kind, TokenKind::GreaterEqual);
    assert_eq!(tokens[2].kind, TokenKind::LessEqual);
    assert_eq!(tokens[3].kind, TokenKind::DotDot);
    assert_eq!(tokens[4].kind, TokenKind::Assign);
    assert_eq!(tokens[5].kind, TokenKind::Greater);
    assert_eq!(tokens[6].kind, TokenKind::Less);
    assert_eq!(tokens[7].kind, TokenKind::Plus);
    assert_eq!(tokens[8].kind, TokenKind::Minus);
    assert_eq!(tokens[9].kind, TokenKind::Star);
    assert_eq!(tokens[10].kind, TokenKind::Slash);
    assert_eq!(tokens[11].kind, TokenKind::LParen);
    assert_eq!(tokens[12].kind, TokenKind::RParen);
    assert_eq!(tokens[13].kind, TokenKind::Comma);
    assert_eq!(tokens[14].kind, TokenKind::Semicolon);
    assert_eq!(tokens[15].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_concat_between_numbers() {
    let (tokens, _) = tokenize("1..2");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].kind, TokenKind::DotDot);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "2");
    assert_eq!(tokens[3].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_comments() {
    let (tokens, warnings) = tokenize("local x = 5 -- this is a comment\nlocal y = 10");

    assert!(warnings.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Local);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].value, "5");
    assert_eq!(tokens[4].kind, TokenKind::Local);
    assert_eq!(tokens[5].value, "y");
    assert_eq!(tokens[6].kind, TokenKind::Assign);
    assert_eq!(tokens[7].value, "10");
    assert_eq!(tokens[8].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_minus_is_not_a_comment() {
    let (tokens, _) = tokenize("x - y");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_simple_declaration() {
    let (tokens, warnings) = tokenize("local x = 10");

    assert!(warnings.is_empty());
    assert_eq!(tokens.len(), 5); // local, x, =, 10, EOF
    assert_eq!(tokens[0].kind, TokenKind::Local);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].literal, Some(Number::Int(10)));
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_positions() {
    let (tokens, _) = tokenize("local x = 1\nx = x + 2");

    assert_eq!(tokens[0].position.line, 1);
    assert_eq!(tokens[0].position.column, 1);
    assert_eq!(tokens[1].position.column, 7);
    assert_eq!(tokens[3].position.column, 11);
    // second line restarts the column counter
    assert_eq!(tokens[4].position.line, 2);
    assert_eq!(tokens[4].position.column, 1);
    assert_eq!(tokens[7].position.line, 2);
    assert_eq!(tokens[7].position.column, 9);
}

#[test]
fn test_tokenize_unexpected_character_warns_and_continues() {
    let (tokens, warnings) = tokenize("local @ x");

    assert_eq!(
        warnings,
        vec![LexWarning::UnexpectedCharacter {
            character: '@',
            line: 1,
            column: 7,
        }]
    );
    // The bad character is skipped; scanning continues after it.
    assert_eq!(tokens[0].kind, TokenKind::Local);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_multiple_warnings() {
    let (tokens, warnings) = tokenize("@ $");

    assert_eq!(warnings.len(), 2);
    assert_eq!(
        warnings[1],
        LexWarning::UnexpectedCharacter {
            character: '$',
            line: 1,
            column: 3,
        }
    );
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_unterminated_string() {
    let (tokens, warnings) = tokenize("local s = \"abc");

    assert_eq!(warnings, vec![LexWarning::UnterminatedString { line: 1 }]);
    assert_eq!(tokens[0].kind, TokenKind::Local);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let (tokens, _) = tokenize("  local   x   =   42  ");

    assert_eq!(tokens[0].kind, TokenKind::Local);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_empty_source() {
    let (tokens, warnings) = tokenize("");

    assert!(warnings.is_empty());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}
