//! Integration tests for the lexer
//!
//! Tests tokenization of BrickLang source code.

use brick_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source).into_iter().map(|t| t.kind).collect()
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_setting() {
    let tokens = Lexer::tokenize_all("speed: 8;");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Speed,
            TokenKind::Colon,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
    assert_eq!(tokens[2].lexeme, "8");
}

#[test]
fn tokenize_keywords() {
    assert_eq!(
        kinds("game speed grid color entity spawn solid controls rule tick collide score lose"),
        vec![
            TokenKind::Game,
            TokenKind::Speed,
            TokenKind::Grid,
            TokenKind::Color,
            TokenKind::Entity,
            TokenKind::Spawn,
            TokenKind::Solid,
            TokenKind::Controls,
            TokenKind::Rule,
            TokenKind::Tick,
            TokenKind::Collide,
            TokenKind::Score,
            TokenKind::Lose,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lives_is_an_identifier() {
    assert_eq!(kinds("lives"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn keyword_prefix_is_an_identifier() {
    let tokens = Lexer::tokenize_all("games _rule entity2");
    assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[2].lexeme, "entity2");
}

#[test]
fn tokenize_booleans() {
    assert_eq!(
        kinds("true false"),
        vec![TokenKind::True, TokenKind::False, TokenKind::Eof]
    );
}

#[test]
fn tokenize_operators() {
    assert_eq!(
        kinds("<= >= == != < > = + - * /"),
        vec![
            TokenKind::LessEq,
            TokenKind::GreaterEq,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_punctuation() {
    assert_eq!(
        kinds("{}(),:;"),
        vec![
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn hex_color_is_one_token() {
    let tokens = Lexer::tokenize_all("#1a2b3c");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::HexColor);
    assert_eq!(tokens[0].lexeme, "#1a2b3c");
}

#[test]
fn short_hex_color_is_one_error_token() {
    assert_eq!(kinds("#12"), vec![TokenKind::Error, TokenKind::Eof]);
    assert_eq!(
        kinds("#12;"),
        vec![TokenKind::Error, TokenKind::Semicolon, TokenKind::Eof]
    );
}

#[test]
fn long_or_glued_hex_color_is_one_error_token() {
    let tokens = Lexer::tokenize_all("#1234567 #abcdeg");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].lexeme, "#1234567");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].lexeme, "#abcdeg");
}

#[test]
fn number_glued_to_letters_is_one_error_token() {
    let tokens = Lexer::tokenize_all("42abc");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].lexeme, "42abc");
    assert_eq!(tokens[0].error_message(), "malformed numeric literal '42abc'");
}

#[test]
fn lone_bang_is_an_error() {
    let tokens = Lexer::tokenize_all("!");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].error_message(), "unexpected character '!'");
}

#[test]
fn non_ascii_is_a_single_error_character() {
    let tokens = Lexer::tokenize_all("é x");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].lexeme, "é");
    assert_eq!(tokens[1].column(), 3);
}

// =============================================================================
// Trivia and positions
// =============================================================================

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(
        kinds("// header\nentity\t// trailing\r\n  e // end"),
        vec![TokenKind::Entity, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn lone_slash_is_divide() {
    assert_eq!(
        kinds("a / b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

#[test]
fn positions_are_one_based() {
    let tokens = Lexer::tokenize_all("game X {\n  speed: 8;\n}");
    assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    assert_eq!((tokens[1].line(), tokens[1].column()), (1, 6));
    assert_eq!((tokens[3].line(), tokens[3].column()), (2, 3));
    assert_eq!((tokens[5].line(), tokens[5].column()), (2, 10));
    assert_eq!((tokens[7].line(), tokens[7].column()), (3, 1));
}

#[test]
fn span_covers_lexeme() {
    let source = "color: #ff0000;";
    let tokens = Lexer::tokenize_all(source);
    assert_eq!(tokens[2].span.text(source), "#ff0000");
    assert_eq!(tokens[2].span.len(), 7);
}

// =============================================================================
// Pull interface
// =============================================================================

#[test]
fn end_token_repeats() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn peek_does_not_consume() {
    let mut lexer = Lexer::new("entity\n  wall");
    assert_eq!(lexer.next_token().kind, TokenKind::Entity);
    let peeked = lexer.peek_token();
    let position = lexer.position();
    let next = lexer.next_token();
    assert_eq!(peeked, next);
    assert_eq!((next.line(), next.column()), (2, 3));
    assert!(lexer.position() > position);
}
