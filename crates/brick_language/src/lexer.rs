//! Lexer for BrickLang.
//!
//! The lexer is a pull source: the parser asks for one token at a time with
//! [`Lexer::next_token`]. Malformed input never stops the lexer; it produces
//! [`TokenKind::Error`] tokens and carries on.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for BrickLang source code.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token and advances past it.
    ///
    /// Once the input is exhausted every call returns an [`TokenKind::Eof`]
    /// token at the final position.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.position;
        let line = self.line;
        let column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, "", Span::new(start, start, line, column));
        };

        let kind = match c {
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_word(),
            c if c.is_ascii_digit() => self.scan_number(),
            '#' => self.scan_hex_color(),
            '<' => self.scan_operator(TokenKind::Less, TokenKind::LessEq),
            '>' => self.scan_operator(TokenKind::Greater, TokenKind::GreaterEq),
            '=' => self.scan_operator(TokenKind::Assign, TokenKind::EqEq),
            '!' => self.scan_operator(TokenKind::Error, TokenKind::NotEq),
            _ => {
                self.advance();
                match c {
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    ':' => TokenKind::Colon,
                    ';' => TokenKind::Semicolon,
                    ',' => TokenKind::Comma,
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    '*' => TokenKind::Star,
                    '/' => TokenKind::Slash,
                    _ => TokenKind::Error,
                }
            }
        };

        let span = Span::new(start, self.position, line, column);
        Token::new(kind, span.text(self.source), span)
    }

    /// Returns the next token without consuming it.
    ///
    /// Position, line and column are saved before and restored after one
    /// call to [`Lexer::next_token`].
    pub fn peek_token(&mut self) -> Token {
        let saved = (self.position, self.line, self.column);
        let token = self.next_token();
        (self.position, self.line, self.column) = saved;
        token
    }

    /// Tokenizes all source and returns every token, ending with the
    /// [`TokenKind::Eof`] token.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Peeks at the character after the next one.
    fn peek_second(&self) -> Option<char> {
        self.source[self.position..].chars().nth(1)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Advances while `pred` holds for the next character.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Skips whitespace and `//` line comments, in any interleaving.
    fn skip_trivia(&mut self) {
        loop {
            self.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
            if self.peek_char() == Some('/') && self.peek_second() == Some('/') {
                self.advance_while(|c| c != '\n');
            } else {
                break;
            }
        }
    }

    /// Scans an identifier or keyword.
    fn scan_word(&mut self) -> TokenKind {
        let start = self.position;
        self.advance_while(is_word_char);
        TokenKind::keyword(&self.source[start..self.position]).unwrap_or(TokenKind::Identifier)
    }

    /// Scans an integer. Letters glued to the digits turn the whole run into
    /// one error token.
    fn scan_number(&mut self) -> TokenKind {
        self.advance_while(|c| c.is_ascii_digit());
        if self.peek_char().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.advance_while(is_word_char);
            return TokenKind::Error;
        }
        TokenKind::Integer
    }

    /// Scans `#RRGGBB`. Any other digit count, or word characters glued to
    /// the sixth digit, turn the whole run into one error token.
    fn scan_hex_color(&mut self) -> TokenKind {
        self.advance(); // consume '#'
        let mut digits = 0;
        while digits < 6 && self.peek_char().is_some_and(|c| c.is_ascii_hexdigit()) {
            self.advance();
            digits += 1;
        }
        if digits == 6 && !self.peek_char().is_some_and(is_word_char) {
            return TokenKind::HexColor;
        }
        self.advance_while(is_word_char);
        TokenKind::Error
    }

    /// Scans `c` or `c=`, returning `double` for the two-character form.
    fn scan_operator(&mut self, single: TokenKind, double: TokenKind) -> TokenKind {
        self.advance();
        if self.peek_char() == Some('=') {
            self.advance();
            double
        } else {
            single
        }
    }
}

/// Returns true if `c` can continue an identifier.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
