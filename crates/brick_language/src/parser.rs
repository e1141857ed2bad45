//! Parser for BrickLang.
//!
//! Recursive descent over a pull-based [`Lexer`] with one token of lookahead.
//! Grammar violations never abort the parse: they are recorded in the shared
//! [`Diagnostics`] sink, an internal error flag is raised, and the enclosing
//! loop calls [`Parser::synchronize`] to skip to a safe point.

use brick_foundation::{Diagnostics, Rgb};
use log::debug;

use crate::ast::{
    BinaryOperator, ControlDecl, EntityDecl, Expr, Game, Program, RuleDecl, Setting, Statement,
};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Parses a whole source file.
///
/// Returns `None` only when the `game NAME` header is missing. A program may
/// be returned even though diagnostics were recorded; callers decide what to
/// do with it by checking the sink.
pub fn parse(source: &str, diagnostics: &mut Diagnostics) -> Option<Program> {
    Parser::new(source, diagnostics).parse_program()
}

/// Parser for BrickLang source code.
pub struct Parser<'src, 'd> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead). Never an error token.
    current: Token,
    /// Sink for every problem found while parsing.
    diagnostics: &'d mut Diagnostics,
    /// Set by [`Parser::error`], cleared by [`Parser::synchronize`].
    had_error: bool,
}

impl<'src, 'd> Parser<'src, 'd> {
    /// Creates a new parser for the given source.
    pub fn new(source: &'src str, diagnostics: &'d mut Diagnostics) -> Self {
        let mut lexer = Lexer::new(source);
        let current = next_significant(&mut lexer, diagnostics);
        Self {
            lexer,
            current,
            diagnostics,
            had_error: false,
        }
    }

    /// Returns the current lookahead token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Returns the token after the current one without consuming anything.
    pub fn peek(&mut self) -> Token {
        self.lexer.peek_token()
    }

    /// Returns true if an error was raised since the last recovery.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.had_error
    }

    /// Clears the error flag without moving.
    pub fn reset_error(&mut self) {
        self.had_error = false;
    }

    /// Panic-mode recovery.
    ///
    /// Clears the error flag, then discards tokens until a `;` (consumed), a
    /// keyword that starts a top-level item (not consumed), or end of input.
    pub fn synchronize(&mut self) {
        self.had_error = false;
        while self.current.kind != TokenKind::Eof {
            if self.current.kind == TokenKind::Semicolon {
                self.advance();
                return;
            }
            if self.current.kind.starts_item() {
                return;
            }
            self.advance();
        }
    }

    /// Parses `game NAME { item* }` followed by end of input.
    pub fn parse_program(&mut self) -> Option<Program> {
        let start = self.current.span;
        if !self.eat(TokenKind::Game) {
            self.error("expected 'game'");
            return None;
        }
        if self.current.kind != TokenKind::Identifier {
            self.error("expected game name");
            return None;
        }
        let name = self.current.lexeme.clone();
        let mut game = Game::new(name.clone(), self.current.span);
        self.advance();

        if !self.eat(TokenKind::LBrace) {
            self.error("expected '{' after game name");
            self.reset_error();
        }

        while !matches!(self.current.kind, TokenKind::RBrace | TokenKind::Eof) {
            let before = self.current.span.start;
            self.parse_game_item(&mut game);
            if self.had_error {
                self.synchronize();
            }
            if self.current.span.start == before && self.current.kind != TokenKind::Eof {
                self.advance();
            }
        }

        if !self.eat(TokenKind::RBrace) {
            self.error("expected '}' at end of game body");
        } else if self.current.kind != TokenKind::Eof {
            self.error("expected end of input after game body");
        }

        debug!(
            game:% = name,
            settings = game.settings.len(),
            entities = game.entities.len(),
            controls = game.controls.len(),
            rules = game.rules.len();
            "Parsed program"
        );

        Some(Program {
            game_name: name,
            game,
            span: start,
        })
    }

    /// Parses an expression with binary operator precedence.
    pub fn parse_expression(&mut self) -> Option<Expr> {
        self.parse_binary(1)
    }

    /// Dispatches one item of the game body, adding it to `game`.
    fn parse_game_item(&mut self, game: &mut Game) {
        let kind = self.current.kind;
        match kind {
            TokenKind::Speed | TokenKind::Grid | TokenKind::Color | TokenKind::Score => {
                if let Some(setting) = self.parse_setting() {
                    game.settings.push(setting);
                }
            }
            TokenKind::Identifier if self.current.lexeme == "lives" => {
                if let Some(setting) = self.parse_setting() {
                    game.settings.push(setting);
                }
            }
            TokenKind::Entity => {
                if let Some(entity) = self.parse_entity() {
                    game.entities.push(entity);
                }
            }
            TokenKind::Controls => {
                if let Some(controls) = self.parse_controls() {
                    game.controls.extend(controls);
                }
            }
            TokenKind::Rule => {
                if let Some(rule) = self.parse_rule() {
                    game.rules.push(rule);
                }
            }
            TokenKind::Identifier if self.peek().kind == TokenKind::Colon => {
                let message = format!("unknown setting '{}'", self.current.lexeme);
                self.error(&message);
            }
            _ => self.error("unexpected item in game body"),
        }
    }

    /// Parses `key: value;` for a game setting. The value shape depends on
    /// the key.
    fn parse_setting(&mut self) -> Option<Setting> {
        let key_token = self.current.clone();
        self.advance();
        self.expect(TokenKind::Colon, "expected ':' after setting name")?;

        let value = match key_token.kind {
            TokenKind::Grid => self.parse_point("grid")?,
            TokenKind::Color => self.parse_hex_color()?,
            _ => {
                let span = self.current.span;
                let n = self.integer_literal(&key_token.lexeme)?;
                Expr::Integer(n, span)
            }
        };

        self.expect(TokenKind::Semicolon, "expected ';' after setting")?;
        Some(Setting::new(key_token.lexeme, value, key_token.span))
    }

    /// Parses `entity NAME { property* }`.
    fn parse_entity(&mut self) -> Option<EntityDecl> {
        let span = self.current.span;
        self.advance();
        if self.current.kind != TokenKind::Identifier {
            self.error("expected entity name");
            return None;
        }
        let name = self.current.lexeme.clone();
        self.advance();
        self.expect(TokenKind::LBrace, "expected '{' after entity name")?;

        let mut properties = Vec::new();
        while !self.at_body_end() {
            if let Some(property) = self.parse_entity_property() {
                properties.push(property);
            }
            if self.had_error {
                self.synchronize();
            }
        }
        if !self.eat(TokenKind::RBrace) {
            self.error("expected '}' at end of entity");
        }

        Some(EntityDecl {
            name,
            properties,
            span,
        })
    }

    /// Parses `spawn: (x, y);`, `color: #RRGGBB;` or `solid: BOOL;`.
    fn parse_entity_property(&mut self) -> Option<Setting> {
        let key_token = self.current.clone();
        if !matches!(
            key_token.kind,
            TokenKind::Spawn | TokenKind::Color | TokenKind::Solid
        ) {
            let message = format!("unknown entity property '{}'", key_token.lexeme);
            self.error(&message);
            return None;
        }
        self.advance();
        self.expect(TokenKind::Colon, "expected ':' after entity property")?;

        let value = match key_token.kind {
            TokenKind::Spawn => self.parse_point("spawn")?,
            TokenKind::Color => self.parse_hex_color()?,
            _ => {
                let span = self.current.span;
                let flag = match self.current.kind {
                    TokenKind::True => true,
                    TokenKind::False => false,
                    _ => {
                        self.error("expected 'true' or 'false' for solid");
                        return None;
                    }
                };
                self.advance();
                Expr::Boolean(flag, span)
            }
        };

        self.expect(TokenKind::Semicolon, "expected ';' after entity property")?;
        Some(Setting::new(key_token.lexeme, value, key_token.span))
    }

    /// Parses `controls { input: action; ... }`.
    fn parse_controls(&mut self) -> Option<Vec<ControlDecl>> {
        self.advance();
        self.expect(TokenKind::LBrace, "expected '{' after 'controls'")?;

        let mut controls = Vec::new();
        while !self.at_body_end() {
            if let Some(control) = self.parse_control() {
                controls.push(control);
            }
            if self.had_error {
                self.synchronize();
            }
        }
        if !self.eat(TokenKind::RBrace) {
            self.error("expected '}' at end of controls");
        }
        Some(controls)
    }

    fn parse_control(&mut self) -> Option<ControlDecl> {
        let span = self.current.span;
        let input = self.name("expected input name in controls")?;
        self.expect(TokenKind::Colon, "expected ':' after input name")?;
        let action = self.name("expected action name after ':'")?;
        self.expect(TokenKind::Semicolon, "expected ';' after control mapping")?;
        Some(ControlDecl {
            input,
            action,
            span,
        })
    }

    /// Parses `rule NAME { statement* }`.
    fn parse_rule(&mut self) -> Option<RuleDecl> {
        let span = self.current.span;
        self.advance();
        if self.current.kind != TokenKind::Identifier {
            self.error("expected rule name");
            return None;
        }
        let name = self.current.lexeme.clone();
        self.advance();
        self.expect(TokenKind::LBrace, "expected '{' after rule name")?;

        let mut statements = Vec::new();
        while !self.at_body_end() {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            if self.had_error {
                self.synchronize();
            }
        }
        if !self.eat(TokenKind::RBrace) {
            self.error("expected '}' at end of rule");
        }

        Some(RuleDecl {
            name,
            statements,
            span,
        })
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        let span = self.current.span;
        match self.current.kind {
            TokenKind::Tick => {
                self.advance();
                let action = self.name("expected action name after 'tick'")?;
                let args = self.parse_optional_args()?;
                self.expect(TokenKind::Semicolon, "expected ';' after tick statement")?;
                Some(Statement::Tick { action, args, span })
            }
            TokenKind::Collide => {
                self.advance();
                let first = self.name("expected entity name after 'collide'")?;
                self.expect(TokenKind::Comma, "expected ',' between collide entities")?;
                let second = self.name("expected second entity name")?;
                self.expect(TokenKind::Colon, "expected ':' before collide action")?;
                let action = self.name("expected action name after ':'")?;
                let args = self.parse_optional_args()?;
                self.expect(TokenKind::Semicolon, "expected ';' after collide statement")?;
                Some(Statement::Collide {
                    first,
                    second,
                    action,
                    args,
                    span,
                })
            }
            TokenKind::Score => {
                self.advance();
                let positive = !self.eat(TokenKind::Minus);
                if positive {
                    self.eat(TokenKind::Plus);
                }
                let amount = self.integer_literal("score")?;
                self.expect(TokenKind::Semicolon, "expected ';' after score statement")?;
                Some(Statement::Score {
                    positive,
                    amount,
                    span,
                })
            }
            TokenKind::Lose => {
                self.advance();
                self.expect(TokenKind::Semicolon, "expected ';' after 'lose'")?;
                Some(Statement::Lose { span })
            }
            _ => {
                let message = format!(
                    "expected rule statement, found {}",
                    self.current.kind.name()
                );
                self.error(&message);
                None
            }
        }
    }

    /// Parses `( expr, ... )` when the current token is `(`; otherwise no
    /// arguments.
    fn parse_optional_args(&mut self) -> Option<Vec<Expr>> {
        if !self.eat(TokenKind::LParen) {
            return Some(Vec::new());
        }
        let mut args = Vec::new();
        if self.eat(TokenKind::RParen) {
            return Some(args);
        }
        loop {
            args.push(self.parse_expression()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen, "expected ')' after arguments")?;
        Some(args)
    }

    /// Precedence climbing. All operators are left associative.
    fn parse_binary(&mut self, min_precedence: u8) -> Option<Expr> {
        let mut left = self.parse_primary()?;
        while let Some(op) = BinaryOperator::from_token(self.current.kind) {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.advance();
            let right = self.parse_binary(precedence + 1)?;
            let span = left.span().to(right.span());
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Some(left)
    }

    fn parse_primary(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        match token.kind {
            TokenKind::Integer => {
                let n = self.integer_literal("expression")?;
                Some(Expr::Integer(n, token.span))
            }
            TokenKind::Minus => {
                self.advance();
                if self.current.kind != TokenKind::Integer {
                    self.error("expected integer after '-'");
                    return None;
                }
                let Ok(n) = format!("-{}", self.current.lexeme).parse::<i64>() else {
                    self.error("integer literal out of range");
                    return None;
                };
                self.advance();
                Some(Expr::Integer(n, token.span))
            }
            TokenKind::Identifier => {
                self.advance();
                Some(Expr::Identifier(token.lexeme, token.span))
            }
            TokenKind::HexColor => self.parse_hex_color(),
            TokenKind::True | TokenKind::False => {
                self.advance();
                Some(Expr::Boolean(token.kind == TokenKind::True, token.span))
            }
            TokenKind::LParen => {
                self.advance();
                if self.current.kind == TokenKind::Integer && self.peek().kind == TokenKind::Comma {
                    let x = self.integer_literal("point x coordinate")?;
                    self.advance();
                    let y = self.integer_literal("point y coordinate")?;
                    self.expect(TokenKind::RParen, "expected ')' after point coordinates")?;
                    return Some(Expr::Point(x, y, token.span));
                }
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen, "expected ')' after expression")?;
                Some(inner)
            }
            _ => {
                let message = format!("expected expression, found {}", token.kind.name());
                self.error(&message);
                None
            }
        }
    }

    /// Parses `(INT, INT)` into a point.
    fn parse_point(&mut self, what: &str) -> Option<Expr> {
        let span = self.current.span;
        let message = format!("expected '(' for {what}");
        self.expect(TokenKind::LParen, &message)?;
        let x = self.integer_literal(&format!("{what} x coordinate"))?;
        let message = format!("expected ',' between {what} coordinates");
        self.expect(TokenKind::Comma, &message)?;
        let y = self.integer_literal(&format!("{what} y coordinate"))?;
        let message = format!("expected ')' after {what} coordinates");
        self.expect(TokenKind::RParen, &message)?;
        Some(Expr::Point(x, y, span))
    }

    fn parse_hex_color(&mut self) -> Option<Expr> {
        if self.current.kind != TokenKind::HexColor {
            self.error("expected hex color");
            return None;
        }
        let span = self.current.span;
        let Some(color) = Rgb::parse_hex(&self.current.lexeme) else {
            self.error("invalid hex color");
            return None;
        };
        self.advance();
        Some(Expr::HexColor(color, span))
    }

    /// Consumes an integer literal. `context` names what the integer is for.
    fn integer_literal(&mut self, context: &str) -> Option<i64> {
        if self.current.kind != TokenKind::Integer {
            let message = format!("expected integer for {context}");
            self.error(&message);
            return None;
        }
        let Ok(n) = self.current.lexeme.parse::<i64>() else {
            self.error("integer literal out of range");
            return None;
        };
        self.advance();
        Some(n)
    }

    /// Consumes an identifier or keyword used as a plain label.
    fn name(&mut self, message: &str) -> Option<String> {
        if !self.current.is_name() {
            self.error(message);
            return None;
        }
        let name = self.current.lexeme.clone();
        self.advance();
        Some(name)
    }

    /// True at `}`, end of input, or a keyword starting a top-level item.
    fn at_body_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::RBrace | TokenKind::Eof)
            || self.current.kind.starts_item()
    }

    /// Advances to the next token, reporting and skipping error tokens.
    fn advance(&mut self) {
        self.current = next_significant(&mut self.lexer, self.diagnostics);
    }

    /// Consumes the current token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of the given kind or records `message`.
    fn expect(&mut self, kind: TokenKind, message: &str) -> Option<()> {
        if self.eat(kind) {
            Some(())
        } else {
            self.error(message);
            None
        }
    }

    /// Records a syntax error at the current token and raises the error flag.
    fn error(&mut self, message: &str) {
        self.had_error = true;
        let found = if self.current.kind == TokenKind::Eof {
            String::new()
        } else {
            format!(" (found '{}')", self.current.lexeme)
        };
        self.diagnostics.syntax(
            self.current.line(),
            self.current.column(),
            format!("{message}{found}"),
        );
    }
}

/// Pulls tokens until one that is not an error token, reporting each error
/// token as a lexical diagnostic.
fn next_significant(lexer: &mut Lexer<'_>, diagnostics: &mut Diagnostics) -> Token {
    loop {
        let token = lexer.next_token();
        if token.kind != TokenKind::Error {
            return token;
        }
        diagnostics.lexical(token.line(), token.column(), token.error_message());
    }
}
