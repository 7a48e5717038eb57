//! Recursive-descent parser building the grammar data model directly.

use cfdg_core::{HsvColor, Primitive, Transform2D};
use cfdg_grammar::{Grammar, Replacement, Rule};

use crate::error::{ParseError, ParseResult, Span};
use crate::lexer::{Lexer, Token, TokenKind};

// ==================== PUBLIC API ====================

/// Compile design-grammar source text into a [`Grammar`].
///
/// All-or-nothing: any syntax problem yields a [`ParseError`] and no partial
/// grammar. Selection probabilities are left underived; they are computed by
/// `Grammar::finish_setup` before evaluation.
pub fn compile(source: &str, name: Option<&str>) -> ParseResult<Grammar> {
    let mut grammar = Parser::new(source)?.parse_grammar()?;
    grammar.name = name.map(str::to_string);
    Ok(grammar)
}

// ==================== PARSER STATE ====================

/// Parser state.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser from source text.
    pub fn new(input: &str) -> ParseResult<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self { tokens, pos: 0 })
    }
}

// ==================== TOKEN HELPERS ====================

impl Parser {
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("tokens should always end with EOF")
        })
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let token = self.peek();
            Err(ParseError::unexpected_token(
                token.span,
                kind.name(),
                token.kind.name(),
            ))
        }
    }

    fn expect_ident(&mut self) -> ParseResult<String> {
        match self.peek().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            _ => {
                let token = self.peek();
                Err(ParseError::unexpected_token(
                    token.span,
                    "identifier",
                    token.kind.name(),
                ))
            }
        }
    }

    fn expect_number(&mut self) -> ParseResult<f32> {
        match self.peek().kind {
            TokenKind::Number(value) => {
                self.advance();
                Ok(value)
            }
            _ => {
                let token = self.peek();
                Err(ParseError::unexpected_token(
                    token.span,
                    "number",
                    token.kind.name(),
                ))
            }
        }
    }
}

// ==================== GRAMMAR PARSING ====================

impl Parser {
    /// Parse a full grammar: any sequence of `startshape`, `background` and
    /// `rule` statements.
    pub fn parse_grammar(&mut self) -> ParseResult<Grammar> {
        let mut grammar = Grammar::new();

        loop {
            match &self.peek().kind {
                TokenKind::Eof => break,
                TokenKind::Startshape => {
                    self.advance();
                    grammar.start_shape = Some(self.expect_ident()?);
                }
                TokenKind::Background => {
                    self.advance();
                    let (_, color) = self.parse_adjustment_block(false)?;
                    grammar.background = color;
                }
                TokenKind::Rule => {
                    self.advance();
                    grammar.add_rule(self.parse_rule()?);
                }
                _ => {
                    let token = self.peek();
                    return Err(ParseError::unexpected_token(
                        token.span,
                        "startshape, background, or rule",
                        token.kind.name(),
                    ));
                }
            }
        }

        Ok(grammar)
    }

    /// Parse one `NAME [weight] { replacement* }` block (the `rule` keyword
    /// is already consumed).
    fn parse_rule(&mut self) -> ParseResult<Rule> {
        let name = self.expect_ident()?;
        let mut rule = Rule::new(name);

        if self.check(&TokenKind::Number(0.0)) {
            let span = self.peek().span;
            let weight = self.expect_number()?;
            if weight < 0.0 {
                return Err(ParseError::new(
                    format!("rule weight must be non-negative, got {}", weight),
                    span,
                ));
            }
            rule.weight = weight;
        }

        let open = self.expect(&TokenKind::LBrace)?;
        rule.replacements = self.parse_replacements(open.span)?;
        Ok(rule)
    }

    /// Parse replacements until the closing `}` of an already-open block.
    fn parse_replacements(&mut self, open_span: Span) -> ParseResult<Vec<Replacement>> {
        let mut replacements = Vec::new();
        loop {
            match &self.peek().kind {
                TokenKind::RBrace => {
                    self.advance();
                    return Ok(replacements);
                }
                TokenKind::Eof => {
                    return Err(ParseError::new("unterminated block", open_span));
                }
                _ => replacements.push(self.parse_replacement()?),
            }
        }
    }

    /// Parse one replacement: `NAME block`, or the loop form
    /// `COUNT * block ( { replacement* } | replacement )`.
    fn parse_replacement(&mut self) -> ParseResult<Replacement> {
        if self.check(&TokenKind::Number(0.0)) {
            return self.parse_loop();
        }

        let name = self.expect_ident()?;
        let replacement = match Primitive::from_name(&name) {
            Some(primitive) => Replacement::primitive(primitive),
            None => Replacement::call(name),
        };
        self.finish_replacement(replacement)
    }

    fn parse_loop(&mut self) -> ParseResult<Replacement> {
        let span = self.peek().span;
        let count = self.expect_number()?;
        if count < 1.0 || count.fract() != 0.0 {
            return Err(ParseError::new(
                format!("loop count must be a positive integer, got {}", count),
                span,
            ));
        }
        self.expect(&TokenKind::Star)?;

        // The first block is the per-iteration adjustment, the body either a
        // braced replacement list or a single replacement.
        let (transform, color) = self.parse_adjustment_block(true)?;
        let body = if self.check(&TokenKind::LBrace) {
            let open = self.advance();
            self.parse_replacements(open.span)?
        } else {
            vec![self.parse_replacement()?]
        };

        Ok(Replacement::loop_block(count as u32, body)
            .with_transform(transform)
            .with_color(color))
    }

    fn finish_replacement(&mut self, mut replacement: Replacement) -> ParseResult<Replacement> {
        let (transform, color) = self.parse_adjustment_block(true)?;
        replacement.transform = transform;
        replacement.color = color;
        Ok(replacement)
    }

    /// Parse a `{ adjustment* }` or `[ adjustment* ]` block (the two bracket
    /// forms are equivalent). Geometric adjustments compose left to right
    /// onto the transform; color adjustments overwrite their field.
    fn parse_adjustment_block(
        &mut self,
        allow_geometric: bool,
    ) -> ParseResult<(Transform2D, HsvColor)> {
        let (open, close) = if self.check(&TokenKind::LBracket) {
            (self.advance(), TokenKind::RBracket)
        } else {
            (self.expect(&TokenKind::LBrace)?, TokenKind::RBrace)
        };

        let mut transform = Transform2D::IDENTITY;
        let mut color = HsvColor::ZERO;

        loop {
            if self.check(&close) {
                self.advance();
                return Ok((transform, color));
            }
            if self.check(&TokenKind::Eof) {
                return Err(ParseError::new("unterminated adjustment block", open.span));
            }

            let span = self.peek().span;
            let word = self.expect_ident()?;
            match word.as_str() {
                "hue" | "h" => color.h = self.expect_number()?,
                "sat" => color.s = self.expect_number()?,
                "brightness" | "b" => color.v = self.expect_number()?,
                "alpha" | "a" => color.a = self.expect_number()?,
                "x" | "y" | "z" | "rotate" | "r" | "size" | "s" | "skew" | "flip" => {
                    if !allow_geometric {
                        return Err(ParseError::new(
                            format!("geometric adjustment '{}' not allowed in background", word),
                            span,
                        ));
                    }
                    self.parse_geometric_adjustment(&word, &mut transform)?;
                }
                _ => {
                    return Err(ParseError::new(
                        format!("unknown adjustment '{}'", word),
                        span,
                    ));
                }
            }
        }
    }

    fn parse_geometric_adjustment(
        &mut self,
        word: &str,
        transform: &mut Transform2D,
    ) -> ParseResult<()> {
        match word {
            "x" => {
                let v = self.expect_number()?;
                *transform = transform.then(&Transform2D::translation(v, 0.0));
            }
            "y" => {
                let v = self.expect_number()?;
                *transform = transform.then(&Transform2D::translation(0.0, v));
            }
            "z" => {
                // Depth offset has no effect on the 2D output; the argument
                // is still required.
                self.expect_number()?;
            }
            "rotate" | "r" => {
                let v = self.expect_number()?;
                *transform = transform.then(&Transform2D::rotation(v));
            }
            "size" | "s" => {
                let x = self.expect_number()?;
                let mut y = x;
                if self.check(&TokenKind::Number(0.0)) {
                    y = self.expect_number()?;
                    // Optional third component is a depth scale, ignored.
                    if self.check(&TokenKind::Number(0.0)) {
                        self.expect_number()?;
                    }
                }
                *transform = transform.then(&Transform2D::scale(x, y));
            }
            "skew" => {
                let x = self.expect_number()?;
                let y = self.expect_number()?;
                *transform = transform.then(&Transform2D::shear(x, y));
            }
            "flip" => {
                let v = self.expect_number()?;
                *transform = transform.then(&Transform2D::reflection(v));
            }
            _ => unreachable!("caller matched geometric keywords"),
        }
        Ok(())
    }
}

// ==================== TESTS ====================
