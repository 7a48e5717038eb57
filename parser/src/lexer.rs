//! Lexer (tokenizer) for design-grammar source text.

use crate::{ParseError, ParseResult, Span};

/// Token types.
///
/// Only the three statement keywords are lexed as keywords; adjustment words
/// (`x`, `rotate`, `hue`, ...) come through as identifiers and are recognized
/// contextually by the parser, so they stay usable as rule names.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords (case-sensitive)
    Startshape,
    Background,
    Rule,

    // Literals
    Ident(String),
    Number(f32),

    // Symbols
    LBrace,   // {
    RBrace,   // }
    LBracket, // [
    RBracket, // ]
    Star,     // *

    // End of file
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Startshape => "startshape",
            TokenKind::Background => "background",
            TokenKind::Rule => "rule",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Number(_) => "number",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Star => "*",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token with its span.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn eof(pos: usize, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::new(pos, pos, line, column),
        }
    }
}

/// Lexer state.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize all input into a vector of tokens.
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn span_from(&self, start: usize, start_line: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_line, start_col)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            self.next_char();
        }
    }

    fn next_token(&mut self) -> ParseResult<Token> {
        self.skip_whitespace();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let Some(c) = self.next_char() else {
            return Ok(Token::eof(self.pos, self.line, self.column));
        };

        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '*' => TokenKind::Star,
            '#' => {
                self.skip_line_comment();
                return self.next_token();
            }
            '/' => match self.peek_char() {
                Some('/') => {
                    self.next_char();
                    self.skip_line_comment();
                    return self.next_token();
                }
                Some('*') => {
                    self.next_char();
                    self.skip_block_comment(start, start_line, start_col)?;
                    return self.next_token();
                }
                _ => {
                    return Err(ParseError::new(
                        "unexpected character '/'",
                        self.span_from(start, start_line, start_col),
                    ));
                }
            },
            '-' | '.' | '0'..='9' => self.scan_number(c, start, start_line, start_col)?,
            '_' | 'a'..='z' | 'A'..='Z' => self.scan_ident_or_keyword(c),
            _ => {
                return Err(ParseError::new(
                    format!("unexpected character '{}'", c),
                    self.span_from(start, start_line, start_col),
                ));
            }
        };

        Ok(Token::new(
            kind,
            self.span_from(start, start_line, start_col),
        ))
    }

    fn skip_block_comment(
        &mut self,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> ParseResult<()> {
        loop {
            match self.next_char() {
                None => {
                    return Err(ParseError::new(
                        "unterminated block comment",
                        self.span_from(start, start_line, start_col),
                    ));
                }
                Some('*') if self.peek_char() == Some('/') => {
                    self.next_char();
                    return Ok(());
                }
                Some(_) => {}
            }
        }
    }

    fn scan_ident_or_keyword(&mut self, first: char) -> TokenKind {
        let mut ident = String::new();
        ident.push(first);

        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '_' {
                ident.push(c);
                self.next_char();
            } else {
                break;
            }
        }

        // Statement keywords are case-sensitive; SQUARE vs square matters
        // elsewhere too, so no folding anywhere.
        match ident.as_str() {
            "startshape" => TokenKind::Startshape,
            "background" => TokenKind::Background,
            "rule" => TokenKind::Rule,
            _ => TokenKind::Ident(ident),
        }
    }

    /// Scan a signed decimal. Real grammars lean on short forms like `.9`,
    /// `-.5` and `-100`, so sign and leading dot are part of the literal.
    fn scan_number(
        &mut self,
        first: char,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> ParseResult<TokenKind> {
        let mut number = String::new();
        number.push(first);

        let mut seen_dot = first == '.';
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() || (c == '.' && !seen_dot) {
                seen_dot |= c == '.';
                number.push(c);
                self.next_char();
            } else {
                break;
            }
        }

        number.parse::<f32>().map(TokenKind::Number).map_err(|_| {
            ParseError::new(
                format!("invalid number literal '{}'", number),
                self.span_from(start, start_line, start_col),
            )
        })
    }
}
