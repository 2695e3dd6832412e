use crate::error::CalcError;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Comma,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(v) => write!(f, "number '{}'", v),
            TokenKind::Ident(s) => write!(f, "identifier '{}'", s),
            TokenKind::Plus => f.write_str("'+'"),
            TokenKind::Minus => f.write_str("'-'"),
            TokenKind::Star => f.write_str("'*'"),
            TokenKind::Slash => f.write_str("'/'"),
            TokenKind::LParen => f.write_str("'('"),
            TokenKind::RParen => f.write_str("')'"),
            TokenKind::Comma => f.write_str("','"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// A lexical unit together with the byte offset where it starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

/// Splits `expr` into tokens. The returned vector always ends with a single
/// [`TokenKind::Eof`] positioned at the end of the input.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, CalcError> {
    let mut lex = Lexer::new(expr);
    let mut out = Vec::new();
    loop {
        let tok = lex.next_token()?;
        let done = tok.kind == TokenKind::Eof;
        out.push(tok);
        if done {
            return Ok(out);
        }
    }
}

pub(crate) struct Lexer<'a> {
    src: &'a str,
    i: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(s: &'a str) -> Self {
        Self { src: s, i: 0 }
    }
    fn peek(&self) -> Option<char> {
        self.src[self.i..].chars().next()
    }
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek();
        if let Some(c) = ch {
            self.i += c.len_utf8();
        }
        ch
    }
    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.i += c.len_utf8();
            } else {
                break;
            }
        }
    }
    fn skip_digits(&mut self) -> usize {
        let start = self.i;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.i += 1;
            } else {
                break;
            }
        }
        self.i - start
    }
    pub(crate) fn next_token(&mut self) -> Result<Token, CalcError> {
        self.skip_ws();
        let pos = self.i;
        let c = match self.peek() {
            Some(c) => c,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    pos,
                });
            }
        };
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            ',' => TokenKind::Comma,
            c if c.is_ascii_digit() || c == '.' => return self.lex_number(),
            c if c.is_alphabetic() => return Ok(self.lex_ident()),
            ch => return Err(CalcError::UnexpectedChar { ch, pos }),
        };
        self.bump();
        Ok(Token { kind, pos })
    }
    fn lex_number(&mut self) -> Result<Token, CalcError> {
        let start = self.i;
        let mut digits = self.skip_digits();
        if self.peek() == Some('.') {
            self.i += 1;
            digits += self.skip_digits();
        }
        let mut well_formed = digits > 0;
        if matches!(self.peek(), Some('e' | 'E')) {
            self.i += 1;
            if matches!(self.peek(), Some('+' | '-')) {
                self.i += 1;
            }
            // An exponent marker must carry at least one digit.
            well_formed &= self.skip_digits() > 0;
        }
        let s = &self.src[start..self.i];
        let malformed = || CalcError::MalformedNumber {
            lexeme: s.to_string(),
            pos: start,
        };
        if !well_formed {
            return Err(malformed());
        }
        let v: f64 = s.parse().map_err(|_| malformed())?;
        Ok(Token {
            kind: TokenKind::Number(v),
            pos: start,
        })
    }
    fn lex_ident(&mut self) -> Token {
        let start = self.i;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() {
                self.i += c.len_utf8();
            } else {
                break;
            }
        }
        Token {
            kind: TokenKind::Ident(self.src[start..self.i].to_string()),
            pos: start,
        }
    }
}
