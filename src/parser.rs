use crate::ast::{Ast, BinOp};
use crate::error::CalcError;
use crate::lexer::{Token, TokenKind};

/// Maximum nesting of parenthesized groups and function calls.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Builds an expression tree from `tokens`, which is expected to end with
/// [`TokenKind::Eof`] as produced by [`tokenize`](crate::tokenize).
pub fn parse(tokens: &[Token]) -> Result<Ast, CalcError> {
    Parser::new(tokens).parse()
}

pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    idx: usize,
    depth: usize,
    eof: Token,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        // Stands in for a missing terminator so the cursor never runs off the end.
        let end = tokens.last().map_or(0, |t| t.pos);
        Self {
            tokens,
            idx: 0,
            depth: 0,
            eof: Token {
                kind: TokenKind::Eof,
                pos: end,
            },
        }
    }
    fn look(&self) -> &Token {
        self.tokens.get(self.idx).unwrap_or(&self.eof)
    }
    fn bump(&mut self) {
        if self.idx < self.tokens.len() {
            self.idx += 1;
        }
    }
    fn unexpected(&self, expected: &'static str) -> CalcError {
        let tok = self.look();
        CalcError::UnexpectedToken {
            found: tok.kind.to_string(),
            expected,
            pos: tok.pos,
        }
    }
    fn expect(&mut self, t: &TokenKind, expected: &'static str) -> Result<(), CalcError> {
        if std::mem::discriminant(&self.look().kind) == std::mem::discriminant(t) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }
    pub(crate) fn parse(mut self) -> Result<Ast, CalcError> {
        if self.look().kind == TokenKind::Eof {
            return Err(CalcError::EmptyExpression {
                pos: self.look().pos,
            });
        }
        let expr = self.additive()?;
        let tok = self.look();
        if tok.kind != TokenKind::Eof {
            return Err(CalcError::TrailingInput {
                found: tok.kind.to_string(),
                pos: tok.pos,
            });
        }
        Ok(expr)
    }
    fn additive(&mut self) -> Result<Ast, CalcError> {
        let mut node = self.multiplicative()?;
        loop {
            let op = match self.look().kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.bump();
            let rhs = self.multiplicative()?;
            node = Ast::binary(op, node, rhs);
        }
        Ok(node)
    }
    fn multiplicative(&mut self) -> Result<Ast, CalcError> {
        let mut node = self.unary()?;
        loop {
            let op = match self.look().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.bump();
            let rhs = self.unary()?;
            node = Ast::binary(op, node, rhs);
        }
        Ok(node)
    }
    fn unary(&mut self) -> Result<Ast, CalcError> {
        if self.look().kind == TokenKind::Minus {
            self.bump();
            return Ok(Ast::neg(self.primary()?));
        }
        self.primary()
    }
    fn primary(&mut self) -> Result<Ast, CalcError> {
        let tok = self.look().clone();
        match tok.kind {
            TokenKind::Number(v) => {
                self.bump();
                Ok(Ast::Num(v))
            }
            TokenKind::Ident(name) => {
                self.bump();
                self.expect(&TokenKind::LParen, "'(' after function name")?;
                self.enter(tok.pos)?;
                let mut args = Vec::new();
                if self.look().kind != TokenKind::RParen {
                    loop {
                        args.push(self.additive()?);
                        if self.look().kind == TokenKind::Comma {
                            self.bump();
                            continue;
                        }
                        break;
                    }
                }
                self.expect(&TokenKind::RParen, "',' or ')'")?;
                self.depth -= 1;
                Ok(Ast::Call { name, args })
            }
            TokenKind::LParen => {
                self.bump();
                self.enter(tok.pos)?;
                let e = self.additive()?;
                self.expect(&TokenKind::RParen, "')'")?;
                self.depth -= 1;
                Ok(e)
            }
            _ => Err(self.unexpected("number, function call or '('")),
        }
    }
    fn enter(&mut self, pos: usize) -> Result<(), CalcError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(CalcError::TooDeeplyNested { pos });
        }
        self.depth += 1;
        Ok(())
    }
}
