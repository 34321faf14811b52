//! FILENAME: parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a stream of Tokens into
//! an expression tree.
//! CONTEXT: This is the second stage of the pipeline. It consumes the
//! token stream through a single forward cursor with one token of
//! lookahead and no backtracking; NOT chains are handled by structural
//! recursion.
//!
//! GRAMMAR (precedence low --> high, binary operators left-associative):
//!   expr         --> expr_then
//!   expr_then    --> expr_or ( THEN expr_or )*
//!   expr_or      --> expr_and ( OR expr_and )*
//!   expr_and     --> expr_not ( AND expr_not )*
//!   expr_not     --> NOT expr_not | expr_primary
//!   expr_primary --> "(" expr ")" | VARIABLE

use crate::ast::Expression;
use crate::token::{Token, TokenType};
use thiserror::Error;

/// Parser error pointing at the offending token.
///
/// When the token stream is exhausted the error points at the last
/// consumed token, so front ends always have a real span to underline.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub token: Token,
}

impl ParseError {
    fn new(message: impl Into<String>, token: Token) -> Self {
        ParseError {
            message: message.into(),
            token,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// The Parser holds the token stream and a cursor into it.
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, current: 0 }
    }

    /// Parses the whole token stream and returns the root of the tree.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        // An empty formula has no token to point at; synthesize a
        // zero-width one so the error still carries a span.
        if self.tokens.is_empty() {
            return Err(ParseError::new(
                "Expected variable",
                Token::new(TokenType::Invalid, "", (0, 0)),
            ));
        }

        let tree = self.expr()?;

        // The grammar must consume every token
        if !self.is_done() {
            return Err(ParseError::new(
                "Expected end of formula",
                self.peek().clone(),
            ));
        }

        Ok(tree)
    }

    /// expr --> expr_then
    fn expr(&mut self) -> ParseResult<Expression> {
        self.expr_then()
    }

    /// expr_then --> expr_or ( THEN expr_or )*
    fn expr_then(&mut self) -> ParseResult<Expression> {
        let mut expr = self.expr_or()?;

        while self.matches(TokenType::Then) {
            let operator = self.prev().clone();
            let right = self.expr_or()?;
            expr = Expression::BinaryOp {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// expr_or --> expr_and ( OR expr_and )*
    fn expr_or(&mut self) -> ParseResult<Expression> {
        let mut expr = self.expr_and()?;

        while self.matches(TokenType::Or) {
            let operator = self.prev().clone();
            let right = self.expr_and()?;
            expr = Expression::BinaryOp {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// expr_and --> expr_not ( AND expr_not )*
    fn expr_and(&mut self) -> ParseResult<Expression> {
        let mut expr = self.expr_not()?;

        while self.matches(TokenType::And) {
            let operator = self.prev().clone();
            let right = self.expr_not()?;
            expr = Expression::BinaryOp {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// expr_not --> NOT expr_not | expr_primary
    fn expr_not(&mut self) -> ParseResult<Expression> {
        if self.matches(TokenType::Not) {
            let operator = self.prev().clone();
            let operand = self.expr_not()?;
            return Ok(Expression::UnaryOp {
                operator,
                operand: Box::new(operand),
            });
        }

        self.expr_primary()
    }

    /// expr_primary --> "(" expr ")" | VARIABLE
    fn expr_primary(&mut self) -> ParseResult<Expression> {
        if self.matches(TokenType::LeftParen) {
            let expr = self.expr()?;
            if !self.check(TokenType::RightParen) {
                return Err(ParseError::new("Expected ')'", self.peek().clone()));
            }
            self.advance();
            // Groups collapse to their inner expression; the rendering
            // does not keep the parentheses
            return Ok(expr);
        }

        if self.matches(TokenType::Variable) {
            return Ok(Expression::Variable {
                name: self.prev().clone(),
            });
        }

        Err(ParseError::new("Expected variable", self.peek().clone()))
    }

    /// Consumes the current token if it matches the given type.
    fn matches(&mut self, kind: TokenType) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    /// Checks the current token against the given type without consuming.
    fn check(&self, kind: TokenType) -> bool {
        !self.is_done() && self.tokens[self.current].kind == kind
    }

    /// The current token, or the last token once the stream is exhausted.
    fn peek(&self) -> &Token {
        if self.is_done() {
            self.prev()
        } else {
            &self.tokens[self.current]
        }
    }

    /// The most recently consumed token. Only called once at least one
    /// token has been consumed.
    fn prev(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn advance(&mut self) {
        if !self.is_done() {
            self.current += 1;
        }
    }

    fn is_done(&self) -> bool {
        self.current == self.tokens.len()
    }
}

/// Convenience function to parse a token stream directly.
pub fn parse(tokens: &[Token]) -> ParseResult<Expression> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}
