//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions for the formula lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed
//! by the validator, the parser, and the truth-table enumerator.

use serde::{Deserialize, Serialize};

/// Classification of a lexed token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TokenType {
    LeftParen,
    RightParen,
    Not,
    And,
    Or,
    Then,
    Variable,
    /// A run of characters the lexer could not classify. Carried in-band
    /// for the validator to report instead of failing the lex.
    Invalid,
}

/// A classified lexical unit with its original text and source position.
///
/// `span` is the half-open `[start, end)` character-offset range into the
/// exact formula string that was tokenized. Front ends use it to underline
/// the offending substring when reporting errors.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenType,
    pub text: String,
    pub span: (usize, usize),
}

impl Token {
    pub fn new(kind: TokenType, text: impl Into<String>, span: (usize, usize)) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// True if the token's spelling is a word rather than a symbol
    /// (`NOT` vs `!`). Controls spacing in the canonical rendering.
    pub fn is_word(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|ch| ch.is_alphabetic())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
