//! FILENAME: parser/src/validator.rs
//! PURPOSE: Gate between lexing and parsing that rejects invalid tokens.
//! CONTEXT: The lexer is total and marks unrecognized character runs as
//! `Invalid` tokens instead of failing. This module collects them all at
//! once so front ends can highlight every offending span in the formula
//! in a single diagnostic.

use crate::token::{Token, TokenType};
use thiserror::Error;

/// Raised when the formula contains character runs the lexer could not
/// classify. Carries every invalid token, not just the first.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("invalid token(s) found in formula {formula:?}")]
pub struct ValidationError {
    pub formula: String,
    pub invalid_tokens: Vec<Token>,
}

/// Scans the token stream for `Invalid` tokens.
///
/// Returns normally for a clean stream. Must run after `tokenize` and
/// before `parse`.
pub fn validate(formula: &str, tokens: &[Token]) -> Result<(), ValidationError> {
    let invalid_tokens: Vec<Token> = tokens
        .iter()
        .filter(|token| token.kind == TokenType::Invalid)
        .cloned()
        .collect();

    if invalid_tokens.is_empty() {
        return Ok(());
    }

    Err(ValidationError {
        formula: formula.to_string(),
        invalid_tokens,
    })
}
