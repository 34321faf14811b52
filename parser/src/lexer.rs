//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Scans a raw formula string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the pipeline. It handles whitespace
//! skipping, the alternative spellings of each operator, word-boundary
//! matching for keyword operators and variables, and multi-character
//! operators like && and ->. The lexer is total: a run of characters that
//! matches no class becomes a single `Invalid` token.
//!
//! At each scan position the classes are tried in priority order and the
//! first match wins:
//! - Parentheses: ( )
//! - NOT: `NOT`, `!`, `~`, `¬`
//! - AND: `AND`, `&&`, `&`, `^`, `∧`
//! - OR: `OR`, `||`, `|`, `v`, `∨`
//! - THEN: `THEN`, `>`, `->`, `→`
//! - Variable: word-bounded run of letters
//! All matching is case-insensitive.

use crate::token::{Token, TokenType};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    /// Advances the lexer and returns the next token, or None at end of
    /// input. Spans index characters of the original input, so the Unicode
    /// operator spellings count as one position each.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let start = self.pos;
        let ch = *self.chars.get(start)?;

        if ch == '(' {
            self.pos += 1;
            return Some(self.token(TokenType::LeftParen, start));
        }
        if ch == ')' {
            self.pos += 1;
            return Some(self.token(TokenType::RightParen, start));
        }

        if let Some(token) = self.read_not(start) {
            return Some(token);
        }
        if let Some(token) = self.read_and(start) {
            return Some(token);
        }
        if let Some(token) = self.read_or(start) {
            return Some(token);
        }
        if let Some(token) = self.read_then(start) {
            return Some(token);
        }
        if let Some(token) = self.read_variable(start) {
            return Some(token);
        }
        Some(self.read_invalid(start))
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.get(self.pos) {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    /// NOT operators: `NOT`, `!`, `~`, `¬`
    fn read_not(&mut self, start: usize) -> Option<Token> {
        if self.eat_word("NOT")
            || self.eat_symbol("!")
            || self.eat_symbol("~")
            || self.eat_symbol("¬")
        {
            return Some(self.token(TokenType::Not, start));
        }
        None
    }

    /// AND operators: `AND`, `&&`, `&`, `^`, `∧` (the two-character `&&`
    /// is tried before `&` so it takes the longer match)
    fn read_and(&mut self, start: usize) -> Option<Token> {
        if self.eat_word("AND")
            || self.eat_symbol("&&")
            || self.eat_symbol("&")
            || self.eat_symbol("^")
            || self.eat_symbol("∧")
        {
            return Some(self.token(TokenType::And, start));
        }
        None
    }

    /// OR operators: `OR`, `||`, `|`, `v`, `∨`
    ///
    /// The single letter `v` carries no word boundary, so it is an OR
    /// operator even when glued to other letters (`vx` lexes as OR
    /// followed by an invalid run).
    fn read_or(&mut self, start: usize) -> Option<Token> {
        if self.eat_word("OR")
            || self.eat_symbol("||")
            || self.eat_symbol("|")
            || self.eat_symbol("v")
            || self.eat_symbol("V")
            || self.eat_symbol("∨")
        {
            return Some(self.token(TokenType::Or, start));
        }
        None
    }

    /// THEN operators: `THEN`, `>`, `->`, `→`
    fn read_then(&mut self, start: usize) -> Option<Token> {
        if self.eat_word("THEN")
            || self.eat_symbol(">")
            || self.eat_symbol("->")
            || self.eat_symbol("→")
        {
            return Some(self.token(TokenType::Then, start));
        }
        None
    }

    /// A variable is a word-bounded maximal run of ASCII letters. A digit
    /// or underscore glued to the run breaks the boundary and demotes the
    /// whole run to the invalid class.
    fn read_variable(&mut self, start: usize) -> Option<Token> {
        if self.pos > 0 && is_word_char(self.chars[self.pos - 1]) {
            return None;
        }

        let mut end = self.pos;
        while end < self.chars.len() && self.chars[end].is_ascii_alphabetic() {
            end += 1;
        }
        if end == self.pos {
            return None;
        }
        if let Some(&next) = self.chars.get(end) {
            if is_word_char(next) {
                return None;
            }
        }

        self.pos = end;
        Some(self.token(TokenType::Variable, start))
    }

    /// Fallback class: consumes the maximal run of non-whitespace
    /// characters starting at the current position.
    fn read_invalid(&mut self, start: usize) -> Token {
        while let Some(&ch) = self.chars.get(self.pos) {
            if ch.is_whitespace() {
                break;
            }
            self.pos += 1;
        }
        self.token(TokenType::Invalid, start)
    }

    /// Consumes `symbol` if the input continues with it at the cursor.
    fn eat_symbol(&mut self, symbol: &str) -> bool {
        let len = symbol.chars().count();
        if self.chars.len() - self.pos < len {
            return false;
        }
        if !symbol.chars().zip(&self.chars[self.pos..]).all(|(a, &b)| a == b) {
            return false;
        }
        self.pos += len;
        true
    }

    /// Consumes `word` case-insensitively if it appears word-bounded at the
    /// cursor. End of input counts as a boundary, so a keyword at the very
    /// end of the formula still matches.
    fn eat_word(&mut self, word: &str) -> bool {
        if self.pos > 0 && is_word_char(self.chars[self.pos - 1]) {
            return false;
        }
        let len = word.chars().count();
        if self.chars.len() - self.pos < len {
            return false;
        }
        if !word
            .chars()
            .zip(&self.chars[self.pos..])
            .all(|(a, &b)| a.eq_ignore_ascii_case(&b))
        {
            return false;
        }
        if let Some(&next) = self.chars.get(self.pos + len) {
            if is_word_char(next) {
                return false;
            }
        }
        self.pos += len;
        true
    }

    /// Builds a token from the scanned range, preserving the original
    /// spelling and case of the input.
    fn token(&self, kind: TokenType, start: usize) -> Token {
        let text: String = self.chars[start..self.pos].iter().collect();
        Token::new(kind, text, (start, self.pos))
    }
}

/// Word characters for boundary checks: letters, digits, underscore.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Turns the input formula into a sequence of classified tokens.
///
/// Total, never fails: unrecognized character runs become `Invalid` tokens
/// for the validator to report. Whitespace separates tokens and emits
/// nothing.
pub fn tokenize(formula: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(formula);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token() {
        tokens.push(token);
    }

    tokens
}
