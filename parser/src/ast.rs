//! FILENAME: parser/src/ast.rs
//! PURPOSE: Defines the expression tree for propositional-logic formulas.
//! CONTEXT: After the Lexer tokenizes a formula string, the Parser converts
//! those tokens into this tree structure. The Evaluator then traverses the
//! tree to compute the truth value of every node.
//!
//! The Display impl is the canonical rendering of a node: it is both the
//! human-readable form and the node's column key in the truth table, so
//! one serializer covers both purposes.

use crate::token::Token;
use serde::{Deserialize, Serialize};

/// A parsed propositional-logic expression.
///
/// Operator and variable tokens are carried whole so a node renders with
/// the exact spelling the user wrote (`!P` vs `NOT P`). Parenthesized
/// groups collapse to their inner expression during parsing; there is no
/// group variant.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum Expression {
    /// A named variable such as `P`.
    Variable { name: Token },

    /// A prefix operator applied to an operand. Only NOT today.
    UnaryOp {
        operator: Token,
        operand: Box<Expression>,
    },

    /// An infix operator applied to two operands: AND, OR, THEN.
    BinaryOp {
        left: Box<Expression>,
        operator: Token,
        right: Box<Expression>,
    },
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Variable { name } => write!(f, "{}", name),
            Expression::UnaryOp { operator, operand } => {
                // Word operators need a separating space: `NOT P` but `!P`
                let space = if operator.is_word() { " " } else { "" };
                write!(f, "{}{}{}", operator, space, operand)
            }
            Expression::BinaryOp {
                left,
                operator,
                right,
            } => write!(f, "{} {} {}", left, operator, right),
        }
    }
}
