//! FILENAME: engine/src/evaluator.rs
//! PURPOSE: Evaluates expression trees and enumerates truth tables.
//! CONTEXT: Final stage of the pipeline. A recursive post-order walk
//! computes the truth value of every node under one assignment, and the
//! enumerator drives that walk over all 2^n assignments of the formula's
//! variables, aggregating the per-row results column-wise.

use crate::table::{TruthTable, TruthValues};
use log::{debug, warn};
use parser::ast::Expression;
use parser::token::{Token, TokenType};

/// Past this many distinct variables the table stops being practical to
/// render (2^16 = 65,536 rows). Enumeration itself is not capped; any hard
/// limit belongs to the caller.
const LARGE_FORMULA_VARIABLES: usize = 16;

/// Recursive interpreter for one assignment of truth values.
///
/// Walks the expression tree bottom-up and records the result of every
/// unary and binary node under its canonical rendering; variable values
/// pass through unchanged from the input assignment.
#[derive(Debug, Default)]
pub struct Evaluator {
    values: TruthValues,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates `tree` under `values` and returns the extended set of
    /// truth values covering every subexpression reachable from the root.
    pub fn evaluate(&mut self, tree: &Expression, values: &TruthValues) -> TruthValues {
        self.values = values.clone();
        self.eval(tree);
        std::mem::take(&mut self.values)
    }

    fn eval(&mut self, expr: &Expression) -> bool {
        match expr {
            Expression::Variable { name } => self.eval_variable(name),
            Expression::UnaryOp { operator, operand } => self.eval_unary(expr, operator, operand),
            Expression::BinaryOp {
                left,
                operator,
                right,
            } => self.eval_binary(expr, left, operator, right),
        }
    }

    /// A variable missing from the assignment evaluates to false rather
    /// than failing; the enumerator always supplies complete assignments.
    fn eval_variable(&self, name: &Token) -> bool {
        self.values.get(&name.text).unwrap_or(false)
    }

    fn eval_unary(&mut self, expr: &Expression, operator: &Token, operand: &Expression) -> bool {
        let mut value = self.eval(operand);
        if operator.kind == TokenType::Not {
            value = !value;
        }
        // Record the result under the node's canonical rendering
        self.values.insert(expr.to_string(), value);
        value
    }

    fn eval_binary(
        &mut self,
        expr: &Expression,
        left: &Expression,
        operator: &Token,
        right: &Expression,
    ) -> bool {
        let (left, right) = (self.eval(left), self.eval(right));
        let value = match operator.kind {
            TokenType::And => left && right,
            TokenType::Or => left || right,
            // Material implication: true unless left holds and right fails
            TokenType::Then => !left || right,
            // Unreachable from the parser; evaluation stays total
            _ => false,
        };
        self.values.insert(expr.to_string(), value);
        value
    }
}

/// Variable names in order of first occurrence in the token stream.
///
/// Occurrences after the first are dropped, so a repeated name maps to a
/// single slot: `"P AND P"` enumerates two rows, not four.
pub fn extract_variables(tokens: &[Token]) -> Vec<String> {
    let mut variables: Vec<String> = Vec::new();

    for token in tokens {
        if token.kind == TokenType::Variable && !variables.iter().any(|name| name == &token.text) {
            variables.push(token.text.clone());
        }
    }

    variables
}

/// Generates every truth-value combination for the given variables.
///
/// Row `i` assigns each variable the inverted bit of `i` at its slot
/// position, so the row where every variable is true comes first and the
/// all-false row comes last, matching conventional presentation order.
pub fn enumerate_assignments(variables: &[String]) -> Vec<TruthValues> {
    let count = variables.len();
    let mut products = Vec::with_capacity(1 << count);

    for binary in 0..(1usize << count) {
        let mut row = TruthValues::new();
        for (bit, variable) in variables.iter().enumerate() {
            row.insert(variable.clone(), (binary >> bit) & 1 == 0);
        }
        products.push(row);
    }

    products
}

/// Builds the complete truth table for a parsed formula.
///
/// Variable slots come from the token stream (first occurrence order,
/// deduplicated), every combination of truth values is enumerated, and the
/// value of every subexpression is aggregated column-wise. Never fails.
/// The cost is exponential in the number of distinct variables and is not
/// capped here; callers wanting a bound must impose it before evaluating.
pub fn evaluate(tokens: &[Token], tree: &Expression) -> TruthTable {
    let variables = extract_variables(tokens);
    if variables.len() > LARGE_FORMULA_VARIABLES {
        warn!(
            "formula has {} distinct variables; enumerating 2^{} rows",
            variables.len(),
            variables.len()
        );
    }
    debug!("evaluating {} over {:?}", tree, variables);

    let mut table = TruthTable::new();
    let mut evaluator = Evaluator::new();

    for truth_values in enumerate_assignments(&variables) {
        let values = evaluator.evaluate(tree, &truth_values);
        for (key, value) in values.iter() {
            table.push(key, value);
        }
    }

    table
}
