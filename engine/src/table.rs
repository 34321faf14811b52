//! FILENAME: engine/src/table.rs
//! PURPOSE: Output data structures for truth-table evaluation.
//! CONTEXT: Both containers map canonical expression renderings to boolean
//! results and preserve insertion order, which is what keeps column order
//! stable across the whole table. The display layer iterates keys in that
//! order as columns.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Truth values of every expression under a single variable assignment.
///
/// One row of the table: the assignment entries for each variable plus the
/// computed result of every subexpression. Re-inserting a key overwrites
/// its value but keeps its original position.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruthValues {
    keys: Vec<String>,
    values: FxHashMap<String, bool>,
}

impl TruthValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `key`. First-time keys append to the iteration
    /// order; existing keys update in place.
    pub fn insert(&mut self, key: impl Into<String>, value: bool) {
        let key = key.into();
        if !self.values.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.keys.iter().map(|key| (key.as_str(), self.values[key]))
    }
}

/// Column-oriented truth table: one boolean column per expression, one row
/// per variable assignment.
///
/// Columns appear in first-seen order and all have the same length, `2^n`
/// for `n` distinct variables.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruthTable {
    columns: Vec<String>,
    values: FxHashMap<String, Vec<bool>>,
}

impl TruthTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one value to `key`'s column, creating the column on first
    /// sight of the key.
    pub fn push(&mut self, key: impl Into<String>, value: bool) {
        let key = key.into();
        if let Some(column) = self.values.get_mut(&key) {
            column.push(value);
        } else {
            self.columns.push(key.clone());
            self.values.insert(key, vec![value]);
        }
    }

    /// Column keys in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The values of one column, top row first.
    pub fn column(&self, key: &str) -> Option<&[bool]> {
        self.values.get(key).map(|column| column.as_slice())
    }

    /// Number of assignment rows (0 for an empty table).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |key| self.values[key].len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
