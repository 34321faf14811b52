//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the truth-table engine.
//! CONTEXT: Re-exports the evaluator and table types, and hosts the
//! end-to-end pipeline tests (formula string --> tokens --> tree -->
//! truth table).

pub mod evaluator;
pub mod table;

// Re-export commonly used types at the crate root
pub use evaluator::{Evaluator, enumerate_assignments, evaluate, extract_variables};
pub use table::{TruthTable, TruthValues};
