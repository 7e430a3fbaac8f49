use miette::Diagnostic;
use thiserror::Error;

use crate::core::operator::Operator;

/// Failures that can occur while combining two values.
///
/// These never escape a dataset operation: `combine_values` converts
/// them into `Value::Na` for the affected output cell, so `project` and
/// `combine` always terminate with a result.
#[derive(Debug, Error, Diagnostic)]
pub enum EngineError {
    /// The operand kinds are not covered by the coercion table.
    #[error("cannot apply {op} to {left} and {right}")]
    UnsupportedOperands {
        op: Operator,
        left: &'static str,
        right: &'static str,
    },

    /// The integer quotient is undefined for this divisor.
    #[error("integer division by zero")]
    DivisionByZero,
}
