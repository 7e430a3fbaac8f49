pub(crate) mod common;
pub(crate) mod core;
pub(crate) mod data;
pub mod sample;

pub use crate::common::error::EngineError;
pub use crate::core::arith::{
    combine_values, values_add, values_divide, values_multiply, values_subtract,
};
pub use crate::core::{operator::Operator, value::Value};
pub use crate::data::{dataset::Dataset, field::Field, row::Row};
