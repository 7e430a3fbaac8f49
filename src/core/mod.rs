pub mod arith;
pub mod operator;
pub mod value;
