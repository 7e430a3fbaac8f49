pub mod dataset;
pub mod field;
pub mod row;
