use crate::{
    common::error::EngineError,
    core::{operator::Operator, value::Value},
};

/// Applies `op` to two values, containing any failure as [`Value::Na`].
///
/// This is the engine's failure boundary: a single pairing may be
/// undefined (kind mismatch, integer division by zero), but the caller
/// always receives a value, never an error.
pub fn combine_values(op: Operator, left: &Value, right: &Value) -> Value {
    let result = match op {
        Operator::Add => values_add(left, right),
        Operator::Subtract => values_subtract(left, right),
        Operator::Multiply => values_multiply(left, right),
        Operator::Divide => values_divide(left, right),
    };

    result.unwrap_or(Value::Na)
}

pub fn values_add(left: &Value, right: &Value) -> Result<Value, EngineError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a + b)),
        (Value::Decimal(a), Value::Decimal(b)) => Ok(Value::Decimal(a + b)),
        (Value::Integer(a), Value::Decimal(b)) => Ok(Value::Decimal(*a as f64 + *b)),
        (Value::Decimal(a), Value::Integer(b)) => Ok(Value::Decimal(*a + *b as f64)),
        (Value::Na, _) | (_, Value::Na) => Ok(Value::Na),
        _ => Err(unsupported(Operator::Add, left, right)),
    }
}

pub fn values_subtract(left: &Value, right: &Value) -> Result<Value, EngineError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a - b)),
        (Value::Decimal(a), Value::Decimal(b)) => Ok(Value::Decimal(a - b)),
        (Value::Integer(a), Value::Decimal(b)) => Ok(Value::Decimal(*a as f64 - *b)),
        (Value::Decimal(a), Value::Integer(b)) => Ok(Value::Decimal(*a - *b as f64)),
        (Value::Na, _) | (_, Value::Na) => Ok(Value::Na),
        _ => Err(unsupported(Operator::Subtract, left, right)),
    }
}

pub fn values_multiply(left: &Value, right: &Value) -> Result<Value, EngineError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a * b)),
        (Value::Decimal(a), Value::Decimal(b)) => Ok(Value::Decimal(a * b)),
        (Value::Integer(a), Value::Decimal(b)) => Ok(Value::Decimal(*a as f64 * *b)),
        (Value::Decimal(a), Value::Integer(b)) => Ok(Value::Decimal(*a * *b as f64)),
        (Value::Na, _) | (_, Value::Na) => Ok(Value::Na),
        _ => Err(unsupported(Operator::Multiply, left, right)),
    }
}

/// Divides two values.
///
/// An integer quotient with a zero divisor is an error, contained by
/// [`combine_values`]. Decimal division keeps IEEE 754 semantics and
/// yields infinity or NaN instead of failing.
pub fn values_divide(left: &Value, right: &Value) -> Result<Value, EngineError> {
    match (left, right) {
        // checked_div: a zero divisor (or i64::MIN / -1) has no defined quotient
        (Value::Integer(a), Value::Integer(b)) => a
            .checked_div(*b)
            .map(Value::Integer)
            .ok_or(EngineError::DivisionByZero),
        (Value::Decimal(a), Value::Decimal(b)) => Ok(Value::Decimal(a / b)),
        (Value::Integer(a), Value::Decimal(b)) => Ok(Value::Decimal(*a as f64 / *b)),
        (Value::Decimal(a), Value::Integer(b)) => Ok(Value::Decimal(*a / *b as f64)),
        (Value::Na, _) | (_, Value::Na) => Ok(Value::Na),
        _ => Err(unsupported(Operator::Divide, left, right)),
    }
}

fn unsupported(op: Operator, left: &Value, right: &Value) -> EngineError {
    EngineError::UnsupportedOperands {
        op,
        left: left.kind(),
        right: right.kind(),
    }
}
