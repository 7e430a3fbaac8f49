/// A single cell's typed content.
///
/// Values are immutable once constructed. Each variant can be compared
/// and cloned freely; none carries a reference to shared state.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),

    /// A 64-bit floating point number.
    Decimal(f64),

    /// A UTF-8 text string.
    Text(String),

    /// Absence of data or a failed computation.
    ///
    /// Distinct from a missing field: a row may lack a field entirely,
    /// while `Na` is present but carries nothing.
    Na,
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Text(s) => write!(f, "{}", s),
            Value::Na => write!(f, "NA"),
        }
    }
}

impl Value {
    /// The kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Decimal(_) => "Decimal",
            Value::Text(_) => "Text",
            Value::Na => "NA",
        }
    }

    /// Whether this value is the `NA` marker.
    pub fn is_na(&self) -> bool {
        matches!(self, Value::Na)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
