use std::collections::BTreeMap;

use crate::{core::value::Value, data::field::Field};

/// A single row: a name-keyed collection of values.
///
/// Rows are immutable after construction and enforce no schema; two
/// rows in the same dataset may carry entirely different fields. Fields
/// iterate in lexicographic name order, which is the order dataset
/// combination relies on when output names collide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: BTreeMap<String, Value>,
}

impl Row {
    /// Creates a row with no fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a row from `(name, value)` pairs.
    ///
    /// A repeated name keeps the last value given for it.
    pub fn from_pairs<N, I>(pairs: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect()
    }

    /// Gets the value stored under `field`, if the row contains it.
    ///
    /// A missing field is not an error.
    pub fn get(&self, field: &Field) -> Option<&Value> {
        self.values.get(field.name())
    }

    /// Whether the row contains `field`.
    pub fn contains(&self, field: &Field) -> bool {
        self.values.contains_key(field.name())
    }

    /// Narrows the row to `field` alone.
    ///
    /// Returns a singleton row if the field is present, otherwise an
    /// empty row.
    pub fn project(&self, field: &Field) -> Row {
        match self.get(field) {
            Some(value) => Row::from_pairs([(field.name(), value.clone())]),
            None => Row::empty(),
        }
    }

    /// Iterates `(name, value)` pairs in lexicographic name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_present_field() {
        let row = Row::from_pairs([("start", Value::Integer(10))]);
        assert_eq!(row.get(&Field::new("start")), Some(&Value::Integer(10)));
    }

    #[test]
    fn test_get_absent_field() {
        let row = Row::from_pairs([("start", Value::Integer(10))]);
        assert_eq!(row.get(&Field::new("end")), None);
    }

    #[test]
    fn test_project_present_field() {
        let row = Row::from_pairs([
            ("start", Value::Integer(10)),
            ("end", Value::Integer(20)),
        ]);

        let projected = row.project(&Field::new("end"));
        assert_eq!(projected.len(), 1);
        assert_eq!(projected.get(&Field::new("end")), Some(&Value::Integer(20)));
    }

    #[test]
    fn test_project_absent_field_is_empty() {
        let row = Row::from_pairs([("start", Value::Integer(10))]);
        assert!(row.project(&Field::new("netPay")).is_empty());
    }

    #[test]
    fn test_duplicate_name_keeps_last() {
        let row = Row::from_pairs([
            ("start", Value::Integer(1)),
            ("start", Value::Integer(2)),
        ]);

        assert_eq!(row.len(), 1);
        assert_eq!(row.get(&Field::new("start")), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_fields_iterate_in_name_order() {
        let row = Row::from_pairs([
            ("netPay", Value::Integer(100)),
            ("end", Value::Integer(20)),
            ("start", Value::Integer(10)),
        ]);

        let names: Vec<&str> = row.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["end", "netPay", "start"]);
    }
}
