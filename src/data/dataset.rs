use crate::{
    core::{arith::combine_values, operator::Operator},
    data::{field::Field, row::Row},
};

/// An ordered sequence of rows.
///
/// Order is meaningful: it defines row alignment for binary operations
/// and iteration order for consumers. No common field set is tracked or
/// enforced across rows.
///
/// Datasets are immutable after construction. Every operation reads its
/// inputs and returns a freshly built dataset, so shared references can
/// be used from multiple threads without locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Creates a dataset from a vector of rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// The rows in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterates rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Narrows every row to `field`.
    ///
    /// Preserves row order and count: a dataset of size N always yields
    /// a dataset of size N, with an empty row wherever the field is
    /// absent.
    pub fn project(&self, field: &Field) -> Dataset {
        self.rows.iter().map(|row| row.project(field)).collect()
    }

    /// Combines two datasets row by row under `op`.
    ///
    /// Rows are paired positionally, as a zip: the result has
    /// `min(n, m)` rows and trailing rows on the longer side are
    /// dropped. For each aligned pair, every left field is combined
    /// with every right field. The output name interpolates both source
    /// names around the operator symbol ("start + netPay"), and the
    /// output value follows the coercion rules, with any undefined
    /// pairing contained as `Value::Na`.
    ///
    /// Field pairs are visited in lexicographic name order, left outer
    /// and right inner. If two pairs produce the same output name the
    /// later one wins; this is a documented consequence of the
    /// name-keyed output row, not an error.
    ///
    /// Each row pair costs O(a * b) in their field counts; the
    /// cross-product semantics make this quadratic behavior inherent.
    pub fn combine(&self, that: &Dataset, op: Operator) -> Dataset {
        self.rows
            .iter()
            .zip(that.rows.iter())
            .map(|(left, right)| combine_rows(left, right, op))
            .collect()
    }

    /// [`Dataset::combine`] under [`Operator::Add`].
    pub fn plus(&self, that: &Dataset) -> Dataset {
        self.combine(that, Operator::Add)
    }

    /// [`Dataset::combine`] under [`Operator::Subtract`].
    pub fn minus(&self, that: &Dataset) -> Dataset {
        self.combine(that, Operator::Subtract)
    }

    /// [`Dataset::combine`] under [`Operator::Multiply`].
    pub fn times(&self, that: &Dataset) -> Dataset {
        self.combine(that, Operator::Multiply)
    }

    /// [`Dataset::combine`] under [`Operator::Divide`].
    pub fn divide(&self, that: &Dataset) -> Dataset {
        self.combine(that, Operator::Divide)
    }
}

/// Cross-combines the fields of two aligned rows into a new row.
fn combine_rows(left: &Row, right: &Row, op: Operator) -> Row {
    left.fields()
        .flat_map(|(left_name, left_value)| {
            right.fields().map(move |(right_name, right_value)| {
                (
                    format!("{left_name} {op} {right_name}"),
                    combine_values(op, left_value, right_value),
                )
            })
        })
        .collect()
}

impl FromIterator<Row> for Dataset {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
