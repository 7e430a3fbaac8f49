use std::str::FromStr;

use miette::{IntoDiagnostic, Result, miette};

use rowboat::{Dataset, Field, Operator, Value, sample};

/// Builds a seeded sample dataset, runs the `(start <op> end) / netPay`
/// projection-and-combination chain over it, and prints a summary of
/// the result.
///
/// Usage: `rowboat [rows] [operator]`, defaulting to 1000 rows and `+`.
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let count: usize = match args.next() {
        Some(raw) => raw.parse().into_diagnostic()?,
        None => 1_000,
    };
    let op = match args.next() {
        Some(raw) => Operator::from_str(&raw).map_err(|_| miette!("unknown operator: {raw}"))?,
        None => Operator::Add,
    };

    let mut rng = fastrand::Rng::with_seed(0);
    let dataset = sample::shift_rows(&mut rng, count);

    let start = Field::new("start");
    let end = Field::new("end");
    let net_pay = Field::new("netPay");

    let result = dataset
        .project(&start)
        .combine(&dataset.project(&end), op)
        .divide(&dataset.project(&net_pay));

    report(&result);
    Ok(())
}

/// Reads the dataset back and prints row, cell and NA counts along with
/// the sum over numeric cells.
fn report(dataset: &Dataset) {
    let mut cells = 0usize;
    let mut missing = 0usize;
    let mut sum = 0.0f64;

    for row in dataset {
        for (_, value) in row.fields() {
            cells += 1;
            match value {
                Value::Integer(i) => sum += *i as f64,
                Value::Decimal(d) => sum += *d,
                Value::Na => missing += 1,
                Value::Text(_) => {}
            }
        }
    }

    println!("{} rows, {} cells, {} NA", dataset.len(), cells, missing);
    println!("Numeric sum: {sum}");
}
