//! Synthetic datasets for demos and tests.
//!
//! Generators take a caller-supplied seeded [`fastrand::Rng`], so runs
//! are reproducible and no process-wide random state exists.

use fastrand::Rng;

use crate::{
    core::value::Value,
    data::{dataset::Dataset, row::Row},
};

/// Generates `count` shift records with integer fields `start`, `end`
/// and `netPay`.
///
/// Shifts start in [0, 360), end no earlier than they start, and pay
/// falls in [20000, 60000).
pub fn shift_rows(rng: &mut Rng, count: usize) -> Dataset {
    (0..count)
        .map(|_| {
            let start = rng.i64(0..360);
            let end = rng.i64(start..360);
            let net_pay = rng.i64(20_000..60_000);

            Row::from_pairs([
                ("start", Value::Integer(start)),
                ("end", Value::Integer(end)),
                ("netPay", Value::Integer(net_pay)),
            ])
        })
        .collect()
}

/// Generates `count` rows mixing all four value kinds.
///
/// Roughly one score in ten is `NA`, to exercise containment paths.
pub fn mixed_rows(rng: &mut Rng, count: usize) -> Dataset {
    (0..count)
        .map(|i| {
            let score = if rng.u32(0..10) == 0 {
                Value::Na
            } else {
                Value::Decimal(rng.f64() * 100.0)
            };

            Row::from_pairs([
                ("id", Value::Integer(i as i64)),
                ("score", score),
                ("label", Value::Text(format!("row-{i}"))),
            ])
        })
        .collect()
}
