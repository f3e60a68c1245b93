//! Summary statistics over a record sequence.
//!
//! Every metric is a fold over one numeric field: sum, count, or average.
//! Averages over zero contributing records are defined as 0.0 so the
//! summary panels never see NaN. Values are returned at full precision;
//! display rounding (one decimal in the dashboard) is the caller's concern.

use std::collections::BTreeMap;

use crate::record::{FieldValue, Record};

/// How a metric folds its field across the input records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reducer {
    Sum,
    Count,
    Average,
}

/// One requested metric: a name to report under, a field, and a reducer.
#[derive(Clone, Debug)]
pub struct MetricSpec {
    pub name: String,
    pub field: String,
    pub reducer: Reducer,
}

impl MetricSpec {
    pub fn new(name: impl Into<String>, field: impl Into<String>, reducer: Reducer) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            reducer,
        }
    }
}

/// Metric name to value, in stable (sorted) order for output.
pub type AggregateResult = BTreeMap<String, f64>;

/// Compute every requested metric over the input slice.
///
/// `Count` counts records regardless of field presence. `Sum` and
/// `Average` fold the named numeric field over the records that carry it;
/// records without the field simply don't contribute. Never mutates the
/// input and never fails: the result over an empty slice is 0.0 for every
/// reducer.
pub fn aggregate<R: Record>(records: &[R], specs: &[MetricSpec]) -> AggregateResult {
    let mut result = AggregateResult::new();
    for spec in specs {
        let value = match spec.reducer {
            Reducer::Count => records.len() as f64,
            Reducer::Sum => numeric_values(records, &spec.field).sum(),
            Reducer::Average => {
                let values: Vec<f64> = numeric_values(records, &spec.field).collect();
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
        };
        result.insert(spec.name.clone(), value);
    }
    result
}

fn numeric_values<'a, R: Record>(
    records: &'a [R],
    field: &'a str,
) -> impl Iterator<Item = f64> + 'a {
    records.iter().filter_map(move |r| match r.field(field) {
        Some(FieldValue::Number(n)) => Some(n),
        _ => None,
    })
}
