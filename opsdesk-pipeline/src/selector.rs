//! Top-N selection for the "most used" dashboard panels.
//!
//! Selectors run after filtering: they rank the surviving records by a
//! numeric score and truncate to the panel size.

use crate::record::{FieldValue, Record};
use crate::types::DeskQuery;
use crate::util;

/// Selectors sort and truncate a record list for "top N" panels.
pub trait RecordSelector<R: Record>: Send + Sync {
    /// Default selection: sort descending, then truncate if sized.
    fn select(&self, _query: &DeskQuery, records: Vec<R>) -> Vec<R> {
        let mut sorted = self.sort(records);
        if let Some(limit) = self.size() {
            sorted.truncate(limit);
        }
        sorted
    }

    /// Extract the score used for sorting.
    fn score(&self, record: &R) -> f64;

    /// Sort records by score, descending.
    ///
    /// NaN scores are pushed to the end of the list so they never appear
    /// as top records. Missing numeric fields would otherwise float
    /// garbage to the top of the panel.
    fn sort(&self, records: Vec<R>) -> Vec<R> {
        let mut sorted = records;
        sorted.sort_by(|a, b| {
            let sa = self.score(a);
            let sb = self.score(b);
            match (sa.is_nan(), sb.is_nan()) {
                (true, true) => std::cmp::Ordering::Equal,
                (true, false) => std::cmp::Ordering::Greater,
                (false, true) => std::cmp::Ordering::Less,
                (false, false) => sb.partial_cmp(&sa).unwrap_or(std::cmp::Ordering::Equal),
            }
        });
        sorted
    }

    /// Optional maximum number of records to select.
    fn size(&self) -> Option<usize> {
        None
    }

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}

/// Top-N by a numeric field, e.g. template usage or article views.
///
/// Records missing the field score negative infinity and sink to the end.
pub struct TopUsageSelector {
    pub field: &'static str,
    pub k: usize,
}

impl TopUsageSelector {
    pub fn new(field: &'static str, k: usize) -> Self {
        Self { field, k }
    }
}

impl<R: Record> RecordSelector<R> for TopUsageSelector {
    fn score(&self, record: &R) -> f64 {
        match record.field(self.field) {
            Some(FieldValue::Number(n)) => n,
            _ => f64::NEG_INFINITY,
        }
    }

    fn size(&self) -> Option<usize> {
        Some(self.k)
    }
}
