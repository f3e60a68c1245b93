//! Composite query engine: category gate, then text match.
//!
//! Both checks must pass (logical AND). The category check runs first since
//! an equality test is cheaper than lowercasing every search field. The
//! input order is preserved; the input is never mutated; an empty result is
//! a valid result, not an error.

use crate::filter::{CategoryFilter, FilterResult, RecordFilter, SearchFilter};
use crate::matcher;
use crate::record::Record;
use crate::source::RecordProvider;
use crate::types::DeskQuery;

/// Pure, synchronous query evaluation over a record slice.
///
/// Returns a new sequence containing the records that pass both the
/// category filter and the predicate matcher, in their original relative
/// order.
pub fn run_query<R: Record>(records: &[R], query: &DeskQuery) -> Vec<R> {
    records
        .iter()
        .filter(|r| crate::filter::in_category(*r, &query.category))
        .filter(|r| matcher::matches(*r, &query.search_text, R::search_fields()))
        .cloned()
        .collect()
}

/// Everything the engine saw and decided for one query execution.
pub struct QueryOutcome<R> {
    /// Records fetched from the provider, pre-filtering.
    pub retrieved: Vec<R>,
    /// Records that passed every filter stage, in original order.
    pub kept: Vec<R>,
    /// Records removed by any filter stage.
    pub removed: Vec<R>,
}

/// Staged query pipeline: provider fetch, then ordered filter stages.
///
/// The staged form exists for callers that want per-stage visibility and a
/// swappable backend; `run_query` is the pure fast path over a slice.
pub struct QueryEngine<R: Record> {
    provider: Box<dyn RecordProvider<R>>,
    filters: Vec<Box<dyn RecordFilter<R>>>,
}

impl<R: Record> QueryEngine<R> {
    /// Engine with the standard stage order: category gate, then search.
    pub fn new(provider: Box<dyn RecordProvider<R>>) -> Self {
        Self {
            provider,
            filters: vec![Box::new(CategoryFilter), Box::new(SearchFilter)],
        }
    }

    /// Engine with a custom filter chain.
    pub fn with_filters(
        provider: Box<dyn RecordProvider<R>>,
        filters: Vec<Box<dyn RecordFilter<R>>>,
    ) -> Self {
        Self { provider, filters }
    }

    /// Fetch candidates and run every enabled filter stage in order.
    pub async fn execute(&self, query: &DeskQuery) -> Result<QueryOutcome<R>, String> {
        let retrieved = if self.provider.enable(query) {
            self.provider.fetch(query).await?
        } else {
            Vec::new()
        };
        log::debug!(
            "{} fetched {} records",
            self.provider.name(),
            retrieved.len()
        );

        let mut kept = retrieved.clone();
        let mut removed = Vec::new();
        for filter in &self.filters {
            if !filter.enable(query) {
                continue;
            }
            let FilterResult {
                kept: surviving,
                removed: dropped,
            } = filter.filter(query, kept);
            log::debug!("{} removed {} records", filter.name(), dropped.len());
            kept = surviving;
            removed.extend(dropped);
        }

        Ok(QueryOutcome {
            retrieved,
            kept,
            removed,
        })
    }
}
