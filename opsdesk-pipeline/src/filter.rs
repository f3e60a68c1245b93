//! Filter stage: partitions records into kept and removed sets.
//!
//! Filters are pure, synchronous computations over in-memory data; they
//! never suspend. The async seam in this crate is the provider boundary,
//! not the filters.

use crate::matcher;
use crate::record::Record;
use crate::types::{DeskQuery, CATEGORY_ALL};
use crate::util;

/// Result of a filter operation, partitioning records into kept and removed.
pub struct FilterResult<R> {
    pub kept: Vec<R>,
    pub removed: Vec<R>,
}

/// Filters run sequentially; each partitions the surviving records.
pub trait RecordFilter<R: Record>: Send + Sync {
    /// Decide if this filter should run for the given query.
    fn enable(&self, _query: &DeskQuery) -> bool {
        true
    }

    /// Partition records into kept (continue to the next stage) and
    /// removed (excluded from the result). Must preserve relative order
    /// within each partition and must not mutate the records.
    fn filter(&self, query: &DeskQuery, records: Vec<R>) -> FilterResult<R>;

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}

/// True if `category` is the `"all"` sentinel or equals the record's
/// category exactly. Case-sensitive, unlike the text search.
pub fn in_category<R: Record>(record: &R, category: &str) -> bool {
    category == CATEGORY_ALL || record.category() == category
}

/// Exact-match filter over the record's category discriminant.
///
/// Runs before the text search since the equality check is cheaper.
pub struct CategoryFilter;

impl<R: Record> RecordFilter<R> for CategoryFilter {
    fn enable(&self, query: &DeskQuery) -> bool {
        query.category != CATEGORY_ALL
    }

    fn filter(&self, query: &DeskQuery, records: Vec<R>) -> FilterResult<R> {
        let (kept, removed): (Vec<_>, Vec<_>) = records
            .into_iter()
            .partition(|r| in_category(r, &query.category));
        FilterResult { kept, removed }
    }
}

/// Substring search filter over the record type's declared search fields.
pub struct SearchFilter;

impl<R: Record> RecordFilter<R> for SearchFilter {
    fn enable(&self, query: &DeskQuery) -> bool {
        !query.search_text.is_empty()
    }

    fn filter(&self, query: &DeskQuery, records: Vec<R>) -> FilterResult<R> {
        let (kept, removed): (Vec<_>, Vec<_>) = records
            .into_iter()
            .partition(|r| matcher::matches(r, &query.search_text, R::search_fields()));
        FilterResult { kept, removed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::template::{template_fixtures, TemplateRecord};

    #[test]
    fn all_sentinel_passes_every_record() {
        for t in template_fixtures() {
            assert!(in_category(&t, CATEGORY_ALL));
        }
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let billing = template_fixtures().into_iter().nth(1).unwrap();
        assert!(in_category(&billing, "billing"));
        assert!(!in_category(&billing, "Billing"));
        assert!(!in_category(&billing, "bill"));
    }

    #[test]
    fn category_filter_keeps_billing_templates_in_order() {
        let filter = CategoryFilter;
        let query = DeskQuery::new("", "billing");
        let FilterResult { kept, removed } =
            RecordFilter::<TemplateRecord>::filter(&filter, &query, template_fixtures());
        let ids: Vec<&str> = kept.iter().map(|t| t.id()).collect();
        assert_eq!(ids, ["2", "5"]);
        assert_eq!(removed.len(), 4);
    }

    #[test]
    fn category_filter_disabled_for_all_sentinel() {
        let filter = CategoryFilter;
        assert!(!RecordFilter::<TemplateRecord>::enable(
            &filter,
            &DeskQuery::unfiltered()
        ));
    }

    #[test]
    fn search_filter_keeps_matching_templates() {
        let filter = SearchFilter;
        let query = DeskQuery::new("payment", CATEGORY_ALL);
        let FilterResult { kept, .. } =
            RecordFilter::<TemplateRecord>::filter(&filter, &query, template_fixtures());
        // "payment" appears only in the payment-failure template
        // (title, content, and tags); no other template carries it.
        assert!(kept.iter().any(|t| t.id() == "5"));
        assert!(kept.iter().all(|t| t.id() != "1"));
    }
}
