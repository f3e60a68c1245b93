use async_trait::async_trait;

use crate::record::{Record, RecordStore};
use crate::types::DeskQuery;
use crate::util;

/// The abstract record-provider boundary.
///
/// Fixture data sits behind this seam today; a real backend can replace it
/// without touching the filter or aggregate logic. Fetching is the one
/// operation allowed to suspend.
#[async_trait]
pub trait RecordProvider<R>: Send + Sync
where
    R: Record,
{
    /// Decide if this provider should run for the given query.
    fn enable(&self, _query: &DeskQuery) -> bool {
        true
    }

    /// Fetch the full candidate sequence for the given query.
    async fn fetch(&self, query: &DeskQuery) -> Result<Vec<R>, String>;

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}

/// Provider backed by an in-memory fixture store.
pub struct FixtureProvider<R: Record> {
    store: RecordStore<R>,
}

impl<R: Record> FixtureProvider<R> {
    pub fn new(store: RecordStore<R>) -> Self {
        Self { store }
    }

    /// Build directly from a record sequence, validating id uniqueness.
    pub fn from_records(records: Vec<R>) -> Result<Self, String> {
        Ok(Self::new(RecordStore::new(records)?))
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }
}

#[async_trait]
impl<R: Record> RecordProvider<R> for FixtureProvider<R> {
    fn enable(&self, _query: &DeskQuery) -> bool {
        !self.store.is_empty()
    }

    async fn fetch(&self, _query: &DeskQuery) -> Result<Vec<R>, String> {
        // The store is the source of truth; filtering happens downstream.
        Ok(self.store.records().to_vec())
    }
}
