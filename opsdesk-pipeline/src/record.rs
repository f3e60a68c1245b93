//! The record abstraction the whole pipeline is written against.
//!
//! A record is one domain entity (customer, help article, chat template,
//! churn row) exposed as a field mapping. The pipeline never knows the
//! concrete struct behind it, only ids, categories, and named fields.

/// A single field value, borrowed from the record.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Tags(&'a [String]),
}

/// One domain entity exposed as a field mapping.
///
/// `id` must be unique within a store. `category` is the exact-match
/// discriminant used by the category dropdowns. `search_fields` lists the
/// fields the text search scans, in order.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;

    fn category(&self) -> &str;

    /// Look up a field by name. Unknown names return `None`.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Ordered list of field names the text search scans.
    fn search_fields() -> &'static [&'static str];
}

/// Immutable, ordered, in-memory record sequence.
///
/// Loaded wholesale and replaced wholesale on refresh; records are never
/// mutated in place. Construction rejects duplicate ids.
#[derive(Clone, Debug)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    /// Build a store, validating id uniqueness.
    pub fn new(records: Vec<R>) -> Result<Self, String> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.id().to_string()) {
                return Err(format!("duplicate record id '{}'", record.id()));
            }
        }
        Ok(Self { records })
    }

    /// Swap in a fresh dataset. The old sequence is dropped wholesale.
    pub fn replace(&mut self, records: Vec<R>) -> Result<(), String> {
        *self = Self::new(records)?;
        Ok(())
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::template::template_fixtures;

    #[test]
    fn store_rejects_duplicate_ids() {
        let mut records = template_fixtures();
        let dup = records[0].clone();
        records.push(dup);
        let err = RecordStore::new(records).unwrap_err();
        assert!(err.contains("duplicate record id '1'"), "got: {}", err);
    }

    #[test]
    fn store_preserves_insertion_order() {
        let store = RecordStore::new(template_fixtures()).unwrap();
        let ids: Vec<&str> = store.records().iter().map(|r| r.id()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn replace_swaps_the_whole_sequence() {
        let mut store = RecordStore::new(template_fixtures()).unwrap();
        let shorter = template_fixtures().into_iter().take(2).collect();
        store.replace(shorter).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.get("3").is_none());
    }
}
