//! Query, filter, and aggregation core for the opsdesk dashboard.
//!
//! Every screen in the dashboard (customer lookup, help center, chat
//! templates, analytics) is the same shape: an immutable record sequence,
//! a search-text + category query, and a handful of summary numbers. This
//! crate is that shape, written once:
//!
//! - records are field mappings behind the `Record` trait
//! - query evaluation is a pure function of (store, query)
//! - filtering never mutates or reorders the source sequence
//! - aggregation is total: it always returns a number, never an error
//!
//! The rendering layer consumes plain `Vec<R>` and metric maps; nothing
//! here knows about the UI.

pub mod aggregate;
pub mod engine;
pub mod filter;
pub mod matcher;
pub mod record;
pub mod records;
pub mod selector;
pub mod source;
pub mod types;
pub mod util;

pub use aggregate::{aggregate, AggregateResult, MetricSpec, Reducer};
pub use engine::{run_query, QueryEngine, QueryOutcome};
pub use filter::{CategoryFilter, FilterResult, RecordFilter, SearchFilter};
pub use record::{FieldValue, Record, RecordStore};
pub use source::{FixtureProvider, RecordProvider};
pub use types::{DeskQuery, CATEGORY_ALL};
