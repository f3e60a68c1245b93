//! Lookup error types.
//!
//! Only directory construction can fail. A query that matches nothing is
//! the `NotFound` state, never an error, and empty queries are silently
//! ignored rather than rejected with an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Duplicate customer id: {0}")]
    DuplicateCustomer(String),
}

/// Result type alias for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;
