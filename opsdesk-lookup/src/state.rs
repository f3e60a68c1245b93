//! Lookup state as the rendering layer sees it.
//!
//! The UI never reaches into the session internals; it renders snapshots
//! of this enum. `NotFound` is a terminal state with its own empty-state
//! message, not an error.

use serde::{Deserialize, Serialize};

use opsdesk_pipeline::records::customer::CustomerRecord;

/// The one state machine in the system.
///
/// `Idle -> Searching -> { Found, NotFound }`, with any state able to
/// start a new `Searching` transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LookupState {
    /// Nothing submitted yet (or the last submission was blank).
    Idle,
    /// A request is in flight; `query` is the normalized search text.
    Searching { query: String },
    /// The request resolved to exactly one customer.
    Found { customer: CustomerRecord },
    /// The request resolved but matched nothing.
    NotFound { query: String },
}

impl LookupState {
    pub fn is_searching(&self) -> bool {
        matches!(self, LookupState::Searching { .. })
    }

    /// One-line summary for logs and the text UI.
    pub fn describe(&self) -> String {
        match self {
            LookupState::Idle => "idle".into(),
            LookupState::Searching { query } => format!("searching '{}'", query),
            LookupState::Found { customer } => {
                format!("found {} ({})", customer.id, customer.name)
            }
            LookupState::NotFound { query } => format!("no customer matches '{}'", query),
        }
    }
}
