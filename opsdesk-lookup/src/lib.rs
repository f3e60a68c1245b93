//! Customer lookup simulation: the one state machine in opsdesk.
//!
//! `Idle -> Searching -> { Found, NotFound }`. The searching phase is a
//! timed transition standing in for a backend round trip; the directory
//! is fixture data from `opsdesk-pipeline`. The only concurrency rule is
//! last-request-wins: a search submitted while another is in flight
//! supersedes it, and the superseded resolution is discarded when it
//! arrives. Blank queries are ignored without a state change, and a miss
//! is the `NotFound` state rather than an error.

pub mod error;
pub mod session;
pub mod state;

pub use error::{LookupError, LookupResult};
pub use session::{Directory, LookupSession, DEFAULT_LATENCY};
pub use state::LookupState;
