//! Customer directory and the async lookup session.
//!
//! The session simulates a backend lookup: a submitted query sits in
//! `Searching` for a fixed latency, then resolves to `Found` or
//! `NotFound`. Submitting again while a request is in flight supersedes
//! it: each submission bumps a generation counter, and a resolution whose
//! generation is no longer current is discarded instead of applied. No
//! queuing, no retries; failures are not modeled.

use std::sync::Mutex;
use std::time::Duration;

use opsdesk_pipeline::records::customer::CustomerRecord;

use crate::error::{LookupError, LookupResult};
use crate::state::LookupState;

/// Simulated backend latency, matching the original mock's delay.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// In-memory customer directory with exact-match lookup.
pub struct Directory {
    customers: Vec<CustomerRecord>,
}

impl Directory {
    /// Build a directory, rejecting duplicate customer ids.
    pub fn new(customers: Vec<CustomerRecord>) -> LookupResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for customer in &customers {
            if !seen.insert(customer.id.to_lowercase()) {
                return Err(LookupError::DuplicateCustomer(customer.id.clone()));
            }
        }
        Ok(Self { customers })
    }

    /// Case-insensitive exact match on customer id, email, or phone;
    /// the three identifiers the lookup screen accepts.
    pub fn find(&self, query: &str) -> Option<&CustomerRecord> {
        let needle = query.to_lowercase();
        self.customers.iter().find(|c| {
            c.id.to_lowercase() == needle
                || c.email.to_lowercase() == needle
                || c.phone.to_lowercase() == needle
        })
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

/// One screen's lookup session: current state plus the generation counter
/// that makes the last request win.
pub struct LookupSession {
    directory: Directory,
    latency: Duration,
    inner: Mutex<SessionInner>,
}

/// Generation and state share one lock: a submission's bump-and-`Searching`
/// write and a resolution's compare-and-commit must each be atomic, or a
/// superseded resolution can slip in between them and commit anyway.
struct SessionInner {
    generation: u64,
    state: LookupState,
}

impl LookupSession {
    pub fn new(directory: Directory) -> Self {
        Self::with_latency(directory, DEFAULT_LATENCY)
    }

    pub fn with_latency(directory: Directory, latency: Duration) -> Self {
        Self {
            directory,
            latency,
            inner: Mutex::new(SessionInner {
                generation: 0,
                state: LookupState::Idle,
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LookupState {
        self.lock_inner().state.clone()
    }

    /// Submit a search and await its resolution.
    ///
    /// Blank (empty or whitespace-only) queries are silently ignored: no
    /// transition, the current state is returned unchanged. A non-blank
    /// query moves the session to `Searching`, waits out the simulated
    /// latency, and resolves. If a newer submission arrived meanwhile,
    /// this one's result is discarded and the caller observes whatever
    /// state the session is in by then.
    pub async fn search(&self, raw_query: &str) -> LookupState {
        let query = raw_query.trim();
        if query.is_empty() {
            log::debug!("ignoring blank lookup query");
            return self.state();
        }

        let generation = {
            let mut inner = self.lock_inner();
            inner.generation += 1;
            inner.state = LookupState::Searching {
                query: query.to_string(),
            };
            inner.generation
        };
        log::info!("lookup gen={} searching '{}'", generation, query);

        tokio::time::sleep(self.latency).await;

        let resolved = match self.directory.find(query) {
            Some(customer) => LookupState::Found {
                customer: customer.clone(),
            },
            None => LookupState::NotFound {
                query: query.to_string(),
            },
        };

        // Last request wins: only the newest generation may commit. The
        // compare and the commit happen under the same lock as the bump
        // above, so a newer submission can never interleave between them.
        let mut inner = self.lock_inner();
        if inner.generation == generation {
            inner.state = resolved.clone();
            log::info!("lookup gen={} resolved: {}", generation, resolved.describe());
            resolved
        } else {
            log::debug!(
                "lookup gen={} superseded, discarding: {}",
                generation,
                resolved.describe()
            );
            inner.state.clone()
        }
    }

    fn lock_inner(&self) -> std::sync::MutexGuard<'_, SessionInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("Lookup state lock was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdesk_pipeline::records::customer::customer_fixtures;

    fn directory() -> Directory {
        Directory::new(customer_fixtures()).unwrap()
    }

    #[test]
    fn find_matches_id_email_and_phone() {
        let dir = directory();
        assert_eq!(dir.find("CUST-001").unwrap().name, "John Smith");
        assert_eq!(dir.find("cust-001").unwrap().name, "John Smith");
        assert_eq!(dir.find("sarah.johnson@email.com").unwrap().id, "CUST-002");
        assert_eq!(dir.find("+1 (555) 345-6789").unwrap().id, "CUST-003");
        assert!(dir.find("CUST-999").is_none());
    }

    #[test]
    fn find_requires_exact_match() {
        // Substrings are the query engine's job; the directory is exact.
        assert!(directory().find("CUST").is_none());
        assert!(directory().find("john").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut customers = customer_fixtures();
        let mut dup = customers[0].clone();
        // Uniqueness is case-insensitive, matching the lookup itself.
        dup.id = "cust-001".into();
        customers.push(dup);
        assert!(matches!(
            Directory::new(customers),
            Err(LookupError::DuplicateCustomer(_))
        ));
    }

    #[tokio::test]
    async fn blank_query_leaves_state_unchanged() {
        let session = LookupSession::with_latency(directory(), Duration::from_millis(5));
        let state = session.search("   ").await;
        assert!(matches!(state, LookupState::Idle));
        assert!(matches!(session.state(), LookupState::Idle));
    }

    #[tokio::test]
    async fn known_id_resolves_to_found() {
        let session = LookupSession::with_latency(directory(), Duration::from_millis(5));
        let state = session.search("CUST-001").await;
        match state {
            LookupState::Found { customer } => assert_eq!(customer.id, "CUST-001"),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_id_resolves_to_not_found() {
        let session = LookupSession::with_latency(directory(), Duration::from_millis(5));
        let state = session.search("CUST-404").await;
        assert!(matches!(state, LookupState::NotFound { .. }));
    }
}
