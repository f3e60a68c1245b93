use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use opsdesk_lookup::{Directory, LookupSession, LookupState};
use opsdesk_pipeline::records::customer::customer_fixtures;

fn session(latency_ms: u64) -> Arc<LookupSession> {
    let directory = Directory::new(customer_fixtures()).unwrap();
    Arc::new(LookupSession::with_latency(
        directory,
        Duration::from_millis(latency_ms),
    ))
}

#[tokio::test]
async fn full_lookup_transitions_idle_searching_found() {
    let session = session(60);
    assert!(matches!(session.state(), LookupState::Idle));

    let task = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.search("CUST-001").await })
    };

    // Mid-flight the session must report Searching.
    sleep(Duration::from_millis(20)).await;
    assert!(session.state().is_searching(), "expected in-flight state");

    let resolved = task.await.unwrap();
    match resolved {
        LookupState::Found { customer } => assert_eq!(customer.id, "CUST-001"),
        other => panic!("unexpected state: {:?}", other),
    }
    assert!(matches!(session.state(), LookupState::Found { .. }));
}

#[tokio::test]
async fn whitespace_query_stays_idle() {
    let session = session(10);
    let state = session.search("   ").await;
    assert!(matches!(state, LookupState::Idle));
    assert!(matches!(session.state(), LookupState::Idle));
}

#[tokio::test]
async fn miss_lands_in_not_found_with_the_query() {
    let session = session(10);
    match session.search("CUST-404").await {
        LookupState::NotFound { query } => assert_eq!(query, "CUST-404"),
        other => panic!("unexpected state: {:?}", other),
    }
}

#[tokio::test]
async fn newer_search_supersedes_the_pending_one() {
    let session = session(60);

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.search("CUST-001").await })
    };

    // Submit a second search while the first is still in flight.
    sleep(Duration::from_millis(20)).await;
    assert!(session.state().is_searching());
    let second = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.search("CUST-002").await })
    };

    let first_result = first.await.unwrap();
    let second_result = second.await.unwrap();

    // The first request's resolution was discarded: it must not report
    // CUST-001 as found.
    if let LookupState::Found { customer } = &first_result {
        assert_ne!(customer.id, "CUST-001", "stale result was applied");
    }

    // Only the second request's result is observable.
    match second_result {
        LookupState::Found { customer } => assert_eq!(customer.id, "CUST-002"),
        other => panic!("unexpected state: {:?}", other),
    }
    match session.state() {
        LookupState::Found { customer } => assert_eq!(customer.id, "CUST-002"),
        other => panic!("unexpected final state: {:?}", other),
    }
}

#[tokio::test]
async fn racing_submissions_never_commit_a_superseded_result() {
    // Repeatedly submit a second search while the first is observably in
    // flight. The superseded search must never resolve to its own Found,
    // and the session must always end on the last submission's result.
    for _ in 0..200 {
        let session = session(20);

        let first = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.search("CUST-001").await })
        };
        while !session.state().is_searching() {
            tokio::task::yield_now().await;
        }
        let second = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.search("CUST-002").await })
        };

        let first_result = first.await.unwrap();
        let second_result = second.await.unwrap();

        if let LookupState::Found { customer } = &first_result {
            assert_ne!(customer.id, "CUST-001", "superseded search committed");
        }
        match second_result {
            LookupState::Found { customer } => assert_eq!(customer.id, "CUST-002"),
            other => panic!("unexpected state: {:?}", other),
        }
        match session.state() {
            LookupState::Found { customer } => assert_eq!(customer.id, "CUST-002"),
            other => panic!("unexpected final state: {:?}", other),
        }
    }
}

#[tokio::test]
async fn found_then_new_search_restarts_the_machine() {
    let session = session(10);
    let _ = session.search("CUST-001").await;
    assert!(matches!(session.state(), LookupState::Found { .. }));

    // A terminal state accepts a fresh search.
    match session.search("CUST-003").await {
        LookupState::Found { customer } => assert_eq!(customer.id, "CUST-003"),
        other => panic!("unexpected state: {:?}", other),
    }
}
