use super::StatusState;
use crate::domain::models::StatusSnapshot;

fn snapshot() -> StatusSnapshot {
    return StatusSnapshot {
        backend: "healthy".to_string(),
        database: "not_configured".to_string(),
        llm: "error".to_string(),
    };
}

#[test]
fn it_rejects_overlapping_checks() {
    let mut state = StatusState::default();

    assert!(state.begin_check());
    assert!(!state.begin_check());

    state.check_succeeded(snapshot());
    assert!(state.begin_check());
}

#[test]
fn it_replaces_snapshot_and_clears_error() {
    let mut state = StatusState::default();
    state.begin_check();
    state.check_failed("Failed to fetch status");
    state.begin_check();
    state.check_succeeded(snapshot());

    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.snapshot, Some(snapshot()));
    assert!(state.last_checked.is_some());
}

#[test]
fn it_clears_snapshot_on_failure() {
    let mut state = StatusState::default();
    state.begin_check();
    state.check_succeeded(snapshot());
    state.begin_check();
    state.check_failed("Failed to connect to backend: connection refused");

    assert!(!state.loading);
    assert_eq!(state.snapshot, None);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to connect to backend: connection refused")
    );
}
