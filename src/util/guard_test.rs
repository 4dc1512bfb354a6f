use super::*;

fn loaded(authenticated: bool) -> AuthState {
    AuthState {
        authenticated,
        username: None,
        loading: false,
    }
}

// =============================================================
// decide
// =============================================================

#[test]
fn pending_while_verification_in_flight() {
    assert_eq!(decide(&AuthState::default()), RouteDecision::Pending);
}

#[test]
fn pending_wins_even_if_authenticated_is_set() {
    // `authenticated` is meaningless until loading finishes; the guard
    // must not jump early in either direction.
    let state = AuthState {
        authenticated: true,
        username: None,
        loading: true,
    };
    assert_eq!(decide(&state), RouteDecision::Pending);
}

#[test]
fn denied_once_loaded_without_a_session() {
    assert_eq!(decide(&loaded(false)), RouteDecision::Denied);
}

#[test]
fn granted_once_loaded_with_a_session() {
    assert_eq!(decide(&loaded(true)), RouteDecision::Granted);
}

#[test]
fn verification_failure_path_ends_denied() {
    let mut state = AuthState::default();
    assert_eq!(decide(&state), RouteDecision::Pending);
    state.apply_verification(None);
    assert_eq!(decide(&state), RouteDecision::Denied);
}

#[test]
fn verification_success_path_ends_granted() {
    use crate::net::types::SessionResponse;

    let mut state = AuthState::default();
    state.apply_verification(Some(SessionResponse {
        authenticated: true,
        username: Some("alice".to_owned()),
    }));
    assert_eq!(decide(&state), RouteDecision::Granted);
}

// =============================================================
// RedirectLatch
// =============================================================

#[test]
fn latch_fires_on_first_denial_only() {
    let mut latch = RedirectLatch::default();
    assert!(latch.arm(RouteDecision::Denied));
    assert!(!latch.arm(RouteDecision::Denied));
    assert!(!latch.arm(RouteDecision::Denied));
}

#[test]
fn latch_ignores_pending_and_granted() {
    let mut latch = RedirectLatch::default();
    assert!(!latch.arm(RouteDecision::Pending));
    assert!(!latch.arm(RouteDecision::Granted));
    // Still armed for the first real denial.
    assert!(latch.arm(RouteDecision::Denied));
}

#[test]
fn latch_stays_spent_after_a_later_grant() {
    // Sign-in happening elsewhere must not re-arm an already fired latch.
    let mut latch = RedirectLatch::default();
    assert!(latch.arm(RouteDecision::Denied));
    assert!(!latch.arm(RouteDecision::Granted));
    assert!(!latch.arm(RouteDecision::Denied));
}

#[test]
fn each_mount_gets_an_independent_latch() {
    let mut first = RedirectLatch::default();
    assert!(first.arm(RouteDecision::Denied));

    // A remounted guard constructs a new latch and may navigate again.
    let mut second = RedirectLatch::default();
    assert!(second.arm(RouteDecision::Denied));
}
