use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_starts_unauthenticated_and_loading() {
    let state = AuthState::default();
    assert!(!state.authenticated);
    assert!(state.username.is_none());
    assert!(state.loading);
}

// =============================================================
// Startup session verification
// =============================================================

#[test]
fn verification_success_populates_identity() {
    let mut state = AuthState::default();
    state.apply_verification(Some(SessionResponse {
        authenticated: true,
        username: Some("alice".to_owned()),
    }));
    assert!(state.authenticated);
    assert_eq!(state.username.as_deref(), Some("alice"));
    assert!(!state.loading);
}

#[test]
fn verification_failure_resolves_signed_out() {
    // The caller maps transport errors, non-2xx statuses, and malformed
    // bodies all to `None`; every one of them must land here.
    let mut state = AuthState::default();
    state.apply_verification(None);
    assert!(!state.authenticated);
    assert!(state.username.is_none());
    assert!(!state.loading);
}

#[test]
fn verification_denial_discards_any_username() {
    let mut state = AuthState::default();
    state.apply_verification(Some(SessionResponse {
        authenticated: false,
        username: Some("mallory".to_owned()),
    }));
    assert!(!state.authenticated);
    assert!(state.username.is_none());
    assert!(!state.loading);
}

#[test]
fn verification_success_without_username_still_authenticates() {
    let mut state = AuthState::default();
    state.apply_verification(Some(SessionResponse {
        authenticated: true,
        username: None,
    }));
    assert!(state.authenticated);
    assert!(state.username.is_none());
}

// =============================================================
// Credential acceptance and logout
// =============================================================

#[test]
fn login_after_failed_verification_authenticates() {
    let mut state = AuthState::default();
    state.apply_verification(None);
    state.apply_login("bob".to_owned());
    assert!(state.authenticated);
    assert_eq!(state.username.as_deref(), Some("bob"));
    assert!(!state.loading);
}

#[test]
fn clear_resets_to_signed_out() {
    let mut state = AuthState {
        authenticated: true,
        username: Some("alice".to_owned()),
        loading: false,
    };
    state.clear();
    assert!(!state.authenticated);
    assert!(state.username.is_none());
    assert!(!state.loading);
}

#[test]
fn clear_is_safe_on_an_already_cleared_state() {
    // Logout clears local state even when the server call failed, so the
    // transition must hold from any starting point.
    let mut state = AuthState::default();
    state.clear();
    state.clear();
    assert!(!state.authenticated);
    assert!(state.username.is_none());
}
