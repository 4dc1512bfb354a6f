//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One instance lives at the application root inside an `RwSignal` context.
//! Route guards and identity-aware components read it; writes happen only in
//! the startup session verifier and the sign-in/sign-up/logout handlers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionResponse;

/// Authentication state tracking the current session and loading status.
///
/// `loading` starts `true` and flips to `false` exactly once, when the
/// startup session verification resolves. `authenticated` is meaningless
/// until then; guards must treat the loading phase as "undecided".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub username: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            authenticated: false,
            username: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Apply the outcome of the startup session verification.
    ///
    /// Anything short of a parsed body with `authenticated: true` counts as
    /// signed-out: transport failure, non-2xx status, malformed body, or an
    /// explicit denial. The loading phase ends here either way.
    pub fn apply_verification(&mut self, response: Option<SessionResponse>) {
        match response {
            Some(session) if session.authenticated => {
                self.authenticated = true;
                self.username = session.username;
            }
            _ => {
                self.authenticated = false;
                self.username = None;
            }
        }
        self.loading = false;
    }

    /// Record an accepted credential submission (sign-in or sign-up).
    pub fn apply_login(&mut self, username: String) {
        self.authenticated = true;
        self.username = Some(username);
        self.loading = false;
    }

    /// Drop the session locally. Runs on logout whether or not the server
    /// invalidation call succeeded.
    pub fn clear(&mut self) {
        self.authenticated = false;
        self.username = None;
        self.loading = false;
    }
}
