//! Route-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated route renders through the same three-way decision: hold while
//! the startup session verification is in flight, bounce to sign-in once it
//! has resolved negative, or hand the page through untouched. The decision
//! and the redirect latch are plain values so they test without a DOM; the
//! `Protected` component is only a thin reactive shell over them.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthState;

/// What a gated route should render for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Verification still in flight: show the loading indicator. Never
    /// navigate from this state, in either direction.
    Pending,
    /// Resolved unauthenticated: navigate to sign-in, render nothing.
    Denied,
    /// Resolved authenticated: render the wrapped page as-is.
    Granted,
}

/// Decide how a gated route renders under `state`.
pub fn decide(state: &AuthState) -> RouteDecision {
    if state.loading {
        RouteDecision::Pending
    } else if state.authenticated {
        RouteDecision::Granted
    } else {
        RouteDecision::Denied
    }
}

/// One-shot latch so a mounted guard issues its sign-in redirect exactly
/// once, however many times auth state changes while still denied.
///
/// The latch lives and dies with one guard mount. A fresh mount gets a
/// fresh latch and may redirect again.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedirectLatch {
    fired: bool,
}

impl RedirectLatch {
    /// Returns `true` exactly once: on the first `Denied` decision seen.
    pub fn arm(&mut self, decision: RouteDecision) -> bool {
        if decision == RouteDecision::Denied && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }
}
