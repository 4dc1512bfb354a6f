//! Route guard wrapping session-gated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session verification is owned by the application root and runs once per
//! page load; this component only reads its outcome. Mounting a gated page
//! never re-triggers verification, and a remount re-reads current state
//! instead of caching an earlier decision.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::state::auth::AuthState;
use crate::util::guard::{RedirectLatch, RouteDecision, decide};

/// Gate `children` behind the shared auth state.
///
/// Pending renders the spinner, denied navigates to `/sign-in` exactly once
/// and renders nothing, granted renders the children untouched.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let latch = RwSignal::new(RedirectLatch::default());
    Effect::new(move || {
        let decision = decide(&auth.get());
        let fire = latch.try_update(|l| l.arm(decision)).unwrap_or(false);
        if fire {
            navigate("/sign-in", NavigateOptions::default());
        }
    });

    view! {
        {move || match decide(&auth.get()) {
            RouteDecision::Pending => view! { <Spinner/> }.into_any(),
            RouteDecision::Denied => view! { <></> }.into_any(),
            RouteDecision::Granted => children().into_any(),
        }}
    }
}
