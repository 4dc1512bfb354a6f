//! Full-page loading indicator shown while the session check is pending.

use leptos::prelude::*;

/// Centered spinner used as the route guard's pending state.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <div class="spinner__ring"></div>
        </div>
    }
}
