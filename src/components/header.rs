//! Top navigation bar with feature links, session identity, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every page. While the session check is pending it shows the
//! mirrored username from `localStorage` (display continuity only); once
//! resolved it shows the authoritative session identity or the sign-in
//! links.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Feature links shown in the main navigation.
const NAV_LINKS: [(&str, &str); 5] = [
    ("Logos", "/create-logo"),
    ("Images", "/create-image"),
    ("Videos", "/create-video"),
    ("Chat", "/chat"),
    ("Posts", "/posts"),
];

/// Top navigation bar.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::logout().await {
                    leptos::logging::warn!("logout request failed: {e}");
                }
                crate::util::storage::clear_username();
                auth.update(AuthState::clear);
                // Full page load so every per-tab store restarts from defaults.
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
    };

    view! {
        <header class="header">
            <a href="/" class="header__brand">"Brandforge"</a>

            <nav class="header__nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, path)| view! { <a class="header__link" href=path>{label}</a> })
                    .collect::<Vec<_>>()}
                <a class="header__link" href="/pricing">"Pricing"</a>
            </nav>

            <div class="header__session">
                {move || {
                    let state = auth.get();
                    if state.loading {
                        // Stale-name window: verification may still reject it.
                        let hint = crate::util::storage::load_username().unwrap_or_default();
                        view! { <span class="header__name header__name--unverified">{hint}</span> }
                            .into_any()
                    } else if state.authenticated {
                        let name = state.username.unwrap_or_default();
                        view! {
                            <>
                                <span class="header__name">{name}</span>
                                <button class="btn header__logout" on:click=on_logout>
                                    "Sign Out"
                                </button>
                            </>
                        }
                            .into_any()
                    } else {
                        view! {
                            <>
                                <a class="header__link" href="/sign-in">"Sign In"</a>
                                <a class="btn btn--primary header__cta" href="/sign-up">"Get Started"</a>
                            </>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
