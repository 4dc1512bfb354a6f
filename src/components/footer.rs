//! Static site footer.

use leptos::prelude::*;

/// Bottom-of-page footer with product links.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__copy">"© 2026 Brandforge"</span>
            <nav class="footer__links">
                <a href="/pricing">"Pricing"</a>
                <a href="/sign-up">"Get Started"</a>
            </nav>
        </footer>
    }
}
