//! Public landing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;

/// Feature cards shown on the landing page.
const FEATURES: [(&str, &str, &str); 5] = [
    ("Logo Studio", "Generate brand marks from a company profile.", "/create-logo"),
    ("Image Lab", "Turn prompts into styled imagery.", "/create-image"),
    ("Video Clips", "Produce short branded clips from a prompt.", "/create-video"),
    ("Assistant Chat", "Talk through ideas with an AI assistant.", "/chat"),
    ("Post Writer", "Draft social and blog posts in seconds.", "/posts"),
];

/// Landing page. Public; renders the same shell signed in or out.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Header/>
            <main class="home-page__main">
                <section class="hero">
                    <h1>"Brand content, generated."</h1>
                    <p class="hero__tagline">
                        "Logos, imagery, video, and copy for your brand in one studio."
                    </p>
                    <a class="btn btn--primary hero__cta" href="/sign-up">"Start creating"</a>
                </section>

                <section class="home-page__features">
                    {FEATURES
                        .into_iter()
                        .map(|(title, blurb, path)| {
                            view! {
                                <a class="feature-card" href=path>
                                    <h3 class="feature-card__title">{title}</h3>
                                    <p class="feature-card__blurb">{blurb}</p>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </section>
            </main>
            <Footer/>
        </div>
    }
}
