//! Public pricing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;

/// Plan name, monthly price, and bullet list.
const PLANS: [(&str, &str, &[&str]); 3] = [
    (
        "Starter",
        "$0/mo",
        &[
            "20 generations a month",
            "Logo and image tools",
            "Community support",
        ],
    ),
    (
        "Studio",
        "$19/mo",
        &[
            "Unlimited generations",
            "Video and post tools",
            "Priority queue",
        ],
    ),
    (
        "Agency",
        "$49/mo",
        &["Everything in Studio", "Team seats", "Dedicated support"],
    ),
];

/// Pricing page. Public; plan checkout is handled off-site.
#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing-page">
            <Header/>
            <main class="pricing-page__main">
                <h1>"Simple pricing"</h1>
                <div class="pricing-page__plans">
                    {PLANS
                        .into_iter()
                        .map(|(name, price, bullets)| {
                            view! {
                                <div class="plan-card">
                                    <h2 class="plan-card__name">{name}</h2>
                                    <p class="plan-card__price">{price}</p>
                                    <ul class="plan-card__bullets">
                                        {bullets
                                            .iter()
                                            .map(|line| view! { <li>{*line}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                    <a class="btn btn--primary plan-card__cta" href="/sign-up">
                                        "Get Started"
                                    </a>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </main>
            <Footer/>
        </div>
    }
}
