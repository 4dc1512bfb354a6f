//! Logo studio page.

#[cfg(test)]
#[path = "create_logo_test.rs"]
mod create_logo_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
#[cfg(feature = "csr")]
use crate::net::types::LogoRequest;

/// Style presets offered for logo marks.
const LOGO_STYLES: [&str; 6] = [
    "Minimalist",
    "Modern",
    "Vintage",
    "Playful",
    "Corporate",
    "Hand-drawn",
];

/// Convert a color-picker value to the bare lowercase hex the backend
/// expects. The picker yields `#RRGGBB`; pasted values may vary.
fn normalize_hex_color(value: &str) -> String {
    value.trim().trim_start_matches('#').to_ascii_lowercase()
}

/// Logo studio. Gated; reached directly after sign-up.
#[component]
pub fn CreateLogoPage() -> impl IntoView {
    let company_name = RwSignal::new(String::new());
    let sector = RwSignal::new(String::new());
    let style = RwSignal::new(LOGO_STYLES[0].to_owned());
    let color = RwSignal::new("#336699".to_owned());
    let logo_url = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_generate = move |_| {
        if busy.get() {
            return;
        }
        let name_value = company_name.get().trim().to_owned();
        if name_value.is_empty() {
            error.set("Company name is required".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let request = LogoRequest {
                company_name: name_value,
                sector: sector.get().trim().to_owned(),
                style: style.get(),
                color: normalize_hex_color(&color.get()),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::generate_logo(&request).await {
                    Ok(url) => logo_url.set(url),
                    Err(message) => error.set(message),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="tool-page tool-page--logo">
            <Header/>
            <main class="tool-page__main">
                <h1>"Logo Studio"</h1>

                <div class="tool-form">
                    <label class="tool-form__label">
                        "Company name"
                        <input
                            class="tool-form__input"
                            type="text"
                            placeholder="Acme Robotics"
                            prop:value=move || company_name.get()
                            on:input=move |ev| company_name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="tool-form__label">
                        "Sector"
                        <input
                            class="tool-form__input"
                            type="text"
                            placeholder="robotics, coffee, fintech..."
                            prop:value=move || sector.get()
                            on:input=move |ev| sector.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="tool-form__label">
                        "Style"
                        <select
                            class="tool-form__input"
                            on:change=move |ev| style.set(event_target_value(&ev))
                        >
                            {LOGO_STYLES
                                .into_iter()
                                .map(|preset| {
                                    view! {
                                        <option value=preset selected=move || style.get() == preset>
                                            {preset}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <label class="tool-form__label">
                        "Brand color"
                        <input
                            class="tool-form__color"
                            type="color"
                            prop:value=move || color.get()
                            on:input=move |ev| color.set(event_target_value(&ev))
                        />
                    </label>

                    <button
                        class="btn btn--primary tool-form__submit"
                        on:click=on_generate
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Generating..." } else { "Generate Logo" }}
                    </button>

                    <Show when=move || !error.get().is_empty()>
                        <p class="tool-form__error">{move || error.get()}</p>
                    </Show>
                </div>

                <Show when=move || !logo_url.get().is_empty()>
                    <div class="tool-result">
                        <img class="tool-result__image" src=move || logo_url.get() alt="Generated logo"/>
                        <a
                            class="tool-result__link"
                            href=move || logo_url.get()
                            target="_blank"
                            rel="noopener"
                        >
                            "Open full size"
                        </a>
                    </div>
                </Show>
            </main>
            <Footer/>
        </div>
    }
}
