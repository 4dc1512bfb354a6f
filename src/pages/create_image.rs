//! Image lab page: prompt-to-image generation plus the saved gallery.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
#[cfg(feature = "csr")]
use crate::net::types::ImageRequest;

/// Style presets offered for generated images.
const IMAGE_STYLES: [&str; 5] = [
    "Photorealistic",
    "Illustration",
    "3D Render",
    "Watercolor",
    "Pixel Art",
];

/// Image lab. Gated. The gallery fetches once on mount and refetches after
/// each successful generation or delete.
#[component]
pub fn CreateImagePage() -> impl IntoView {
    let prompt = RwSignal::new(String::new());
    let style = RwSignal::new(IMAGE_STYLES[0].to_owned());
    let image_url = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Saved-image gallery, fetched on mount.
    let gallery = LocalResource::new(|| crate::net::api::fetch_saved_images());

    let on_generate = move |_| {
        if busy.get() {
            return;
        }
        let prompt_value = prompt.get().trim().to_owned();
        if prompt_value.is_empty() {
            error.set("Describe the image first".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let request = ImageRequest {
                prompt: prompt_value,
                style: style.get(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::generate_image(&request).await {
                    Ok(image) => {
                        image_url.set(image.image_url);
                        gallery.refetch();
                    }
                    Err(message) => error.set(message),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="tool-page tool-page--image">
            <Header/>
            <main class="tool-page__main">
                <h1>"Image Lab"</h1>

                <div class="tool-form">
                    <label class="tool-form__label">
                        "Prompt"
                        <textarea
                            class="tool-form__input tool-form__input--multiline"
                            placeholder="A fox reading a newspaper in a cafe"
                            prop:value=move || prompt.get()
                            on:input=move |ev| prompt.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="tool-form__label">
                        "Style"
                        <select
                            class="tool-form__input"
                            on:change=move |ev| style.set(event_target_value(&ev))
                        >
                            {IMAGE_STYLES
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

                    <button
                        class="btn btn--primary tool-form__submit"
                        on:click=on_generate
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Generating..." } else { "Generate Image" }}
                    </button>

                    <Show when=move || !error.get().is_empty()>
                        <p class="tool-form__error">{move || error.get()}</p>
                    </Show>
                </div>

                <Show when=move || !image_url.get().is_empty()>
                    <div class="tool-result">
                        <img
                            class="tool-result__image"
                            src=move || image_url.get()
                            alt="Generated image"
                        />
                    </div>
                </Show>

                <section class="gallery">
                    <h2>"Your images"</h2>
                    <Suspense fallback=move || {
                        view! { <p class="gallery__loading">"Loading gallery..."</p> }
                    }>
                        {move || {
                            gallery
                                .get()
                                .map(|images| {
                                    let images = images.unwrap_or_default();
                                    if images.is_empty() {
                                        view! {
                                            <p class="gallery__empty">"Nothing generated yet."</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="gallery__grid">
                                                {images
                                                    .into_iter()
                                                    .map(|image| {
                                                        view! {
                                                            <figure class="gallery__item">
                                                                <img
                                                                    class="gallery__image"
                                                                    src=image.image_url
                                                                    alt=image.prompt.clone()
                                                                />
                                                                <figcaption class="gallery__caption">
                                                                    {image.prompt}
                                                                </figcaption>
                                                                <button
                                                                    class="btn gallery__delete"
                                                                    on:click=move |_| {
                                                                        #[cfg(feature = "csr")]
                                                                        {
                                                                            leptos::task::spawn_local(async move {
                                                                                match crate::net::api::delete_image(image.id).await {
                                                                                    Ok(()) => gallery.refetch(),
                                                                                    Err(e) => {
                                                                                        leptos::logging::warn!(
                                                                                            "image delete failed: {e}"
                                                                                        );
                                                                                    }
                                                                                }
                                                                            });
                                                                        }
                                                                    }
                                                                >
                                                                    "Remove"
                                                                </button>
                                                            </figure>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
