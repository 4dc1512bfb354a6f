//! Video clip page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
#[cfg(feature = "csr")]
use crate::net::types::VideoRequest;

/// Style presets offered for clips.
const VIDEO_STYLES: [&str; 4] = ["Cinematic", "Animation", "Timelapse", "Product Shot"];

/// Clip lengths the backend accepts, in seconds.
const DURATIONS: [u32; 3] = [5, 10, 15];

/// Video clip generator. Gated.
#[component]
pub fn CreateVideoPage() -> impl IntoView {
    let prompt = RwSignal::new(String::new());
    let style = RwSignal::new(VIDEO_STYLES[0].to_owned());
    let duration = RwSignal::new(DURATIONS[0]);
    let video_url = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_generate = move |_| {
        if busy.get() {
            return;
        }
        let prompt_value = prompt.get().trim().to_owned();
        if prompt_value.is_empty() {
            error.set("Describe the clip first".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let request = VideoRequest {
                prompt: prompt_value,
                style: style.get(),
                duration: duration.get(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::generate_video(&request).await {
                    Ok(video) => video_url.set(video.video_url),
                    Err(message) => error.set(message),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="tool-page tool-page--video">
            <Header/>
            <main class="tool-page__main">
                <h1>"Video Clips"</h1>

                <div class="tool-form">
                    <label class="tool-form__label">
                        "Prompt"
                        <textarea
                            class="tool-form__input tool-form__input--multiline"
                            placeholder="Slow pan over a mountain lake at dawn"
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
                            {VIDEO_STYLES
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
                        "Length"
                        <select
                            class="tool-form__input"
                            on:change=move |ev| {
                                duration.set(event_target_value(&ev).parse().unwrap_or(DURATIONS[0]));
                            }
                        >
                            {DURATIONS
                                .into_iter()
                                .map(|seconds| {
                                    view! {
                                        <option
                                            value=seconds.to_string()
                                            selected=move || duration.get() == seconds
                                        >
                                            {format!("{seconds} seconds")}
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
                        {move || if busy.get() { "Generating..." } else { "Generate Video" }}
                    </button>

                    <Show when=move || !error.get().is_empty()>
                        <p class="tool-form__error">{move || error.get()}</p>
                    </Show>
                </div>

                <Show when=move || !video_url.get().is_empty()>
                    <div class="tool-result">
                        <video
                            class="tool-result__video"
                            src=move || video_url.get()
                            controls=true
                        ></video>
                    </div>
                </Show>
            </main>
            <Footer/>
        </div>
    }
}
