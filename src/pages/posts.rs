//! Post writer page for social and blog copy.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
#[cfg(feature = "csr")]
use crate::net::types::{PostRequest, PostSaveRequest, PostUpdateRequest};

/// Output formats forwarded to the backend.
const POST_FORMATS: [&str; 4] = ["Blog post", "Tweet thread", "LinkedIn post", "Newsletter"];

/// Writing tones forwarded to the backend.
const POST_TONES: [&str; 4] = ["Professional", "Casual", "Playful", "Bold"];

/// Length choices offered in the picker, in words.
const WORD_COUNTS: [u32; 4] = [100, 300, 600, 1000];

const DEFAULT_WORD_COUNT: u32 = 300;

/// Parse a length-picker value, falling back to the default on anything
/// unexpected.
fn parse_word_count(value: &str) -> u32 {
    value.trim().parse().unwrap_or(DEFAULT_WORD_COUNT)
}

/// Post writer. Gated. Saved posts load once on mount and refetch after
/// every save, update, and delete.
#[component]
pub fn PostsPage() -> impl IntoView {
    let topic = RwSignal::new(String::new());
    let format = RwSignal::new(POST_FORMATS[0].to_owned());
    let tone = RwSignal::new(POST_TONES[0].to_owned());
    let word_count = RwSignal::new(DEFAULT_WORD_COUNT);
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Saved-post history, fetched on mount.
    let history = LocalResource::new(|| crate::net::api::fetch_post_history());

    // Entry under edit: id plus its topic, which rides along unchanged.
    let editing = RwSignal::new(None::<(i64, String)>);
    let edit_text = RwSignal::new(String::new());

    let on_generate = move |_| {
        if busy.get() {
            return;
        }
        let topic_value = topic.get().trim().to_owned();
        if topic_value.is_empty() {
            error.set("Give the post a topic first".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let request = PostRequest {
                topic: topic_value,
                format: format.get(),
                tone: tone.get(),
                word_count: word_count.get(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::generate_post(&request).await {
                    Ok(text) => content.set(text),
                    Err(message) => error.set(message),
                }
                busy.set(false);
            });
        }
    };

    let on_save = move |_| {
        #[cfg(feature = "csr")]
        {
            let text = content.get();
            if text.is_empty() {
                return;
            }
            let request = PostSaveRequest {
                topic: topic.get().trim().to_owned(),
                content: text,
                format: format.get(),
                tone: tone.get(),
                word_count: word_count.get(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::save_post(&request).await {
                    Ok(()) => history.refetch(),
                    Err(message) => error.set(message),
                }
            });
        }
    };

    let on_update = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some((post_id, entry_topic)) = editing.get() else {
                return;
            };
            let request = PostUpdateRequest {
                topic: entry_topic,
                content: edit_text.get(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_post(post_id, &request).await {
                    Ok(()) => {
                        editing.set(None);
                        history.refetch();
                    }
                    Err(message) => error.set(message),
                }
            });
        }
    };

    view! {
        <div class="tool-page tool-page--posts">
            <Header/>
            <main class="tool-page__main">
                <h1>"Post Writer"</h1>

                <div class="tool-form">
                    <label class="tool-form__label">
                        "Topic"
                        <input
                            class="tool-form__input"
                            type="text"
                            placeholder="Announcing our new roast lineup"
                            prop:value=move || topic.get()
                            on:input=move |ev| topic.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="tool-form__label">
                        "Format"
                        <select
                            class="tool-form__input"
                            on:change=move |ev| format.set(event_target_value(&ev))
                        >
                            {POST_FORMATS
                                .into_iter()
                                .map(|preset| {
                                    view! {
                                        <option value=preset selected=move || format.get() == preset>
                                            {preset}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <label class="tool-form__label">
                        "Tone"
                        <select
                            class="tool-form__input"
                            on:change=move |ev| tone.set(event_target_value(&ev))
                        >
                            {POST_TONES
                                .into_iter()
                                .map(|preset| {
                                    view! {
                                        <option value=preset selected=move || tone.get() == preset>
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
                            on:change=move |ev| word_count.set(parse_word_count(&event_target_value(&ev)))
                        >
                            {WORD_COUNTS
                                .into_iter()
                                .map(|count| {
                                    view! {
                                        <option
                                            value=count.to_string()
                                            selected=move || word_count.get() == count
                                        >
                                            {format!("~{count} words")}
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
                        {move || if busy.get() { "Writing..." } else { "Generate Post" }}
                    </button>

                    <Show when=move || !error.get().is_empty()>
                        <p class="tool-form__error">{move || error.get()}</p>
                    </Show>
                </div>

                <Show when=move || !content.get().is_empty()>
                    <div class="post-output">
                        <pre class="post-output__text">{move || content.get()}</pre>
                        <button class="btn post-output__save" on:click=on_save>
                            "Save Post"
                        </button>
                    </div>
                </Show>

                <section class="post-history">
                    <h2>"Saved posts"</h2>
                    <Suspense fallback=move || {
                        view! { <p class="post-history__loading">"Loading history..."</p> }
                    }>
                        {move || {
                            history
                                .get()
                                .map(|posts| {
                                    let posts = posts.unwrap_or_default();
                                    if posts.is_empty() {
                                        view! {
                                            <p class="post-history__empty">"Nothing saved yet."</p>
                                        }
                                            .into_any()
                                    } else {
                                        posts
                                            .into_iter()
                                            .map(|entry| {
                                                let load_topic = entry.topic.clone();
                                                let load_content = entry.content.clone();
                                                let load_format = entry.format.clone();
                                                let load_tone = entry.tone.clone();
                                                let load_count = entry.word_count;
                                                let edit_topic = entry.topic.clone();
                                                let edit_content = entry.content.clone();
                                                view! {
                                                    <article class="post-history__entry">
                                                        <h3 class="post-history__topic">{entry.topic}</h3>
                                                        <pre class="post-history__text">{entry.content}</pre>
                                                        <div class="post-history__actions">
                                                            <button
                                                                class="btn post-history__action"
                                                                on:click=move |_| {
                                                                    topic.set(load_topic.clone());
                                                                    content.set(load_content.clone());
                                                                    if let Some(preset) = load_format.clone() {
                                                                        format.set(preset);
                                                                    }
                                                                    if let Some(preset) = load_tone.clone() {
                                                                        tone.set(preset);
                                                                    }
                                                                    word_count
                                                                        .set(
                                                                            if load_count > 0 { load_count } else { DEFAULT_WORD_COUNT },
                                                                        );
                                                                }
                                                            >
                                                                "Load"
                                                            </button>
                                                            <button
                                                                class="btn post-history__action"
                                                                on:click=move |_| {
                                                                    editing.set(Some((entry.id, edit_topic.clone())));
                                                                    edit_text.set(edit_content.clone());
                                                                }
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn post-history__action"
                                                                on:click=move |_| {
                                                                    #[cfg(feature = "csr")]
                                                                    {
                                                                        leptos::task::spawn_local(async move {
                                                                            match crate::net::api::delete_post(entry.id).await {
                                                                                Ok(()) => history.refetch(),
                                                                                Err(message) => error.set(message),
                                                                            }
                                                                        });
                                                                    }
                                                                }
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    </article>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>

                    <Show when=move || editing.get().is_some()>
                        <div class="post-history__editor">
                            <textarea
                                class="tool-form__input tool-form__input--multiline"
                                prop:value=move || edit_text.get()
                                on:input=move |ev| edit_text.set(event_target_value(&ev))
                            ></textarea>
                            <div class="post-history__actions">
                                <button class="btn btn--primary" on:click=on_update>
                                    "Update"
                                </button>
                                <button class="btn" on:click=move |_| editing.set(None)>
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    </Show>
                </section>
            </main>
            <Footer/>
        </div>
    }
}
