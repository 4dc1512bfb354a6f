//! Assistant chat page backed by the remote chat endpoint.

use leptos::prelude::*;

use crate::components::header::Header;
#[cfg(feature = "csr")]
use crate::net::types::ChatRequest;
use crate::state::chat::ChatState;

/// Models offered in the picker. Forwarded verbatim to the backend.
const CHAT_MODELS: [&str; 3] = ["gpt-3.5-turbo", "gpt-4", "gpt-4-turbo"];

/// Assistant chat. Gated. The transcript lives for the lifetime of the
/// page; navigating away discards it.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());

    let input = RwSignal::new(String::new());
    let model = RwSignal::new(CHAT_MODELS[0].to_owned());
    let api_key = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get().trim().to_owned();
        if text.is_empty() || chat.get().pending {
            return;
        }
        let key = api_key.get().trim().to_owned();
        if key.is_empty() {
            error.set("Enter your provider API key first".to_owned());
            return;
        }

        error.set(String::new());
        input.set(String::new());
        chat.update(|c| c.push_user(uuid::Uuid::new_v4().to_string(), text.clone()));

        #[cfg(feature = "csr")]
        {
            let request = ChatRequest {
                message: text,
                model: model.get(),
                api_key: key,
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::send_chat(&request).await {
                    Ok(reply) => {
                        chat.update(|c| {
                            c.push_assistant(uuid::Uuid::new_v4().to_string(), reply.response);
                        });
                    }
                    Err(message) => {
                        chat.update(ChatState::fail_pending);
                        error.set(message);
                    }
                }
            });
        }
    };

    let on_send = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().pending;

    view! {
        <div class="chat-page">
            <Header/>
            <main class="chat-page__main">
                <div class="chat-page__controls">
                    <label class="chat-page__control">
                        "Model"
                        <select
                            class="chat-page__select"
                            on:change=move |ev| model.set(event_target_value(&ev))
                        >
                            {CHAT_MODELS
                                .into_iter()
                                .map(|name| {
                                    view! {
                                        <option value=name selected=move || model.get() == name>
                                            {name}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="chat-page__control">
                        "API key"
                        <input
                            class="chat-page__key"
                            type="password"
                            placeholder="sk-..."
                            prop:value=move || api_key.get()
                            on:input=move |ev| api_key.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="chat-page__messages" node_ref=messages_ref>
                    {move || {
                        let messages = chat.get().messages;
                        if messages.is_empty() {
                            return view! {
                                <div class="chat-page__empty">"No messages yet. Ask anything."</div>
                            }
                                .into_any();
                        }

                        messages
                            .iter()
                            .map(|msg| {
                                let bubble_class =
                                    format!("chat-message chat-message--{}", msg.role.css_modifier());
                                let content = msg.content.clone();
                                view! {
                                    <div class=bubble_class>
                                        <span class="chat-message__text">{content}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>

                <Show when=move || chat.get().pending>
                    <div class="chat-page__pending">"Thinking..."</div>
                </Show>

                <Show when=move || !error.get().is_empty()>
                    <p class="chat-page__error">{move || error.get()}</p>
                </Show>

                <div class="chat-page__composer">
                    <textarea
                        class="chat-page__input"
                        placeholder="Ask about taglines, palettes, campaign ideas..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    ></textarea>
                    <button
                        class="btn btn--primary chat-page__send"
                        on:click=on_send
                        disabled=move || !can_send()
                    >
                        "Send"
                    </button>
                </div>
            </main>
        </div>
    }
}
