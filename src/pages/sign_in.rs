//! Sign-in page with username/password credentials.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::header::Header;
#[cfg(feature = "csr")]
use crate::state::auth::AuthState;
use crate::util::validate::{require_password, require_username};

/// Sign-in page. An accepted submission updates the shared auth state,
/// persists the username mirror, and lands on `/`.
#[component]
pub fn SignInPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let submit_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        username_error.set(require_username(&username_value));
        password_error.set(require_password(&password_value));
        if username_error.get().is_some() || password_error.get().is_some() {
            return;
        }

        busy.set(true);
        submit_error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&username_value, &password_value).await {
                    Ok(session_name) => {
                        crate::util::storage::save_username(&session_name);
                        auth.update(|state| state.apply_login(session_name));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(message) => {
                        submit_error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="signin-page">
            <Header/>
            <main class="signin-page__main">
                <div class="auth-card">
                    <h1>"Welcome Back"</h1>
                    <p class="auth-card__subtitle">"Sign in to your account"</p>

                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Username"
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="Enter your username"
                                prop:value=move || username.get()
                                on:input=move |ev| {
                                    username.set(event_target_value(&ev));
                                    username_error.set(None);
                                }
                            />
                        </label>
                        <Show when=move || username_error.get().is_some()>
                            <p class="auth-form__error">
                                {move || username_error.get().unwrap_or_default()}
                            </p>
                        </Show>

                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    password.set(event_target_value(&ev));
                                    password_error.set(None);
                                }
                            />
                        </label>
                        <Show when=move || password_error.get().is_some()>
                            <p class="auth-form__error">
                                {move || password_error.get().unwrap_or_default()}
                            </p>
                        </Show>

                        <Show when=move || !submit_error.get().is_empty()>
                            <p class="auth-form__error auth-form__error--submit">
                                {move || submit_error.get()}
                            </p>
                        </Show>

                        <button
                            class="btn btn--primary auth-form__submit"
                            type="submit"
                            disabled=move || busy.get()
                        >
                            {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                        </button>
                    </form>

                    <p class="auth-card__alt">
                        "Don't have an account? "
                        <a href="/sign-up">"Sign up here"</a>
                    </p>
                </div>
            </main>
            <Footer/>
        </div>
    }
}
