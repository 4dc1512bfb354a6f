//! Sign-up page creating a new account.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::header::Header;
#[cfg(feature = "csr")]
use crate::state::auth::AuthState;
use crate::util::validate::{validate_email, validate_new_password, validate_new_username};

/// Sign-up page. An accepted submission signs the new account in directly
/// and lands on the logo studio.
#[component]
pub fn SignUpPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let submit_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let username_value = username.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        username_error.set(validate_new_username(&username_value));
        email_error.set(validate_email(&email_value));
        password_error.set(validate_new_password(&password_value));
        if username_error.get().is_some()
            || email_error.get().is_some()
            || password_error.get().is_some()
        {
            return;
        }

        busy.set(true);
        submit_error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&username_value, &email_value, &password_value).await
                {
                    Ok(session_name) => {
                        crate::util::storage::save_username(&session_name);
                        auth.update(|state| state.apply_login(session_name));
                        navigate("/create-logo", NavigateOptions::default());
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
        <div class="signup-page">
            <Header/>
            <main class="signup-page__main">
                <div class="auth-card">
                    <h1>"Create Your Account"</h1>
                    <p class="auth-card__subtitle">"Start generating brand content"</p>

                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Username"
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="Pick a username"
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
                            "Email"
                            <input
                                class="auth-form__input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    email.set(event_target_value(&ev));
                                    email_error.set(None);
                                }
                            />
                        </label>
                        <Show when=move || email_error.get().is_some()>
                            <p class="auth-form__error">
                                {move || email_error.get().unwrap_or_default()}
                            </p>
                        </Show>

                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                placeholder="At least 6 characters"
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
                            {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
                        </button>
                    </form>

                    <p class="auth-card__alt">
                        "Already have an account? "
                        <a href="/sign-in">"Sign in here"</a>
                    </p>
                </div>
            </main>
            <Footer/>
        </div>
    }
}
