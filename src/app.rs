//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::pages::{
    chat::ChatPage, create_image::CreateImagePage, create_logo::CreateLogoPage,
    create_video::CreateVideoPage, home::HomePage, posts::PostsPage, pricing::PricingPage,
    sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::state::auth::AuthState;

/// Root application component.
///
/// The only construction point for the shared auth store: children receive
/// it through context and never build their own. Also kicks off the
/// startup session verification and declares the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // One verification round trip per page load. Nothing cancels it on
    // teardown and nothing dedupes a second mount; guards hold in their
    // pending state until it resolves.
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let session = crate::net::api::verify_session().await;
            auth.update(|state| state.apply_verification(session));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/brandforge.css"/>
        <Title text="Brandforge"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("sign-in") view=SignInPage/>
                <Route path=StaticSegment("sign-up") view=SignUpPage/>
                <Route path=StaticSegment("pricing") view=PricingPage/>
                <Route
                    path=StaticSegment("create-logo")
                    view=|| view! { <Protected><CreateLogoPage/></Protected> }
                />
                <Route
                    path=StaticSegment("create-image")
                    view=|| view! { <Protected><CreateImagePage/></Protected> }
                />
                <Route
                    path=StaticSegment("create-video")
                    view=|| view! { <Protected><CreateVideoPage/></Protected> }
                />
                <Route
                    path=StaticSegment("chat")
                    view=|| view! { <Protected><ChatPage/></Protected> }
                />
                <Route
                    path=StaticSegment("posts")
                    view=|| view! { <Protected><PostsPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
