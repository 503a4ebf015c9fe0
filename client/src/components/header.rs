//! Site header with navigation and session-aware auth controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpAuthApi;
use crate::state::session::{SessionState, SessionStore, logout};
use crate::util::auth::{HOME_PATH, LOGIN_PATH, REGISTER_PATH};

/// Header bar. Shows Login/Register when anonymous, a greeting and Logout
/// when signed in, and no auth controls while the session is unresolved.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let api = expect_context::<HttpAuthApi>();
    let navigate = use_navigate();

    let logging_out = RwSignal::new(false);
    let go_home = RwSignal::new(false);

    Effect::new(move || {
        if go_home.get() {
            go_home.set(false);
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            logout(&api, session).await;
            logging_out.set(false);
            go_home.set(true);
        });
    };

    let auth_controls = move || match session.with(|s| s.state().clone()) {
        SessionState::Unknown => ().into_any(),
        SessionState::Anonymous => view! {
            <a class="button button--primary" href=LOGIN_PATH>"Login"</a>
            <a class="button button--primary" href=REGISTER_PATH>"Register"</a>
        }
        .into_any(),
        SessionState::Authenticated(user) => view! {
            <span class="site-header__welcome">{format!("Welcome, {}", user.name)}</span>
            <button
                type="button"
                class="button button--danger"
                disabled=move || logging_out.get()
                on:click=on_logout.clone()
            >
                "Logout"
            </button>
        }
        .into_any(),
    };

    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                <a class="site-header__brand" href=HOME_PATH>"BikeMarket"</a>
                <ul class="site-header__links">
                    <li>
                        <a href=HOME_PATH>"Home"</a>
                    </li>
                </ul>
                <div class="site-header__auth">{auth_controls}</div>
            </nav>
        </header>
    }
}
