//! Wrapper that renders its children only for an authenticated session.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionStore;
use crate::util::auth::{GuardDecision, guard_decision, install_guard_redirect};

/// Guard a protected view. Anonymous visitors are redirected to login with
/// the current path as return destination; an unresolved session shows a
/// neutral placeholder until the probe answers.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let location = use_location();
    let pathname = location.pathname;

    install_guard_redirect(session, pathname, use_navigate());

    let decision = Memo::new(move |_| session.with(|s| guard_decision(s.state(), &pathname.get())));

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Pending => view! {
            <div class="guard guard--pending" aria-busy="true">
                <p>"Checking your session..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect(_) => view! {
            <div class="guard">
                <p>"Redirecting to login..."</p>
            </div>
        }
        .into_any(),
    }
}
