//! Email + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached directly or through the route guard, which appends
//! `?return_to=<path>`. A successful login stores the session and replaces
//! the history entry with the sanitized destination.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::field_input::FieldInput;
use crate::components::submit_button::SubmitButton;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::types::{LoginRequest, Session};
use crate::state::form::{FormState, failure_message};
use crate::state::session::SessionStore;
use crate::util::auth::{REGISTER_PATH, RETURN_TO_PARAM, sanitize_return_to};
use crate::util::validate::{FieldDescriptor, FieldKind, FieldValues};

pub fn login_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("email", FieldKind::Email)
            .label("Email Address")
            .placeholder("Enter your email")
            .required(),
        FieldDescriptor::new("password", FieldKind::Password)
            .label("Password")
            .placeholder("Enter password")
            .required(),
    ]
}

fn login_request(values: &FieldValues) -> LoginRequest {
    let field = |name: &str| values.get(name).cloned().unwrap_or_default();
    LoginRequest { email: field("email").trim().to_owned(), password: field("password") }
}

/// Send the login request; on failure return the message to show.
pub async fn submit_login<A: AuthApi>(api: &A, request: &LoginRequest) -> Result<Session, String> {
    api.login(request).await.map_err(|e| {
        log::warn!("login failed: {e}");
        failure_message(&e, "Login failed")
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let api = expect_context::<HttpAuthApi>();
    let query = use_query_map();
    let navigate = use_navigate();

    let form = RwSignal::new(FormState::new());
    let fields = StoredValue::new(login_fields());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        form.update(|f| {
            if fields.with_value(|fields| f.begin_submit(fields)) {
                request = Some(login_request(f.values()));
            }
        });
        let Some(request) = request else {
            return;
        };
        let destination = query.with_untracked(|q| sanitize_return_to(q.get(RETURN_TO_PARAM).as_deref()));
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit_login(&api, &request).await {
                Ok(user) => {
                    form.update(FormState::finish);
                    session.update(|s| s.login(user));
                    navigate(&destination, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                Err(message) => form.update(|f| f.fail(message)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Sign in"</h2>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    {fields
                        .get_value()
                        .into_iter()
                        .map(|field| view! { <FieldInput field=field form=form/> })
                        .collect_view()}
                    <Show when=move || form.with(|f| f.general_error().is_some())>
                        <p class="auth-form__error">
                            {move || form.with(|f| f.general_error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <SubmitButton loading=Signal::derive(move || form.with(FormState::is_loading)) label="Sign In"/>
                    <p class="auth-form__alt">
                        <span>"Don't have an account? "</span>
                        <a href=REGISTER_PATH>"Sign up"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
