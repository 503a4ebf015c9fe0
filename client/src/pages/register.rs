//! Account registration page with buyer/seller role selection.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field_input::FieldInput;
use crate::components::submit_button::SubmitButton;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::types::{RegisterRequest, Role, Session};
use crate::state::form::{FormState, failure_message};
use crate::state::session::SessionStore;
use crate::util::auth::HOME_PATH;
use crate::util::validate::{FieldDescriptor, FieldKind, FieldValues};

pub fn register_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("name", FieldKind::Text)
            .label("Full Name")
            .placeholder("Enter your full name")
            .required(),
        FieldDescriptor::new("email", FieldKind::Email)
            .label("Email address")
            .placeholder("Enter your email")
            .required(),
        FieldDescriptor::new("password", FieldKind::Password)
            .label("Password")
            .placeholder("Enter your password")
            .required(),
    ]
}

fn register_request(values: &FieldValues, role: Role) -> RegisterRequest {
    let field = |name: &str| values.get(name).cloned().unwrap_or_default();
    RegisterRequest {
        name: field("name").trim().to_owned(),
        email: field("email").trim().to_owned(),
        password: field("password"),
        role,
    }
}

/// Send the registration request; on failure return the message to show.
pub async fn submit_register<A: AuthApi>(api: &A, request: &RegisterRequest) -> Result<Session, String> {
    api.register(request).await.map_err(|e| {
        log::warn!("registration failed: {e}");
        failure_message(&e, "Registration failed")
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let api = expect_context::<HttpAuthApi>();
    let navigate = use_navigate();

    let form = RwSignal::new(FormState::new());
    let role = RwSignal::new(Role::default());
    let fields = StoredValue::new(register_fields());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        form.update(|f| {
            if fields.with_value(|fields| f.begin_submit(fields)) {
                request = Some(register_request(f.values(), role.get_untracked()));
            }
        });
        let Some(request) = request else {
            return;
        };
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match submit_register(&api, &request).await {
                Ok(user) => {
                    form.update(FormState::finish);
                    session.update(|s| s.login(user));
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Err(message) => form.update(|f| f.fail(message)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Sign up"</h2>
                <div class="role-tabs" role="tablist">
                    {Role::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    class="role-tabs__tab"
                                    class:role-tabs__tab--active=move || role.get() == option
                                    aria-selected=move || if role.get() == option { "true" } else { "false" }
                                    on:click=move |_| role.set(option)
                                >
                                    {option.as_str()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <Show when=move || form.with(|f| f.general_error().is_some())>
                        <p class="auth-form__error">
                            {move || form.with(|f| f.general_error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    {fields
                        .get_value()
                        .into_iter()
                        .map(|field| view! { <FieldInput field=field form=form/> })
                        .collect_view()}
                    <SubmitButton
                        loading=Signal::derive(move || form.with(FormState::is_loading))
                        label="Create account"
                    />
                    <p class="auth-form__alt">
                        <span>"Already have an account? "</span>
                        <a href="/login">"Sign in"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
