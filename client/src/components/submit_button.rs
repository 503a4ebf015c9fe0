//! Form submit button with a loading spinner.

use leptos::prelude::*;

/// Disabled and spinning while `loading` is true.
#[component]
pub fn SubmitButton(#[prop(into)] loading: Signal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="button button--primary"
            class:button--loading=move || loading.get()
            disabled=move || loading.get()
        >
            <Show when=move || loading.get()>
                <span class="button__spinner" aria-hidden="true"></span>
            </Show>
            {label}
        </button>
    }
}
