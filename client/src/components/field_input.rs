//! Form input bound to a [`FormState`], rendered per [`FieldKind`].
//!
//! DESIGN
//! ======
//! `FieldInput` owns the shared chrome (label, required marker, error line)
//! and picks the control with one `match` over the field kind. Each control
//! writes edits through `FormState::set_value`, which clears that field's
//! error.

#[cfg(test)]
#[path = "field_input_test.rs"]
mod field_input_test;

use leptos::prelude::*;

use crate::state::form::FormState;
use crate::util::validate::{FieldDescriptor, FieldKind, SelectOption};

/// Everything a control needs to read and write its field.
#[derive(Clone)]
struct Binding {
    id: String,
    name: String,
    placeholder: String,
    required: bool,
    form: RwSignal<FormState>,
    error: Memo<Option<String>>,
}

impl Binding {
    fn value(&self) -> impl Fn() -> String + Send + Sync + 'static + use<> {
        let name = self.name.clone();
        let form = self.form;
        move || form.with(|f| f.value(&name).to_owned())
    }

    fn invalid(&self) -> impl Fn() -> &'static str + Send + Sync + 'static + use<> {
        let error = self.error;
        move || if error.with(Option::is_some) { "true" } else { "false" }
    }

    fn stored(&self) -> String {
        self.form.with_untracked(|f| f.value(&self.name).to_owned())
    }

    fn write(&self, value: String) {
        self.form.update(|f| f.set_value(&self.name, value));
    }
}

#[component]
pub fn FieldInput(field: FieldDescriptor, form: RwSignal<FormState>) -> impl IntoView {
    let error = {
        let name = field.name.clone();
        Memo::new(move |_| form.with(|f| f.error(&name).map(str::to_owned)))
    };
    let binding = Binding {
        id: format!("field-{}", field.name),
        name: field.name.clone(),
        placeholder: field.placeholder.clone().unwrap_or_default(),
        required: field.required,
        form,
        error,
    };

    let label = field.label.clone().map(|text| {
        let required = field.required;
        view! {
            <label class="field__label" for=binding.id.clone()>
                {text}
                {required.then(|| view! { <span class="field__required">" *"</span> })}
            </label>
        }
    });

    let control = match field.kind {
        FieldKind::Select(options) => render_select(binding, options).into_any(),
        FieldKind::Textarea => render_textarea(binding).into_any(),
        kind @ (FieldKind::Text | FieldKind::Email | FieldKind::Password | FieldKind::Number) => {
            render_input(binding, kind).into_any()
        }
    };

    view! {
        <div class="field">
            {label}
            {control}
            <Show when=move || error.with(Option::is_some)>
                <p class="field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

fn render_input(binding: Binding, kind: FieldKind) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let is_password = kind == FieldKind::Password;
    let pattern = (kind == FieldKind::Number).then_some("[0-9]*");
    let input_mode = kind.input_mode();
    let kind = StoredValue::new(kind);

    let on_input = {
        let binding = binding.clone();
        move |ev: leptos::ev::Event| {
            let edit = event_target_value(&ev);
            match kind.with_value(|k| k.settle_edit(edit, &binding.stored())) {
                Ok(value) => binding.write(value),
                Err(restore) => restore_input(&ev, &restore),
            }
        }
    };

    view! {
        <div class="field__control">
            <input
                id=binding.id.clone()
                name=binding.name.clone()
                class="field__input"
                type=move || kind.with_value(|k| k.input_type(revealed.get()))
                inputmode=input_mode
                pattern=pattern
                placeholder=binding.placeholder.clone()
                aria-required=if binding.required { "true" } else { "false" }
                aria-invalid=binding.invalid()
                prop:value=binding.value()
                on:input=on_input
            />
            {is_password
                .then(|| {
                    view! {
                        <button
                            type="button"
                            class="field__reveal"
                            aria-label=move || if revealed.get() { "Hide password" } else { "Show password" }
                            on:click=move |_| revealed.update(|r| *r = !*r)
                        >
                            {move || if revealed.get() { "Hide" } else { "Show" }}
                        </button>
                    }
                })}
        </div>
    }
}

/// Put a rejected edit back to the stored value; the signal did not change,
/// so `prop:value` will not rerun on its own.
#[cfg(feature = "hydrate")]
fn restore_input(ev: &leptos::ev::Event, value: &str) {
    event_target::<web_sys::HtmlInputElement>(ev).set_value(value);
}

#[cfg(not(feature = "hydrate"))]
fn restore_input(_ev: &leptos::ev::Event, _value: &str) {}

fn render_select(binding: Binding, options: Vec<SelectOption>) -> impl IntoView {
    let prompt = if binding.placeholder.is_empty() { "Select an option".to_owned() } else { binding.placeholder.clone() };
    let on_change = {
        let binding = binding.clone();
        move |ev: leptos::ev::Event| binding.write(event_target_value(&ev))
    };

    view! {
        <select
            id=binding.id.clone()
            name=binding.name.clone()
            class="field__input field__input--select"
            aria-required=if binding.required { "true" } else { "false" }
            aria-invalid=binding.invalid()
            prop:value=binding.value()
            on:change=on_change
        >
            <option value="">{prompt}</option>
            {options
                .into_iter()
                .map(|option| view! { <option value=option.value>{option.label}</option> })
                .collect_view()}
        </select>
    }
}

fn render_textarea(binding: Binding) -> impl IntoView {
    let on_input = {
        let binding = binding.clone();
        move |ev: leptos::ev::Event| binding.write(event_target_value(&ev))
    };

    view! {
        <textarea
            id=binding.id.clone()
            name=binding.name.clone()
            class="field__input field__input--textarea"
            placeholder=binding.placeholder.clone()
            aria-required=if binding.required { "true" } else { "false" }
            aria-invalid=binding.invalid()
            prop:value=binding.value()
            on:input=on_input
        ></textarea>
    }
}
