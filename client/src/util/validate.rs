//! Field descriptors and required-field validation shared by all forms.
//!
//! DESIGN
//! ======
//! A form is a static list of [`FieldDescriptor`]s plus a name → value map.
//! [`validate`] is pure: it only reads both and returns a name → message map,
//! so forms can re-run it on every submit without side effects.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

/// Current string value of each field, keyed by field name.
pub type FieldValues = BTreeMap<String, String>;

/// Validation message of each failing field, keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// One entry of a select input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// Closed set of input kinds a form can render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    /// Digits only; other input is ignored.
    Number,
    Select(Vec<SelectOption>),
    Textarea,
}

impl FieldKind {
    /// Whether an edit producing `value` should be accepted.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Number => value.chars().all(|c| c.is_ascii_digit()),
            Self::Text | Self::Email | Self::Password | Self::Select(_) | Self::Textarea => true,
        }
    }

    /// Resolve an edit against the stored value: `Ok` with the value to
    /// store, or `Err` with the stored value the control must show again.
    pub fn settle_edit(&self, edit: String, stored: &str) -> Result<String, String> {
        if self.accepts(&edit) { Ok(edit) } else { Err(stored.to_owned()) }
    }

    /// HTML `type` attribute for `<input>`-backed kinds. A revealed password
    /// renders as plain text.
    pub fn input_type(&self, revealed: bool) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password if !revealed => "password",
            Self::Text | Self::Password | Self::Number | Self::Select(_) | Self::Textarea => "text",
        }
    }

    /// `inputmode` hint for on-screen keyboards.
    pub fn input_mode(&self) -> Option<&'static str> {
        match self {
            Self::Number => Some("numeric"),
            Self::Email => Some("email"),
            _ => None,
        }
    }
}

/// Static description of one form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: Option<String>,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), label: None, kind, required: false, placeholder: None }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Label when present, otherwise the field name.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Report every required field whose value is absent, empty, or blank.
pub fn validate(fields: &[FieldDescriptor], values: &FieldValues) -> FieldErrors {
    fields
        .iter()
        .filter(|field| field.required)
        .filter(|field| values.get(&field.name).is_none_or(|v| v.trim().is_empty()))
        .map(|field| (field.name.clone(), format!("{} is required", field.display_name())))
        .collect()
}
