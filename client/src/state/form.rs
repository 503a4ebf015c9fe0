//! Per-form input state: values, field errors, general error, loading flag.
//!
//! DESIGN
//! ======
//! Owned by one page instance (inside an `RwSignal`) and dropped with it.
//! Editing a field clears only that field's error; a submit attempt replaces
//! every error with fresh validator output.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::api::ApiError;
use crate::util::validate::{FieldDescriptor, FieldErrors, FieldValues, validate};

/// Message shown when the request itself failed rather than being rejected.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: FieldValues,
    errors: FieldErrors,
    general: Option<String>,
    loading: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record an edit and clear that field's error.
    pub fn set_value(&mut self, name: &str, value: String) {
        self.errors.remove(name);
        self.values.insert(name.to_owned(), value);
    }

    /// Validate against `fields`. Returns `true` when the request may be
    /// sent, in which case the form is marked loading. A form that is
    /// already loading never starts a second request.
    pub fn begin_submit(&mut self, fields: &[FieldDescriptor]) -> bool {
        if self.loading {
            return false;
        }
        self.general = None;
        self.errors = validate(fields, &self.values);
        if !self.errors.is_empty() {
            return false;
        }
        self.loading = true;
        true
    }

    /// Settle a failed request: show `message`, keep every value.
    pub fn fail(&mut self, message: String) {
        self.general = Some(message);
        self.loading = false;
    }

    /// Settle a successful request.
    pub fn finish(&mut self) {
        self.loading = false;
    }
}

/// User-facing text for a failed login/register call.
///
/// A rejection shows the server's message, or `rejected_fallback` when it
/// sent none. Anything else is a transport-level problem.
pub fn failure_message(err: &ApiError, rejected_fallback: &str) -> String {
    match err {
        ApiError::Rejected { message } => message.clone().unwrap_or_else(|| rejected_fallback.to_owned()),
        ApiError::Transport(_) | ApiError::Status(_) | ApiError::Malformed(_) | ApiError::Unavailable => {
            GENERIC_FAILURE.to_owned()
        }
    }
}
