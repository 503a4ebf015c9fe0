//! Route guard decisions for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes (`/product/:id`) render only for an authenticated session.
//! Anonymous visitors are sent to `/login?return_to=<path>` so login can bring
//! them back. While the startup probe is still running the guard waits
//! instead of redirecting, so a valid session never flashes the login page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, SessionStore};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const RETURN_TO_PARAM: &str = "return_to";
pub const HOME_PATH: &str = "/";

/// Outcome of evaluating the guard for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Probe still running; show a neutral placeholder.
    Pending,
    /// Navigate to this login path.
    Redirect(String),
}

pub fn guard_decision(state: &SessionState, target: &str) -> GuardDecision {
    match state {
        SessionState::Authenticated(_) => GuardDecision::Render,
        SessionState::Unknown => GuardDecision::Pending,
        SessionState::Anonymous => GuardDecision::Redirect(login_redirect_path(target)),
    }
}

/// Login path carrying `target` as the return destination.
pub fn login_redirect_path(target: &str) -> String {
    if is_safe_return_path(target) && target != HOME_PATH {
        format!("{LOGIN_PATH}?{RETURN_TO_PARAM}={target}")
    } else {
        LOGIN_PATH.to_owned()
    }
}

/// Destination after a successful login; `/` unless `raw` is a safe
/// in-app path.
pub fn sanitize_return_to(raw: Option<&str>) -> String {
    match raw {
        Some(path) if is_safe_return_path(path) && !is_auth_form(path) => path.to_owned(),
        _ => HOME_PATH.to_owned(),
    }
}

/// Sign-in and sign-up screens make no sense as a post-login destination.
fn is_auth_form(path: &str) -> bool {
    let path = path.trim_end_matches('/');
    path == LOGIN_PATH || path == REGISTER_PATH
}

/// Same-origin absolute path made only of characters that need no escaping
/// inside a query value. Rejects `//host` and backslash tricks.
fn is_safe_return_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && path.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.'))
}

/// Redirect whenever the guard decides so for the current location.
pub fn install_guard_redirect<F>(session: RwSignal<SessionStore>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let decision = session.with(|s| guard_decision(s.state(), &pathname.get()));
        if let GuardDecision::Redirect(to) = decision {
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
