//! Build-time configuration for the remote auth service.
//!
//! The only knob is the base URL of the auth API, captured from
//! `BIKEMARKET_API_URL` when the crate is compiled. An unset variable means
//! the API is served from the same origin as the app.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `BIKEMARKET_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "/";

/// Base URL of the remote auth API, fixed at compile time.
pub const API_BASE_URL: &str = match option_env!("BIKEMARKET_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

/// Fully-qualified URLs for the four auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthEndpoints {
    pub login: String,
    pub logout: String,
    pub register: String,
    pub me: String,
}

impl AuthEndpoints {
    /// Derive endpoint URLs from an API base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            login: join_url(base_url, "api/auth/login"),
            logout: join_url(base_url, "api/auth/logout"),
            register: join_url(base_url, "api/auth/register"),
            me: join_url(base_url, "api/auth/me"),
        }
    }
}

impl Default for AuthEndpoints {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

/// Join `base` and `path` with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
