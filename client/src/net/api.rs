//! REST client for the remote auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sent with
//! ambient credentials so the session cookie travels with them.
//! Server-side (SSR) and tests: [`HttpAuthApi`] answers every call with
//! [`ApiError::Unavailable`]; only the browser talks to the auth service.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers decide how a failure
//! degrades: the session store falls back to anonymous, forms show a general
//! message. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::AuthEnvelope;
use super::types::{LoginRequest, RegisterRequest, Session};
use crate::config::AuthEndpoints;

/// Failure of a single auth API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("network request failed: {0}")]
    Transport(String),
    /// The service answered `success: false`.
    #[error("request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
    /// Non-success HTTP status without a readable envelope.
    #[error("unexpected response status: {0}")]
    Status(u16),
    /// The response body could not be read as a complete envelope.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Called outside the browser build.
    #[error("auth API is only available in the browser")]
    Unavailable,
}

/// The four operations of the remote auth service.
///
/// Implemented over HTTP by [`HttpAuthApi`]; tests substitute an in-memory
/// fake. Futures are not required to be `Send` because the browser runs them
/// on its single event loop.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `GET /api/auth/me`: resolve the ambient cookie to a session.
    async fn me(&self) -> Result<Session, ApiError>;
    /// `POST /api/auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError>;
    /// `POST /api/auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError>;
    /// `GET /api/auth/logout`. Any response counts as success.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// HTTP implementation of [`AuthApi`], provided to the view tree via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpAuthApi {
    endpoints: AuthEndpoints,
}

impl HttpAuthApi {
    pub fn new(endpoints: AuthEndpoints) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &AuthEndpoints {
        &self.endpoints
    }
}

impl AuthApi for HttpAuthApi {
    async fn me(&self) -> Result<Session, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.endpoints.me)
                .credentials(web_sys::RequestCredentials::Include)
                .build()
                .map_err(transport)?;
            send_for_session(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.endpoints.login)
                .credentials(web_sys::RequestCredentials::Include)
                .json(request)
                .map_err(transport)?;
            send_for_session(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.endpoints.register)
                .credentials(web_sys::RequestCredentials::Include)
                .json(request)
                .map_err(transport)?;
            send_for_session(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            gloo_net::http::Request::get(&self.endpoints.logout)
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(transport)?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn send_for_session(request: gloo_net::http::Request) -> Result<Session, ApiError> {
    let resp = request.send().await.map_err(transport)?;
    let ok = resp.ok();
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    decode_session_body(ok, status, &body)
}

/// Decode a response body into a session.
///
/// The envelope is read regardless of HTTP status because the service
/// reports rejected credentials as `success: false` on 4xx responses.
#[cfg(any(test, feature = "hydrate"))]
fn decode_session_body(ok: bool, status: u16, body: &str) -> Result<Session, ApiError> {
    match serde_json::from_str::<AuthEnvelope>(body) {
        Ok(envelope) => envelope.into_session(),
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Malformed(e.to_string())),
    }
}
