//! Session store: the single source of truth for who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component owns one `RwSignal<SessionStore>` and provides it as
//! context. The store starts `Unknown`, the startup probe resolves it exactly
//! once, and afterwards only `login` and `logout` move it. Route guards and
//! the header read it; login/register pages and the logout button write it.
//!
//! RACES
//! =====
//! Every `login` bumps a generation counter. A logout remembers the
//! generation it started under and is dropped on settle if a login landed in
//! between, so a slow logout never signs out a fresh session. A probe result
//! only applies while the state is still `Unknown`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::AuthApi;
use crate::net::types::Session;

/// Observable authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Startup probe has not answered yet.
    #[default]
    Unknown,
    Authenticated(Session),
    Anonymous,
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Unknown | Self::Anonymous => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// Proof that a logout started under a given login generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "pass the ticket to `finish_logout` once the request settles"]
pub struct LogoutTicket {
    generation: u64,
}

/// Session state plus the bookkeeping that keeps concurrent updates ordered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    state: SessionState,
    generation: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    /// Apply the startup probe outcome. Returns `false` when the state had
    /// already left `Unknown` (a login beat the probe).
    pub fn resolve_probe(&mut self, probed: Option<Session>) -> bool {
        if !self.state.is_unknown() {
            return false;
        }
        self.state = match probed {
            Some(session) => SessionState::Authenticated(session),
            None => SessionState::Anonymous,
        };
        true
    }

    /// Replace whatever is current with `session`.
    pub fn login(&mut self, session: Session) {
        self.generation += 1;
        self.state = SessionState::Authenticated(session);
    }

    pub fn begin_logout(&self) -> LogoutTicket {
        LogoutTicket { generation: self.generation }
    }

    /// Clear the session once the logout request settled. Returns `false`
    /// when a login happened after the ticket was issued.
    pub fn finish_logout(&mut self, ticket: LogoutTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.state = SessionState::Anonymous;
        true
    }
}

/// Ask the auth service whether the ambient cookie maps to a session.
/// Any failure means "no session".
pub async fn probe_session<A: AuthApi>(api: &A) -> Option<Session> {
    match api.me().await {
        Ok(session) => {
            log::info!("session probe: signed in as {}", session.id);
            Some(session)
        }
        Err(e) => {
            log::debug!("session probe: no session ({e})");
            None
        }
    }
}

/// Run the startup probe and resolve `store`.
pub async fn run_probe<A: AuthApi>(api: &A, store: RwSignal<SessionStore>) {
    let probed = probe_session(api).await;
    store.update(|s| {
        if !s.resolve_probe(probed) {
            log::debug!("session probe: result ignored, state already resolved");
        }
    });
}

/// Sign out remotely, then clear the local session whatever the outcome.
pub async fn logout<A: AuthApi>(api: &A, store: RwSignal<SessionStore>) {
    let ticket = store.with_untracked(SessionStore::begin_logout);
    if let Err(e) = api.logout().await {
        log::warn!("logout request failed: {e}");
    }
    store.update(|s| {
        if !s.finish_logout(ticket) {
            log::debug!("logout superseded by a newer login");
        }
    });
}
