//! Wire DTOs for the remote auth API.
//!
//! DESIGN
//! ======
//! Every auth endpoint answers with the same envelope
//! (`{success, data?, message?}`); [`AuthEnvelope::into_session`] is the
//! single place that turns it into a complete [`Session`] or an error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::api::ApiError;

/// Marketplace role chosen at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Buyer,
    Seller,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Buyer, Role::Seller];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity returned by login, register and `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Response envelope shared by all auth endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthEnvelope {
    #[serde(default)]
    pub success: bool,
    /// Raw payload; decoded lazily so a bad payload reports as malformed
    /// rather than failing the whole envelope.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthEnvelope {
    /// Convert the envelope into a complete session.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Rejected`] when `success` is false.
    /// - [`ApiError::Malformed`] when the payload is missing, has missing
    ///   fields or an unknown role, or carries a blank `id`, `name` or
    ///   `email`.
    pub fn into_session(self) -> Result<Session, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected { message: self.message.filter(|m| !m.trim().is_empty()) });
        }
        let data = self.data.ok_or_else(|| ApiError::Malformed("missing session data".to_owned()))?;
        let session: Session = serde_json::from_value(data).map_err(|e| ApiError::Malformed(e.to_string()))?;
        for (field, value) in [("id", &session.id), ("name", &session.name), ("email", &session.email)] {
            if value.trim().is_empty() {
                return Err(ApiError::Malformed(format!("session {field} is empty")));
            }
        }
        Ok(session)
    }
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
