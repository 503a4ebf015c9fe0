//! In-memory [`AuthApi`] used by unit tests.

use std::cell::{Cell, RefCell};

use super::api::{ApiError, AuthApi};
use super::types::{LoginRequest, RegisterRequest, Role, Session};

pub fn ana() -> Session {
    Session { id: "u1".to_owned(), name: "Ana".to_owned(), email: "a@x.com".to_owned(), role: Role::Buyer }
}

pub fn offline() -> ApiError {
    ApiError::Transport("offline".to_owned())
}

/// Scripted auth service that records every call it receives.
pub struct FakeAuthApi {
    pub me_result: Result<Session, ApiError>,
    pub login_result: Result<Session, ApiError>,
    /// `None` echoes the request back as a session with id `"new"`.
    pub register_result: Option<Result<Session, ApiError>>,
    pub logout_result: Result<(), ApiError>,
    pub calls: Cell<usize>,
    pub last_login: RefCell<Option<LoginRequest>>,
    pub last_register: RefCell<Option<RegisterRequest>>,
}

impl Default for FakeAuthApi {
    fn default() -> Self {
        Self {
            me_result: Err(offline()),
            login_result: Err(offline()),
            register_result: Some(Err(offline())),
            logout_result: Err(offline()),
            calls: Cell::new(0),
            last_login: RefCell::new(None),
            last_register: RefCell::new(None),
        }
    }
}

impl FakeAuthApi {
    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl AuthApi for FakeAuthApi {
    async fn me(&self) -> Result<Session, ApiError> {
        self.record();
        self.me_result.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        self.record();
        *self.last_login.borrow_mut() = Some(request.clone());
        self.login_result.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        self.record();
        *self.last_register.borrow_mut() = Some(request.clone());
        match &self.register_result {
            Some(result) => result.clone(),
            None => Ok(Session {
                id: "new".to_owned(),
                name: request.name.clone(),
                email: request.email.clone(),
                role: request.role,
            }),
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record();
        self.logout_result.clone()
    }
}
