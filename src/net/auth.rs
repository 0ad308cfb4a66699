//! Auth endpoints and the backend contract the session store consumes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::query::Query;
use crate::net::types::{Identity, LoginRequest};

pub(crate) const LOGIN_PATH: &str = "/auth/login";
pub(crate) const LOGOUT_PATH: &str = "/auth/logout";
pub(crate) const ME_PATH: &str = "/auth/me";

/// Cookie-session auth operations.
///
/// The browser runs futures on a single thread, so implementations are not
/// required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Establish a server session. Fails on bad credentials or transport errors.
    async fn login(&self, credentials: &LoginRequest) -> Result<(), ApiError>;

    /// End the server session.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Identity bound to the current session cookie.
    async fn me(&self) -> Result<Identity, ApiError>;
}

#[derive(Clone, Debug, Default)]
pub struct AuthApi {
    http: HttpClient,
}

impl AuthApi {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl AuthBackend for AuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<(), ApiError> {
        self.http.post_unit(LOGIN_PATH, Some(credentials)).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.http.post_unit::<()>(LOGOUT_PATH, None).await
    }

    async fn me(&self) -> Result<Identity, ApiError> {
        self.http.get(ME_PATH, &Query::new()).await
    }
}
