//! Identity sources composed by the session store.
//!
//! DESIGN
//! ======
//! The real backend identity and the demo/offline mock identity are two
//! separate sources behind one trait. The session asks the remote source
//! first and only consults the local fallback when that fails; the fallback
//! is a stand-in identity source, not a cache of the remote one.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use uuid::Uuid;

use crate::config::MOCK_ROLE_STORAGE_KEY;
use crate::error::ApiError;
use crate::net::auth::AuthBackend;
use crate::net::types::{Identity, UserRole};
use crate::util::storage::KeyValueStore;

#[allow(async_fn_in_trait)]
pub trait IdentitySource {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Resolve the current identity. `Ok(None)` means "nobody", `Err` means
    /// the source could not answer.
    async fn resolve(&self) -> Result<Option<Identity>, ApiError>;
}

/// Identity bound to the server session cookie (`GET /auth/me`).
#[derive(Clone, Debug)]
pub struct RemoteIdentitySource<B> {
    backend: B,
}

impl<B: AuthBackend> RemoteIdentitySource<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: AuthBackend> IdentitySource for RemoteIdentitySource<B> {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn resolve(&self) -> Result<Option<Identity>, ApiError> {
        self.backend.me().await.map(Some)
    }
}

/// Fixed mock identity for a previously selected role.
#[derive(Clone, Debug)]
pub struct LocalFallbackIdentitySource<S> {
    storage: S,
}

impl<S: KeyValueStore> LocalFallbackIdentitySource<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Role tag persisted under `wms.mock.role`, if it is a known role.
    pub fn stored_role(&self) -> Option<UserRole> {
        self.storage.get(MOCK_ROLE_STORAGE_KEY).as_deref().and_then(UserRole::from_tag)
    }

    pub fn store_role(&self, role: UserRole) {
        self.storage.set(MOCK_ROLE_STORAGE_KEY, role.as_str());
    }

    pub fn clear_role(&self) {
        self.storage.remove(MOCK_ROLE_STORAGE_KEY);
    }
}

impl<S: KeyValueStore> IdentitySource for LocalFallbackIdentitySource<S> {
    fn name(&self) -> &'static str {
        "local-fallback"
    }

    async fn resolve(&self) -> Result<Option<Identity>, ApiError> {
        Ok(self.stored_role().map(mock_identity))
    }
}

/// Deterministic demo identity for `role`.
#[must_use]
pub fn mock_identity(role: UserRole) -> Identity {
    let (id, firstname, lastname, middlename) = match role {
        UserRole::Manager => (1, "Иван", "Петров", "Иванович"),
        UserRole::StoreKeeper => (2, "Пётр", "Сидоров", "Сергеевич"),
    };
    Identity {
        id: Uuid::from_u128(id).to_string(),
        login: format!("{}.{}", firstname.to_lowercase(), lastname.to_lowercase()),
        firstname: firstname.to_owned(),
        lastname: lastname.to_owned(),
        middlename: Some(middlename.to_owned()),
        role,
    }
}
