//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and identity-aware pages to decide whether the
//! user may see a route. One [`Session`] is created at startup and handed to
//! the component tree through context; nothing else mutates it.
//!
//! DESIGN
//! ======
//! Establishing a session (`ensure_me_loaded`, `login`) runs as a shared
//! pending operation: the first caller starts it, concurrent callers await
//! the same handle, so `GET /auth/me` is issued once per establishment.
//! Every identity-changing operation bumps an epoch; an operation that
//! finishes after being superseded (e.g. a load overtaken by `logout`)
//! drops its result instead of resurrecting the old identity.
//!
//! ERROR HANDLING
//! ==============
//! Identity-fetch failures fall back to the mock role and are only logged.
//! Login failures are recorded and returned. Logout failures are reported in
//! [`LogoutOutcome`] but never block clearing local state.
//!
//! No timeout is applied to backend calls; a hung `me` request keeps the
//! first guarded navigation waiting.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::error::{ApiError, SessionError};
use crate::net::auth::AuthBackend;
use crate::net::types::{Identity, LoginRequest, UserRole};
use crate::state::identity::{IdentitySource, LocalFallbackIdentitySource, RemoteIdentitySource, mock_identity};
use crate::util::storage::KeyValueStore;

type PendingOp = Shared<LocalBoxFuture<'static, Result<(), SessionError>>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Reserved. Session operations absorb failures and settle in `Loaded`;
    /// `ensure_me_loaded` treats this like `Idle`.
    Error,
}

/// Point-in-time copy of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub identity: Option<Identity>,
    pub load_state: LoadState,
    pub error: Option<String>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.identity.as_ref().map(|me| me.role)
    }
}

/// Result of [`Session::logout`]. Local state is cleared in both cases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// The server session was ended too.
    Confirmed,
    /// The remote call failed; only local state was cleared.
    LocalOnly(ApiError),
}

impl LogoutOutcome {
    #[must_use]
    pub fn remote_succeeded(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// Shared handle to the session. Clones refer to the same session.
pub struct Session<B, S> {
    inner: Rc<SessionInner<B, S>>,
}

impl<B, S> Clone for Session<B, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

struct SessionInner<B, S> {
    remote: RemoteIdentitySource<B>,
    fallback: LocalFallbackIdentitySource<S>,
    state: RefCell<SessionSnapshot>,
    pending: RefCell<Option<PendingOp>>,
    epoch: Cell<u64>,
}

impl<B, S> Session<B, S>
where
    B: AuthBackend + 'static,
    S: KeyValueStore + 'static,
{
    /// Empty session (`Idle`, no identity).
    pub fn new(backend: B, storage: S) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                remote: RemoteIdentitySource::new(backend),
                fallback: LocalFallbackIdentitySource::new(storage),
                state: RefCell::new(SessionSnapshot::default()),
                pending: RefCell::new(None),
                epoch: Cell::new(0),
            }),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.inner.state.borrow().identity.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.inner.state.borrow().role()
    }

    pub fn load_state(&self) -> LoadState {
        self.inner.state.borrow().load_state
    }

    pub fn error(&self) -> Option<String> {
        self.inner.state.borrow().error.clone()
    }

    /// Load the identity once per session establishment.
    ///
    /// Returns immediately when already `Loaded`; once loaded, the session is
    /// trusted until `login`, `select_role`, `logout` or `reset`. While an
    /// establishment is in flight, waits for it, and for any operation that
    /// supersedes it, until the session settles or is reset.
    pub async fn ensure_me_loaded(&self) {
        if self.load_state() == LoadState::Loaded {
            return;
        }
        let pending = self.inner.pending.borrow().clone();
        let mut op = match pending {
            Some(op) => op,
            None => self.start_load(),
        };
        loop {
            // Loads never fail; a login's error belongs to its caller.
            let _ = op.clone().await;
            if self.load_state() == LoadState::Loaded {
                return;
            }
            let next = self.inner.pending.borrow().clone();
            match next {
                Some(next) if !next.ptr_eq(&op) => op = next,
                _ => return,
            }
        }
    }

    fn start_load(&self) -> PendingOp {
        let epoch = self.inner.begin();
        let inner = Rc::clone(&self.inner);
        let op = async move {
            let identity = inner.resolve_identity().await;
            inner.finish(epoch, |state| state.identity = identity);
            Ok(())
        }
        .boxed_local()
        .shared();
        *self.inner.pending.borrow_mut() = Some(op.clone());
        op
    }

    /// Log in against the backend and load the resulting identity.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LoginFailed`] when either the login call or the
    /// follow-up identity fetch fails. The message is also recorded on the
    /// session. The session ends in `Loaded` either way.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<(), SessionError> {
        let epoch = self.inner.begin();
        let inner = Rc::clone(&self.inner);
        let credentials = credentials.clone();
        let op = async move {
            let backend = inner.remote.backend();
            let result = async {
                backend.login(&credentials).await?;
                backend.me().await
            }
            .await;

            match result {
                Ok(identity) => {
                    leptos::logging::log!("logged in as {}", identity.login);
                    inner.finish(epoch, |state| {
                        state.identity = Some(identity);
                        state.error = None;
                    });
                    Ok(())
                }
                Err(source) => {
                    let message = source.user_message();
                    leptos::logging::warn!("login failed: {message}");
                    let err = SessionError::LoginFailed { message: message.clone(), source };
                    inner.finish(epoch, |state| state.error = Some(message));
                    Err(err)
                }
            }
        }
        .boxed_local()
        .shared();
        *self.inner.pending.borrow_mut() = Some(op.clone());
        op.await
    }

    /// Switch to the mock identity for `role` without a backend.
    pub fn select_role(&self, role: UserRole) {
        self.inner.fallback.store_role(role);
        let epoch = self.inner.bump_epoch();
        self.inner.finish(epoch, |state| {
            state.identity = Some(mock_identity(role));
            state.error = None;
        });
    }

    /// End the server session (best effort) and clear local state.
    pub async fn logout(&self) -> LogoutOutcome {
        let remote = self.inner.remote.backend().logout().await;
        self.reset();
        match remote {
            Ok(()) => LogoutOutcome::Confirmed,
            Err(err) => {
                leptos::logging::warn!("remote logout failed, cleared local session only: {err}");
                LogoutOutcome::LocalOnly(err)
            }
        }
    }

    /// Clear identity, error and the stored mock role; back to `Idle`.
    pub fn reset(&self) {
        self.inner.fallback.clear_role();
        self.inner.bump_epoch();
        *self.inner.pending.borrow_mut() = None;
        *self.inner.state.borrow_mut() = SessionSnapshot::default();
    }
}

impl<B, S> SessionInner<B, S>
where
    B: AuthBackend,
    S: KeyValueStore,
{
    fn bump_epoch(&self) -> u64 {
        let next = self.epoch.get().wrapping_add(1);
        self.epoch.set(next);
        next
    }

    /// Start a new establishment operation, superseding any in flight.
    fn begin(&self) -> u64 {
        let epoch = self.bump_epoch();
        self.state.borrow_mut().load_state = LoadState::Loading;
        epoch
    }

    /// Apply an operation's result and settle in `Loaded`, unless a newer
    /// operation has started since `epoch`.
    fn finish(&self, epoch: u64, apply: impl FnOnce(&mut SessionSnapshot)) {
        if self.epoch.get() != epoch {
            return;
        }
        let mut state = self.state.borrow_mut();
        apply(&mut state);
        state.load_state = LoadState::Loaded;
        drop(state);
        *self.pending.borrow_mut() = None;
    }

    /// Remote identity first, local mock role second.
    async fn resolve_identity(&self) -> Option<Identity> {
        match self.remote.resolve().await {
            Ok(Some(identity)) => return Some(identity),
            Ok(None) => {}
            Err(err) => leptos::logging::warn!("{} identity unavailable: {err}", self.remote.name()),
        }

        match self.fallback.resolve().await {
            Ok(Some(identity)) => {
                leptos::logging::log!("using {} identity for role {}", self.fallback.name(), identity.role.as_str());
                Some(identity)
            }
            Ok(None) => None,
            Err(err) => {
                leptos::logging::warn!("{} identity unavailable: {err}", self.fallback.name());
                None
            }
        }
    }
}
