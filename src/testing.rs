//! Test doubles shared by unit tests across modules.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;
use uuid::Uuid;

use crate::error::ApiError;
use crate::net::auth::AuthBackend;
use crate::net::types::{Identity, LoginRequest, UserRole};

struct FakeState {
    me_result: RefCell<Result<Identity, ApiError>>,
    login_result: RefCell<Result<(), ApiError>>,
    logout_result: RefCell<Result<(), ApiError>>,
    me_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    me_calls: Cell<u32>,
    login_calls: Cell<u32>,
    logout_calls: Cell<u32>,
}

#[derive(Clone)]
pub(crate) struct FakeBackend(Rc<FakeState>);

impl FakeBackend {
    pub(crate) fn new(me_result: Result<Identity, ApiError>) -> Self {
        Self(Rc::new(FakeState {
            me_result: RefCell::new(me_result),
            login_result: RefCell::new(Ok(())),
            logout_result: RefCell::new(Ok(())),
            me_gates: RefCell::new(VecDeque::new()),
            me_calls: Cell::new(0),
            login_calls: Cell::new(0),
            logout_calls: Cell::new(0),
        }))
    }

    /// Backend that is unreachable for every call.
    pub(crate) fn offline() -> Self {
        let backend = Self::new(Err(ApiError::Transport("connection refused".to_owned())));
        backend.set_logout_result(Err(ApiError::Transport("connection refused".to_owned())));
        backend
    }

    pub(crate) fn set_me_result(&self, result: Result<Identity, ApiError>) {
        *self.0.me_result.borrow_mut() = result;
    }

    pub(crate) fn set_login_result(&self, result: Result<(), ApiError>) {
        *self.0.login_result.borrow_mut() = result;
    }

    pub(crate) fn set_logout_result(&self, result: Result<(), ApiError>) {
        *self.0.logout_result.borrow_mut() = result;
    }

    /// Hold the next ungated `me` call until the returned sender fires.
    /// Gates are consumed in the order they were created.
    pub(crate) fn gate_me(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.0.me_gates.borrow_mut().push_back(rx);
        tx
    }

    pub(crate) fn me_calls(&self) -> u32 {
        self.0.me_calls.get()
    }

    pub(crate) fn login_calls(&self) -> u32 {
        self.0.login_calls.get()
    }

    pub(crate) fn logout_calls(&self) -> u32 {
        self.0.logout_calls.get()
    }
}

impl AuthBackend for FakeBackend {
    async fn login(&self, _credentials: &LoginRequest) -> Result<(), ApiError> {
        self.0.login_calls.set(self.0.login_calls.get() + 1);
        self.0.login_result.borrow().clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.0.logout_calls.set(self.0.logout_calls.get() + 1);
        self.0.logout_result.borrow().clone()
    }

    async fn me(&self) -> Result<Identity, ApiError> {
        self.0.me_calls.set(self.0.me_calls.get() + 1);
        let gate = self.0.me_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.0.me_result.borrow().clone()
    }
}

pub(crate) fn remote_identity() -> Identity {
    Identity {
        id: Uuid::from_u128(0x42).to_string(),
        login: "a.smirnova".to_owned(),
        firstname: "Анна".to_owned(),
        lastname: "Смирнова".to_owned(),
        middlename: None,
        role: UserRole::Manager,
    }
}
