//! Pre-navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before every navigation, including the catch-all redirect. Only
//! routes marked `requires_auth` and the login route consult the session;
//! everything else passes without touching it.
//!
//! DESIGN
//! ======
//! The guard awaits `ensure_me_loaded`, so the first guarded navigation
//! waits for identity resolution and later ones see a settled session.
//! Redirects are returned as data; the caller performs them.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::auth::AuthBackend;
use crate::router::routes::{DEFAULT_ROUTE, REDIRECT_QUERY_KEY, ResolvedRoute, RouteName};
use crate::state::session::Session;
use crate::util::storage::KeyValueStore;

/// Where a guard redirect points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Path(String),
    Named { name: RouteName, query: Vec<(String, String)> },
}

impl Destination {
    /// Location string for this destination, query encoded.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::Path(path) => path.clone(),
            Self::Named { name, query } => {
                let path = name.def().pattern;
                if query.is_empty() {
                    return path.to_owned();
                }
                let encoded = url::form_urlencoded::Serializer::new(String::new()).extend_pairs(query).finish();
                format!("{path}?{encoded}")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect(Destination),
}

/// Decide whether navigation to `to` may proceed.
///
/// - protected route, no identity: redirect to login carrying `to.full_path`
/// - login route, identity present: redirect to the single-valued `redirect`
///   query parameter, or `/`
pub async fn check_navigation<B, S>(to: &ResolvedRoute, session: &Session<B, S>) -> NavigationDecision
where
    B: AuthBackend + 'static,
    S: KeyValueStore + 'static,
{
    let is_login = to.name == RouteName::Login;
    if !to.meta.requires_auth && !is_login {
        return NavigationDecision::Allow;
    }

    session.ensure_me_loaded().await;
    let authenticated = session.is_authenticated();

    if to.meta.requires_auth && !authenticated {
        return NavigationDecision::Redirect(Destination::Named {
            name: RouteName::Login,
            query: vec![(REDIRECT_QUERY_KEY.to_owned(), to.full_path.clone())],
        });
    }

    if is_login && authenticated {
        let target = to.query.single(REDIRECT_QUERY_KEY).unwrap_or(DEFAULT_ROUTE);
        return NavigationDecision::Redirect(Destination::Path(target.to_owned()));
    }

    NavigationDecision::Allow
}
