//! Drives a navigation to completion: resolve, guard, follow redirects.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::error::NavigationError;
use crate::net::auth::AuthBackend;
use crate::router::guard::{NavigationDecision, check_navigation};
use crate::router::routes::{Resolution, ResolvedRoute, resolve};
use crate::state::session::Session;
use crate::util::storage::KeyValueStore;

/// Redirect hops allowed before a navigation is abandoned.
pub const MAX_REDIRECTS: usize = 8;

/// Resolve `full_path` to the route that should finally render.
///
/// Catch-all and guard redirects are followed and guarded in turn.
///
/// # Errors
///
/// Returns [`NavigationError::TooManyRedirects`] after [`MAX_REDIRECTS`] hops.
pub async fn navigate<B, S>(session: &Session<B, S>, full_path: &str) -> Result<ResolvedRoute, NavigationError>
where
    B: AuthBackend + 'static,
    S: KeyValueStore + 'static,
{
    let mut target = full_path.to_owned();
    for _ in 0..=MAX_REDIRECTS {
        let route = match resolve(&target) {
            Resolution::Matched(route) => route,
            Resolution::Redirect(next) => {
                target = next;
                continue;
            }
        };
        match check_navigation(&route, session).await {
            NavigationDecision::Allow => return Ok(route),
            NavigationDecision::Redirect(dest) => {
                leptos::logging::log!("guard redirect {} -> {}", route.full_path, dest.href());
                target = dest.href();
            }
        }
    }
    Err(NavigationError::TooManyRedirects { path: full_path.to_owned() })
}
