//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route renders through [`Guarded`], which drives the navigation
//! through the route guard before showing the page. Unknown paths redirect
//! to `/`, which is guarded like any other route.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{ParamSegment, StaticSegment};

use crate::config::ApiConfig;
use crate::net::WmsApi;
use crate::net::auth::AuthApi;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, section::SectionPage};
use crate::router::routes::{DEFAULT_ROUTE, RouteName};
use crate::state::session::{Session, SessionSnapshot};
use crate::util::storage::BrowserStorage;

pub type AppSession = Session<AuthApi, BrowserStorage>;

/// Context handle for the session. The session is `Rc`-based, so it lives in
/// thread-local arena storage.
pub type SessionHandle = StoredValue<AppSession, LocalStorage>;

/// Root application component.
///
/// Provides the API facade, the session, and a reactive session snapshot that
/// pages refresh after they change the session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = WmsApi::new(ApiConfig::from_build_env());
    let session: AppSession = Session::new(api.auth.clone(), BrowserStorage);

    provide_context(api);
    provide_context::<SessionHandle>(StoredValue::new_local(session));
    provide_context(RwSignal::new(SessionSnapshot::default()));

    view! {
        <Title text="WMS"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=DEFAULT_ROUTE/> }>
                <Route path=StaticSegment("") view=|| view! { <Guarded name=RouteName::Dashboard/> }/>
                <Route path=StaticSegment("login") view=|| view! { <Guarded name=RouteName::Login/> }/>
                <Route path=StaticSegment("profile") view=|| view! { <Guarded name=RouteName::Profile/> }/>
                <Route path=StaticSegment("documents") view=|| view! { <Guarded name=RouteName::Documents/> }/>
                <Route
                    path=(StaticSegment("documents"), StaticSegment("new"))
                    view=|| view! { <Guarded name=RouteName::DocumentCreate/> }
                />
                <Route
                    path=(StaticSegment("documents"), ParamSegment("id"))
                    view=|| view! { <Guarded name=RouteName::DocumentDetail/> }
                />
                <Route
                    path=(StaticSegment("documents"), ParamSegment("id"), StaticSegment("edit"))
                    view=|| view! { <Guarded name=RouteName::DocumentEdit/> }
                />
                <Route path=StaticSegment("stock") view=|| view! { <Guarded name=RouteName::Stock/> }/>
                <Route
                    path=(StaticSegment("items"), ParamSegment("id"))
                    view=|| view! { <Guarded name=RouteName::ItemDetail/> }
                />
                <Route path=StaticSegment("nomenclature") view=|| view! { <Guarded name=RouteName::Nomenclature/> }/>
                <Route path=StaticSegment("suppliers") view=|| view! { <Guarded name=RouteName::Suppliers/> }/>
                <Route
                    path=(StaticSegment("suppliers"), ParamSegment("id"))
                    view=|| view! { <Guarded name=RouteName::SupplierDetail/> }
                />
                <Route path=StaticSegment("warehouses") view=|| view! { <Guarded name=RouteName::Warehouses/> }/>
                <Route
                    path=(StaticSegment("warehouses"), ParamSegment("id"))
                    view=|| view! { <Guarded name=RouteName::WarehouseDetail/> }
                />
                <Route path=StaticSegment("reports") view=|| view! { <Guarded name=RouteName::Reports/> }/>
            </Routes>
        </Router>
    }
}

/// Join the router's pathname and search string into a full path.
pub(crate) fn full_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

/// Whether the router still shows `requested`. A guard result for a location
/// the user has already left must not redirect or render.
pub(crate) fn still_requested(requested: &str, pathname: &str, search: &str) -> bool {
    full_path(pathname, search) == requested
}

/// Runs the current location through the navigator and renders the page for
/// `name` once the guard allows it. Guard redirects replace the history entry.
#[component]
fn Guarded(name: RouteName) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let snapshot = expect_context::<RwSignal<SessionSnapshot>>();
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);
    let go = use_navigate();
    let allowed = RwSignal::new(false);

    Effect::new(move || {
        let requested = full_path(&pathname.get(), &search.get());
        allowed.set(false);

        #[cfg(feature = "csr")]
        {
            let session = session.get_value();
            let go = go.clone();
            leptos::task::spawn_local(async move {
                let result = crate::router::navigation::navigate(&session, &requested).await;
                snapshot.set(session.snapshot());
                if !still_requested(&requested, &pathname.get_untracked(), &search.get_untracked()) {
                    return;
                }
                match result {
                    Ok(route) => {
                        if route.full_path == requested {
                            allowed.set(true);
                        } else {
                            let options = leptos_router::NavigateOptions { replace: true, ..Default::default() };
                            go(&route.full_path, options);
                        }
                    }
                    Err(err) => leptos::logging::warn!("navigation abandoned: {err}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, &go, snapshot, requested, still_requested);
        }
    });

    view! {
        <Show when=move || allowed.get()>
            {move || match name {
                RouteName::Login => view! { <LoginPage/> }.into_any(),
                RouteName::Dashboard => view! { <DashboardPage/> }.into_any(),
                other => view! { <SectionPage name=other/> }.into_any(),
            }}
        </Show>
    }
}
