//! Top bar shared by every application-layout page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::SessionHandle;
use crate::net::types::Identity;
use crate::pages::section::{NAV_SECTIONS, role_label, section_title};
use crate::state::session::SessionSnapshot;

#[component]
pub fn AppHeader() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let snapshot = expect_context::<RwSignal<SessionSnapshot>>();
    let go = use_navigate();

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            let session = session.get_value();
            let go = go.clone();
            leptos::task::spawn_local(async move {
                // Local state is cleared in both outcomes.
                if !session.logout().await.remote_succeeded() {
                    leptos::logging::warn!("signed out locally only; the server session may still be active");
                }
                snapshot.set(session.snapshot());
                go(
                    crate::router::routes::RouteName::Login.def().pattern,
                    leptos_router::NavigateOptions::default(),
                );
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, snapshot, &go);
        }
    };

    view! {
        <header class="app-header">
            <nav class="app-header__nav">
                {NAV_SECTIONS
                    .iter()
                    .map(|name| view! { <a href=name.def().pattern>{section_title(*name)}</a> })
                    .collect_view()}
            </nav>
            <span class="app-header__user">
                {move || snapshot.with(|s| s.identity.as_ref().map(Identity::full_name).unwrap_or_default())}
            </span>
            <span class="app-header__role">
                {move || snapshot.with(|s| s.role().map(role_label).unwrap_or_default())}
            </span>
            <button class="btn" on:click=on_logout>
                "Выйти"
            </button>
        </header>
    }
}
