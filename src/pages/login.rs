//! Login page: credentials form plus quick mock-role selection.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::SessionHandle;
use crate::net::types::{LoginRequest, UserRole};
use crate::pages::section::role_label;
use crate::router::routes::{DEFAULT_ROUTE, QueryParams, REDIRECT_QUERY_KEY};
use crate::state::session::SessionSnapshot;

/// Credentials to submit, or `None` while either field is blank.
pub(crate) fn credentials_from_input(login: &str, password: &str) -> Option<LoginRequest> {
    let login = login.trim();
    if login.is_empty() || password.is_empty() {
        return None;
    }
    Some(LoginRequest { login: login.to_owned(), password: password.to_owned() })
}

/// Where to go once signed in: the single-valued `redirect` parameter of
/// `search`, or `/`.
pub(crate) fn post_login_target(search: &str) -> String {
    let query = QueryParams::parse(search.trim_start_matches('?'));
    query.single(REDIRECT_QUERY_KEY).unwrap_or(DEFAULT_ROUTE).to_owned()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let snapshot = expect_context::<RwSignal<SessionSnapshot>>();
    let search = use_location().search;
    let go = use_navigate();

    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let on_submit = {
        let go = go.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let Some(credentials) = credentials_from_input(&login.get(), &password.get()) else {
                message.set(Some("Введите логин и пароль".to_owned()));
                return;
            };
            busy.set(true);
            message.set(None);

            #[cfg(feature = "csr")]
            {
                let session = session.get_value();
                let go = go.clone();
                let target = post_login_target(&search.get_untracked());
                leptos::task::spawn_local(async move {
                    let result = session.login(&credentials).await;
                    snapshot.set(session.snapshot());
                    busy.set(false);
                    match result {
                        Ok(()) => go(&target, NavigateOptions::default()),
                        Err(err) => message.set(Some(err.message().to_owned())),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (credentials, &go, session, snapshot, search);
                busy.set(false);
            }
        }
    };

    let pick_role = move |role: UserRole| {
        session.with_value(|s| {
            s.select_role(role);
            snapshot.set(s.snapshot());
        });
        go(&post_login_target(&search.get_untracked()), NavigateOptions::default());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"WMS"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Логин"
                        prop:value=move || login.get()
                        on:input=move |ev| login.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Пароль"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Войти"
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="login-message">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Демо-вход"</p>
                <div class="login-roles">
                    {UserRole::ALL
                        .into_iter()
                        .map(|role| {
                            let pick_role = pick_role.clone();
                            view! {
                                <button class="login-button login-button--role" on:click=move |_| pick_role(role)>
                                    {role_label(role)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
