use super::*;
use crate::net::types::UserRole;
use crate::router::routes::RouteName;
use crate::testing::{FakeBackend, remote_identity};
use crate::util::storage::MemoryStorage;

fn session() -> Session<FakeBackend, MemoryStorage> {
    Session::new(FakeBackend::offline(), MemoryStorage::new())
}

fn nested_login_redirects(depth: usize) -> String {
    let mut path = "/".to_owned();
    for _ in 0..depth {
        let encoded: String = url::form_urlencoded::byte_serialize(path.as_bytes()).collect();
        path = format!("/login?redirect={encoded}");
    }
    path
}

#[tokio::test]
async fn anonymous_user_lands_on_login_with_redirect() {
    let route = navigate(&session(), "/stock").await.unwrap();

    assert_eq!(route.name, RouteName::Login);
    assert_eq!(route.full_path, "/login?redirect=%2Fstock");
    assert_eq!(route.query.single("redirect"), Some("/stock"));
}

#[tokio::test]
async fn unknown_path_goes_through_root_to_login() {
    let route = navigate(&session(), "/nope").await.unwrap();

    assert_eq!(route.name, RouteName::Login);
    assert_eq!(route.query.single("redirect"), Some("/"));
}

#[tokio::test]
async fn authenticated_user_reaches_protected_route() {
    let backend = FakeBackend::new(Ok(remote_identity()));
    let session = Session::new(backend.clone(), MemoryStorage::new());

    let route = navigate(&session, "/documents/new").await.unwrap();

    assert_eq!(route.name, RouteName::DocumentCreate);
    assert_eq!(backend.me_calls(), 1);
}

#[tokio::test]
async fn login_after_role_selection_follows_redirect() {
    let session = session();
    session.select_role(UserRole::StoreKeeper);

    let route = navigate(&session, "/login?redirect=%2Fsuppliers").await.unwrap();

    assert_eq!(route.name, RouteName::Suppliers);
}

#[tokio::test]
async fn login_after_role_selection_defaults_to_dashboard() {
    let session = session();
    session.select_role(UserRole::Manager);

    let route = navigate(&session, "/login").await.unwrap();

    assert_eq!(route.name, RouteName::Dashboard);
}

#[tokio::test]
async fn redirect_chain_within_limit_settles() {
    let session = session();
    session.select_role(UserRole::Manager);

    let route = navigate(&session, &nested_login_redirects(MAX_REDIRECTS)).await.unwrap();

    assert_eq!(route.name, RouteName::Dashboard);
}

#[tokio::test]
async fn redirect_chain_beyond_limit_is_abandoned() {
    let session = session();
    session.select_role(UserRole::Manager);
    let start = nested_login_redirects(MAX_REDIRECTS + 2);

    let err = navigate(&session, &start).await.unwrap_err();

    assert_eq!(err, NavigationError::TooManyRedirects { path: start });
}
