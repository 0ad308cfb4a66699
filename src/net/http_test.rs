use super::*;
use crate::net::types::CreatedId;

fn client() -> HttpClient {
    HttpClient::new(ApiConfig::default())
}

#[test]
fn url_without_query() {
    assert_eq!(client().url("/warehouses", &Query::new()), "/api/warehouses");
}

#[test]
fn url_with_query() {
    let mut query = Query::new();
    query.push("limit", 10).push("search", "a b");
    assert_eq!(client().url("/suppliers", &query), "/api/suppliers?limit=10&search=a+b");
}

#[test]
fn url_respects_configured_base() {
    let http = HttpClient::new(ApiConfig::with_base_url(Some("https://wms.example.com/v1/")));
    assert_eq!(http.url("auth/me", &Query::new()), "https://wms.example.com/v1/auth/me");
}

#[test]
fn decode_body_parses_json() {
    let created: CreatedId = decode_body(r#"{"id":42}"#).unwrap();
    assert_eq!(created, CreatedId { id: 42 });
}

#[test]
fn decode_body_treats_empty_as_null() {
    let value: serde_json::Value = decode_body("").unwrap();
    assert!(value.is_null());
    let unit: Option<CreatedId> = decode_body("  ").unwrap();
    assert_eq!(unit, None);
}

#[test]
fn decode_body_reports_decode_error() {
    let err = decode_body::<CreatedId>(r#"{"id":"x"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn method_names() {
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[tokio::test]
async fn requests_are_unavailable_outside_browser() {
    let err = client().get::<serde_json::Value>("/auth/me", &Query::new()).await.unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
    assert_eq!(client().delete("/suppliers/1").await, Err(ApiError::Unavailable));
}
