//! Configured JSON-over-HTTP client for the WMS REST API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, with cookies included.
//! Everywhere else every request fails with [`ApiError::Unavailable`] so
//! native builds and tests never touch the network.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are mapped to [`ApiError`]; status
//! errors carry the server's message when the body has one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::net::query::{Query, ToQuery};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HttpClient {
    config: ApiConfig,
}

impl HttpClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Full request URL for `path` with an optional query string.
    #[must_use]
    pub fn url(&self, path: &str, query: &Query) -> String {
        let base = self.config.endpoint(path);
        if query.is_empty() { base } else { format!("{base}?{}", query.encode()) }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &impl ToQuery) -> Result<T, ApiError> {
        let text = self.send(Method::Get, &self.url(path, &query.to_query()), None).await?;
        decode_body(&text)
    }

    /// GET returning the raw JSON value, for endpoints with loose response shapes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn get_value(&self, path: &str, query: &impl ToQuery) -> Result<serde_json::Value, ApiError> {
        self.get(path, query).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode as `T`.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let text = self.send(Method::Post, &self.url(path, &Query::new()), Some(encode_body(body)?)).await?;
        decode_body(&text)
    }

    /// POST whose response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        let body = body.map(encode_body).transpose()?;
        self.send(Method::Post, &self.url(path, &Query::new()), body).await.map(drop)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode as `T`.
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let text = self.send(Method::Put, &self.url(path, &Query::new()), Some(encode_body(body)?)).await?;
        decode_body(&text)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode as `T`.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let text = self.send(Method::Patch, &self.url(path, &Query::new()), Some(encode_body(body)?)).await?;
        decode_body(&text)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, &self.url(path, &Query::new()), None).await.map(drop)
    }

    /// Send a request and return the response body of a 2xx response.
    async fn send(&self, method: Method, url: &str, body: Option<String>) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::{Method as GlooMethod, RequestBuilder};

            let gloo_method = match method {
                Method::Get => GlooMethod::GET,
                Method::Post => GlooMethod::POST,
                Method::Put => GlooMethod::PUT,
                Method::Patch => GlooMethod::PATCH,
                Method::Delete => GlooMethod::DELETE,
            };
            let mut builder = RequestBuilder::new(url)
                .method(gloo_method)
                .header("Content-Type", "application/json");
            if self.config.with_credentials {
                builder = builder.credentials(web_sys::RequestCredentials::Include);
            }
            let request = match body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                leptos::logging::warn!("{} {url} -> {}", method.as_str(), resp.status());
                return Err(ApiError::from_status(resp.status(), &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, url, body);
            Err(ApiError::Unavailable)
        }
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a response body; an empty body decodes as JSON `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
