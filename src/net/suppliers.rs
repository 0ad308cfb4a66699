//! Supplier directory endpoints.

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::query::{ListQuery, Query};
use crate::net::types::{CreatedId, NewSupplier, Supplier, SupplierPatch};

const SUPPLIERS_PATH: &str = "/suppliers";

fn supplier_path(id: i64) -> String {
    format!("{SUPPLIERS_PATH}/{id}")
}

#[derive(Clone, Debug, Default)]
pub struct SuppliersApi {
    http: HttpClient,
}

impl SuppliersApi {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Supplier>, ApiError> {
        self.http.get(SUPPLIERS_PATH, query).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: i64) -> Result<Supplier, ApiError> {
        self.http.get(&supplier_path(id), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn create(&self, supplier: &NewSupplier) -> Result<CreatedId, ApiError> {
        self.http.post(SUPPLIERS_PATH, supplier).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn patch(&self, id: i64, patch: &SupplierPatch) -> Result<Supplier, ApiError> {
        self.http.patch(&supplier_path(id), patch).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.http.delete(&supplier_path(id)).await
    }
}
