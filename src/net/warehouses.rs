//! Warehouse endpoints.

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::query::Query;
use crate::net::types::{Warehouse, WarehouseInput};

const WAREHOUSES_PATH: &str = "/warehouses";

fn warehouse_path(id: i64) -> String {
    format!("{WAREHOUSES_PATH}/{id}")
}

#[derive(Clone, Debug, Default)]
pub struct WarehousesApi {
    http: HttpClient,
}

impl WarehousesApi {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn list(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.http.get(WAREHOUSES_PATH, &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: i64) -> Result<Warehouse, ApiError> {
        self.http.get(&warehouse_path(id), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn create(&self, input: &WarehouseInput) -> Result<Warehouse, ApiError> {
        self.http.post(WAREHOUSES_PATH, input).await
    }

    /// Replace a warehouse's editable fields (`PUT`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn update(&self, id: i64, input: &WarehouseInput) -> Result<Warehouse, ApiError> {
        self.http.put(&warehouse_path(id), input).await
    }
}
