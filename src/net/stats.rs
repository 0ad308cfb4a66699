//! Dashboard statistics endpoints.
//!
//! DESIGN
//! ======
//! Stats responses are not uniformly shaped: some deployments return a bare
//! array, others wrap it in an envelope. Each call fetches raw JSON and
//! normalizes it through [`extract_rows`]; an unrecognized shape is an empty
//! list rather than an error.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::query::{LowStockQuery, MovementsQuery, UtilizationQuery};
use crate::net::types::{DailyMovement, LowStockItem, WarehouseUtilization};

const UTILIZATION_PATH: &str = "/stats/warehouse-utilization";
const DAILY_MOVEMENTS_PATH: &str = "/stats/daily-movements";
const LOW_STOCK_PATH: &str = "/stats/low-stock";

/// Envelope keys that may hold the row array, in lookup order.
const LIST_KEYS: &[&str] = &["data", "items"];
const UTILIZATION_KEYS: &[&str] = &["data", "items", "overall", "summary"];

#[derive(Clone, Debug, Default)]
pub struct StatsApi {
    http: HttpClient,
}

impl StatsApi {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or a row does not decode.
    pub async fn warehouse_utilization(&self, query: &UtilizationQuery) -> Result<Vec<WarehouseUtilization>, ApiError> {
        let value = self.http.get_value(UTILIZATION_PATH, query).await?;
        extract_rows(value, UTILIZATION_KEYS)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or a row does not decode.
    pub async fn daily_movements(&self, query: &MovementsQuery) -> Result<Vec<DailyMovement>, ApiError> {
        let value = self.http.get_value(DAILY_MOVEMENTS_PATH, query).await?;
        extract_rows(value, LIST_KEYS)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or a row does not decode.
    pub async fn low_stock(&self, query: &LowStockQuery) -> Result<Vec<LowStockItem>, ApiError> {
        let value = self.http.get_value(LOW_STOCK_PATH, query).await?;
        extract_rows(value, LIST_KEYS)
    }
}

/// Pull the row array out of a bare array or an envelope keyed by one of `keys`.
fn extract_rows<T: DeserializeOwned>(value: serde_json::Value, keys: &[&str]) -> Result<Vec<T>, ApiError> {
    let rows = match value {
        serde_json::Value::Array(rows) => rows,
        serde_json::Value::Object(mut obj) => {
            let Some(rows) = keys.iter().find_map(|key| match obj.remove(*key) {
                Some(serde_json::Value::Array(rows)) => Some(rows),
                _ => None,
            }) else {
                return Ok(Vec::new());
            };
            rows
        }
        _ => return Ok(Vec::new()),
    };
    serde_json::from_value(serde_json::Value::Array(rows)).map_err(|e| ApiError::Decode(e.to_string()))
}
