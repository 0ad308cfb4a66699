//! Stock balance endpoints.

#[cfg(test)]
#[path = "stock_test.rs"]
mod stock_test;

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::query::{Query, StockQuery};
use crate::net::types::{StockAdjustment, StockBalance};

const STOCK_PATH: &str = "/stock";
const STOCK_ADJUST_PATH: &str = "/stock/adjust";

fn stock_by_item_path(item_id: i64) -> String {
    format!("{STOCK_PATH}/{item_id}")
}

#[derive(Clone, Debug, Default)]
pub struct StockApi {
    http: HttpClient,
}

impl StockApi {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn list(&self, query: &StockQuery) -> Result<Vec<StockBalance>, ApiError> {
        self.http.get(STOCK_PATH, query).await
    }

    /// Balances of one item across all warehouses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn by_item(&self, item_id: i64) -> Result<Vec<StockBalance>, ApiError> {
        self.http.get(&stock_by_item_path(item_id), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the adjustment.
    pub async fn adjust(&self, adjustment: &StockAdjustment) -> Result<(), ApiError> {
        self.http.post_unit(STOCK_ADJUST_PATH, Some(adjustment)).await
    }
}

