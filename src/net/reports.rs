//! Report endpoints. Rows are passed through as raw JSON for export.

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::query::{MovementsQuery, Query};

const LOW_STOCK_REPORT_PATH: &str = "/reports/stock/low";
const MOVEMENT_REPORT_PATH: &str = "/reports/movement";

#[derive(Clone, Debug, Default)]
pub struct ReportsApi {
    http: HttpClient,
}

impl ReportsApi {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a JSON array.
    pub async fn low_stock(&self) -> Result<Vec<serde_json::Value>, ApiError> {
        self.http.get(LOW_STOCK_REPORT_PATH, &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a JSON array.
    pub async fn movement(&self, query: &MovementsQuery) -> Result<Vec<serde_json::Value>, ApiError> {
        self.http.get(MOVEMENT_REPORT_PATH, query).await
    }
}
