//! Dashboard statistics state.
//!
//! DESIGN
//! ======
//! Mirrors the list-state shape used elsewhere (`loading` + data + `error`).
//! A refresh flips `loading` on, and `finish_refresh` always flips it off,
//! keeping the previous data when the fetch failed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::error::ApiError;
use crate::net::query::{LowStockQuery, MovementsQuery, UtilizationQuery};
use crate::net::stats::StatsApi;
use crate::net::types::{DailyMovement, LowStockItem, WarehouseUtilization};

/// Default movement window shown on the dashboard.
pub const DASHBOARD_MOVEMENT_DAYS: u32 = 14;
pub const DASHBOARD_LOW_STOCK_LIMIT: u32 = 10;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub utilization: Vec<WarehouseUtilization>,
    pub movements: Vec<DailyMovement>,
    pub low_stock: Vec<LowStockItem>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub data: DashboardData,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn begin_refresh(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_refresh(&mut self, result: Result<DashboardData, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => self.data = data,
            Err(err) => self.error = Some(err.user_message()),
        }
    }
}

/// Fetch the three dashboard lists concurrently.
///
/// # Errors
///
/// Returns the first failure among the three requests.
pub async fn load_dashboard(stats: &StatsApi) -> Result<DashboardData, ApiError> {
    let utilization_query = UtilizationQuery::default();
    let movements_query = MovementsQuery { days: Some(DASHBOARD_MOVEMENT_DAYS), ..MovementsQuery::default() };
    let low_stock_query = LowStockQuery { limit: Some(DASHBOARD_LOW_STOCK_LIMIT), ..LowStockQuery::default() };

    let (utilization, movements, low_stock) = futures::join!(
        stats.warehouse_utilization(&utilization_query),
        stats.daily_movements(&movements_query),
        stats.low_stock(&low_stock_query)
    );
    Ok(DashboardData { utilization: utilization?, movements: movements?, low_stock: low_stock? })
}
