//! Networking modules for the WMS REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport and configuration, `types` defines the wire schema,
//! and each remaining module wraps one REST resource.

pub mod auth;
pub mod documents;
pub mod http;
pub mod nomenclature;
pub mod query;
pub mod reports;
pub mod stats;
pub mod stock;
pub mod suppliers;
pub mod types;
pub mod warehouses;

use crate::config::ApiConfig;

/// Every resource API over one shared HTTP client.
#[derive(Clone, Debug, Default)]
pub struct WmsApi {
    pub auth: auth::AuthApi,
    pub documents: documents::DocumentsApi,
    pub nomenclature: nomenclature::NomenclatureApi,
    pub suppliers: suppliers::SuppliersApi,
    pub warehouses: warehouses::WarehousesApi,
    pub stock: stock::StockApi,
    pub stats: stats::StatsApi,
    pub reports: reports::ReportsApi,
}

impl WmsApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let http = http::HttpClient::new(config);
        Self {
            auth: auth::AuthApi::new(http.clone()),
            documents: documents::DocumentsApi::new(http.clone()),
            nomenclature: nomenclature::NomenclatureApi::new(http.clone()),
            suppliers: suppliers::SuppliersApi::new(http.clone()),
            warehouses: warehouses::WarehousesApi::new(http.clone()),
            stock: stock::StockApi::new(http.clone()),
            stats: stats::StatsApi::new(http.clone()),
            reports: reports::ReportsApi::new(http),
        }
    }
}
