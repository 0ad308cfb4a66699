//! Nomenclature (item catalog) endpoints.

#[cfg(test)]
#[path = "nomenclature_test.rs"]
mod nomenclature_test;

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::query::{NomenclatureQuery, Query};
use crate::net::types::{CreatedId, Item, ItemPatch, NewItem};

const NOMENCLATURE_PATH: &str = "/nomenclature";

fn item_path(id: i64) -> String {
    format!("{NOMENCLATURE_PATH}/{id}")
}

#[derive(Clone, Debug, Default)]
pub struct NomenclatureApi {
    http: HttpClient,
}

impl NomenclatureApi {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Page through the catalog with optional search, sort and type filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn list(&self, query: &NomenclatureQuery) -> Result<Vec<Item>, ApiError> {
        self.http.get(NOMENCLATURE_PATH, query).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: i64) -> Result<Item, ApiError> {
        self.http.get(&item_path(id), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn create(&self, item: &NewItem) -> Result<CreatedId, ApiError> {
        self.http.post(NOMENCLATURE_PATH, item).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn patch(&self, id: i64, patch: &ItemPatch) -> Result<Item, ApiError> {
        self.http.patch(&item_path(id), patch).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.http.delete(&item_path(id)).await
    }
}

