//! Warehouse documents: incoming orders, transfers and production.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use serde::Serialize;

use crate::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::query::{DocumentListQuery, Query};
use crate::net::types::{CreateDocumentRequest, DocumentDetail, DocumentListItem, DocumentStatus};

const DOCUMENTS_PATH: &str = "/documents";

fn document_path(id: i64) -> String {
    format!("{DOCUMENTS_PATH}/{id}")
}

fn document_status_path(id: i64) -> String {
    format!("{DOCUMENTS_PATH}/{id}/status")
}

fn document_audit_path(id: i64) -> String {
    format!("{DOCUMENTS_PATH}/{id}/audit")
}

#[derive(Serialize)]
struct StatusChange {
    status: DocumentStatus,
}

#[derive(Clone, Debug, Default)]
pub struct DocumentsApi {
    http: HttpClient,
}

impl DocumentsApi {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn list(&self, query: &DocumentListQuery) -> Result<Vec<DocumentListItem>, ApiError> {
        self.http.get(DOCUMENTS_PATH, query).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: i64) -> Result<DocumentDetail, ApiError> {
        self.http.get(&document_path(id), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn create(&self, request: &CreateDocumentRequest) -> Result<DocumentDetail, ApiError> {
        self.http.post(DOCUMENTS_PATH, request).await
    }

    /// Move a document to `status` (e.g. post a draft as completed).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn update_status(&self, id: i64, status: DocumentStatus) -> Result<DocumentDetail, ApiError> {
        self.http.patch(&document_status_path(id), &StatusChange { status }).await
    }

    /// Cancel a document. The backend keeps it with status `cancelled`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn cancel(&self, id: i64) -> Result<(), ApiError> {
        self.http.delete(&document_path(id)).await
    }

    /// Audit trail entries; their shape is backend-defined.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a JSON array.
    pub async fn audit(&self, id: i64) -> Result<Vec<serde_json::Value>, ApiError> {
        self.http.get(&document_audit_path(id), &Query::new()).await
    }
}
