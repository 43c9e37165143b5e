//! JSON-over-HTTP client for REST collection endpoints.
//!
//! One client per process, holding the base URL resolved at startup. The
//! client knows nothing about snapshots or overlays; it only speaks the
//! four-verb collection contract:
//!
//! - `GET    {base}/{resource}[?limit=N&sort=asc|desc]` -> array of records
//! - `POST   {base}/{resource}` -> created record with server-assigned id
//! - `PATCH  {base}/{resource}/{id}` -> status only, body ignored
//! - `DELETE {base}/{resource}/{id}` -> status only

use thiserror::Error;

use crate::models::{FieldPatch, RecordId, Resource};
use crate::store::SortOrder;

/// Errors from a collection request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or an undecodable body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Rejected(reqwest::StatusCode),
}

impl ApiError {
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }
}

/// Optional query parameters for a collection fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionQuery {
    pub limit: Option<usize>,
    pub sort: Option<SortOrder>,
}

impl CollectionQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort", sort.as_str().to_string()));
        }
        params
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the whole collection.
    ///
    /// The body is decoded unconditionally; an error status with a JSON
    /// array body still decodes. Mutations are stricter.
    pub async fn fetch<R: Resource>(&self, query: &CollectionQuery) -> Result<Vec<R>, ApiError> {
        let mut request = self.http.get(self.collection_url(R::PATH));
        let params = query.params();
        if !params.is_empty() {
            request = request.query(&params);
        }

        let records = request.send().await?.json().await?;
        Ok(records)
    }

    /// Creates a record from draft fields; returns the record the server
    /// stored, including its assigned id.
    pub async fn create<R: Resource>(&self, draft: &FieldPatch) -> Result<R, ApiError> {
        let response = self
            .http
            .post(self.collection_url(R::PATH))
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Rejected(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Applies a partial update. Only the status code is inspected.
    pub async fn update<R: Resource>(
        &self,
        id: &RecordId,
        patch: &FieldPatch,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .patch(self.member_url(R::PATH, id))
            .json(patch)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Rejected(response.status()));
        }

        Ok(())
    }

    pub async fn delete<R: Resource>(&self, id: &RecordId) -> Result<(), ApiError> {
        let response = self.http.delete(self.member_url(R::PATH, id)).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Rejected(response.status()));
        }

        Ok(())
    }

    fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn member_url(&self, path: &str, id: &RecordId) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            path,
            urlencoding::encode(id.as_str())
        )
    }
}
