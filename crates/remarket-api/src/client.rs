//! HTTP client for the backend REST API.
//!
//! A thin wrapper over `reqwest` that handles base-URL joining, default
//! headers, bearer authentication, and status-to-error mapping, so the
//! per-resource services stay declarative.

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Client for making requests against the backend API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    default_headers: HashMap<String, String>,
    bearer: Option<String>,
}

impl ApiClient {
    /// Create a client rooted at a base URL (e.g., `https://host/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            default_headers: HashMap::new(),
            bearer: None,
        }
    }

    /// Add a default header included in every request.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Attach a bearer token for authenticated surfaces (seller, admin,
    /// user cart).
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Drop the bearer token (logout teardown).
    pub fn without_bearer(mut self) -> Self {
        self.bearer = None;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn apply_defaults(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        for (key, value) in &self.default_headers {
            req = req.header(key, value);
        }
        if let Some(token) = &self.bearer {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(match status.as_u16() {
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            401 | 403 => ApiError::Unauthorized(message),
            code => ApiError::Status {
                status: code,
                message,
            },
        })
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!(path, "GET");
        let req = self.apply_defaults(self.http.get(self.url(path)).query(query));
        let response = Self::check(req.send().await?).await?;
        Ok(response.json().await?)
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let req = self.apply_defaults(self.http.post(self.url(path)).json(body));
        let response = Self::check(req.send().await?).await?;
        Ok(response.json().await?)
    }

    /// PUT a JSON body and decode a JSON response.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PUT");
        let req = self.apply_defaults(self.http.put(self.url(path)).json(body));
        let response = Self::check(req.send().await?).await?;
        Ok(response.json().await?)
    }

    /// PUT with query parameters and no body, decoding a JSON response.
    pub async fn put_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!(path, "PUT");
        let req = self.apply_defaults(self.http.put(self.url(path)).query(query));
        let response = Self::check(req.send().await?).await?;
        Ok(response.json().await?)
    }

    /// PUT a JSON body, ignoring the response body.
    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        debug!(path, "PUT");
        let req = self.apply_defaults(self.http.put(self.url(path)).json(body));
        Self::check(req.send().await?).await?;
        Ok(())
    }

    /// DELETE a resource, ignoring the response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        let req = self.apply_defaults(self.http.delete(self.url(path)));
        Self::check(req.send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("https://host/api/");
        assert_eq!(client.url("/listings"), "https://host/api/listings");

        let client = ApiClient::new("https://host/api");
        assert_eq!(client.url("/listings"), "https://host/api/listings");
    }

    #[test]
    fn test_bearer_lifecycle() {
        let client = ApiClient::new("https://host/api").with_bearer("token");
        assert!(client.bearer.is_some());
        let client = client.without_bearer();
        assert!(client.bearer.is_none());
    }
}
