//! API error types.

use thiserror::Error;

/// Errors surfaced by the backend API clients.
///
/// Malformed collection shapes are not errors: they normalize to empty
/// collections at the [`crate::page`] layer. These variants cover transport
/// failures and non-success HTTP statuses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The resource does not exist (HTTP 404).
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The request conflicts with existing state (HTTP 409), e.g. a second
    /// review for the same product by the same user.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The caller is not authorized (HTTP 401/403).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-success status.
    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Whether this error is a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// Whether this error is a conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }
}
