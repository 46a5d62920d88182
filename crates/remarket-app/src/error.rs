//! Application-level error types.

use crate::session::Role;
use thiserror::Error;

/// Errors from the application shell (guards and state transitions).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    /// No authenticated user; the caller should redirect to login.
    #[error("authentication required")]
    Unauthenticated,

    /// The authenticated user lacks a required role.
    #[error("role {required:?} required")]
    Forbidden { required: Role },
}
