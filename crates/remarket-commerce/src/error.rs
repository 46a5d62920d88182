//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in marketplace domain operations.
///
/// The recommendation engine itself is total and never returns an error;
/// these variants cover cart arithmetic and input validation.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Listing not found.
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Requested quantity exceeds the listing's available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Rating outside the 1-5 range.
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Invalid variant axis pattern.
    #[error("Invalid variant pattern for axis {axis}: {message}")]
    InvalidPattern { axis: String, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
