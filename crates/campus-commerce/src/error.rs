//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and catalog operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Listing not found.
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// Seller not found.
    #[error("Seller not found: {0}")]
    SellerNotFound(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Malformed call arguments, such as a non-positive page size.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown name for a closed-set value (category, condition, status).
    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Store error.
    #[error("Store error: {0}")]
    StoreError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<campus_store::StoreError> for CommerceError {
    fn from(e: campus_store::StoreError) -> Self {
        CommerceError::StoreError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
