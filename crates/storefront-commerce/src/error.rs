//! Commerce error types.

use thiserror::Error;

/// Errors raised while building or loading storefront data.
///
/// The filter, sort and totals stages never fail; these only come out of
/// constructors and catalog sources.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product record violates a data-model rule.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Negative unit price on a cart line.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Failed to read a fixture.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration value out of range.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

impl CommerceError {
    pub(crate) fn invalid_product(id: impl Into<String>, reason: impl Into<String>) -> Self {
        CommerceError::InvalidProduct {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
