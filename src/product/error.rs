//! Error types for the Product repository.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// The payload breaks a product invariant and was not sent.
    #[error("Invalid product payload: {0}")]
    InvalidPayload(String),

    /// The request failed in transport, was rejected, or could not be decoded.
    #[error(transparent)]
    Request(#[from] FrameworkError),
}

impl ProductError {
    /// HTTP status of the failed exchange, when one completed.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProductError::Request(e) => e.status(),
            ProductError::InvalidPayload(_) => None,
        }
    }
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::InvalidPayload(msg)
    }
}
