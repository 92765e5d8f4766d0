//! Error types for the Category repository.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during category lookups.
#[derive(Debug, Error)]
pub enum CategoryError {
    /// No category carries the requested slug.
    #[error("Unknown category slug: {0}")]
    UnknownSlug(String),

    /// The request failed in transport, was rejected, or could not be decoded.
    #[error(transparent)]
    Request(#[from] FrameworkError),
}
