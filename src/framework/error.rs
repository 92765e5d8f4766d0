//! # Framework Errors
//!
//! This module defines the failure taxonomy shared by every resource client.
//! A request ends in exactly one of these classes:
//!
//! - [`FrameworkError::Transport`]: the exchange never completed (DNS, refused connection, TLS).
//! - [`FrameworkError::Fetch`]: the exchange completed but failed the success predicate.
//! - [`FrameworkError::Decode`]: the body passed the predicate but is not the JSON we expected.

/// Errors that can occur while talking to a REST resource.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// Network-level failure, surfaced exactly as the transport reported it.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A completed HTTP exchange whose status or content type was rejected.
    #[error("{message}")]
    Fetch { message: String, status: u16 },

    /// The response body could not be parsed into the expected shape.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl FrameworkError {
    /// HTTP status of the exchange, when one completed.
    pub fn status(&self) -> Option<u16> {
        match self {
            FrameworkError::Fetch { status, .. } => Some(*status),
            FrameworkError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
