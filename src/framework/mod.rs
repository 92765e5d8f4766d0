//! Generic REST resource framework.
//!
//! This module provides the building blocks for type-safe clients over REST
//! resource collections with CRUD operations.
//!
//! # Main Components
//!
//! - [`RestEntity`] / [`WritableEntity`] - Traits resource types implement to be served by a client
//! - [`ResourceClient`] - Generic client that performs the HTTP round trips
//! - [`FrameworkError`] - Transport, fetch and decode failures

pub mod core;
pub mod error;

// Re-export core types for convenience
pub use self::core::*;
pub use error::FrameworkError;
