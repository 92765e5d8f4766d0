//! Runtime wiring and ambient setup.
//!
//! This module contains the infrastructure around the repositories:
//!
//! - **Configuration**: Where the API lives ([`CatalogConfig`])
//! - **Wiring**: Building the repositories and sharing one connection pool ([`CatalogSystem`])
//! - **Observability setup**: Initializing tracing and logging ([`setup_tracing`])

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use catalog_system::*;
pub use config::*;
pub use self::tracing::setup_tracing;
