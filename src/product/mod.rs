//! Product-specific resource logic: wire mapping, list filters and errors.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductRepository;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::Product;

/// Creates a Product repository rooted at `base_url`.
pub fn new(base_url: &str) -> Result<ProductRepository, FrameworkError> {
    let client = ResourceClient::<Product>::new(base_url)?;
    Ok(ProductRepository::new(client))
}

/// Creates a Product repository that shares an existing connection pool.
pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<ProductRepository, FrameworkError> {
    let client = ResourceClient::<Product>::with_http_client(base_url, http)?;
    Ok(ProductRepository::new(client))
}
