//! Category reference data: read-only resource mapping and errors.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CategoryRepository;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::Category;

/// Creates a Category repository rooted at `base_url`.
pub fn new(base_url: &str) -> Result<CategoryRepository, FrameworkError> {
    let client = ResourceClient::<Category>::new(base_url)?;
    Ok(CategoryRepository::new(client))
}

/// Creates a Category repository that shares an existing connection pool.
pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<CategoryRepository, FrameworkError> {
    let client = ResourceClient::<Category>::with_http_client(base_url, http)?;
    Ok(CategoryRepository::new(client))
}
