//! # Product Repository
//!
//! The sole mediator between callers and the remote products API.
//! It wraps a `ResourceClient<Product>` and exposes the catalog operations:
//! list (optionally by category), search, get, create, update and delete.

use crate::clients::resource_repository::ResourceRepository;
use crate::framework::ResourceClient;
use crate::model::{Product, ProductCreate, ProductQuery, ProductUpdate};
use crate::product::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Repository for the Product resource.
///
/// Holds nothing but the underlying client (base URL and connection pool), so
/// clones are cheap and can be handed to concurrent tasks.
#[derive(Clone)]
pub struct ProductRepository {
    inner: ResourceClient<Product>,
}

impl ProductRepository {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceRepository<Product> for ProductRepository {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }
}

impl ProductRepository {
    /// Lists products, restricted to one category when `category_id` is set.
    ///
    /// Without a filter the request carries no query string at all.
    pub async fn list_products(&self, category_id: Option<u64>) -> Result<Vec<Product>, ProductError> {
        let query = ProductQuery {
            category_id,
            ..ProductQuery::default()
        };
        self.list(query).await
    }

    /// Lists products matching every filter that is set.
    pub async fn search_products(&self, query: ProductQuery) -> Result<Vec<Product>, ProductError> {
        self.list(query).await
    }

    /// Creates a product and returns the stored record with its server-assigned id.
    ///
    /// The payload is checked against the product invariants first; a broken
    /// payload fails with [`ProductError::InvalidPayload`] and sends nothing.
    /// Not idempotent: repeated calls create duplicates.
    #[instrument(skip(self, params), fields(title = %params.title))]
    pub async fn create_product(&self, params: &ProductCreate) -> Result<Product, ProductError> {
        params.validate()?;
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces the given fields of product `id` and returns the updated record.
    ///
    /// Set fields are checked like a create payload; a broken update fails with
    /// [`ProductError::InvalidPayload`] and sends nothing.
    #[instrument(skip(self, update))]
    pub async fn update_product(&self, id: u64, update: &ProductUpdate) -> Result<Product, ProductError> {
        update.validate()?;
        debug!(?update, "Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Deletes product `id`. Returns the server's verdict.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> Result<bool, ProductError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}
