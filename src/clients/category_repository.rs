//! # Category Repository
//!
//! Read-only access to the category reference data.

use crate::category::CategoryError;
use crate::clients::resource_repository::ResourceRepository;
use crate::framework::ResourceClient;
use crate::model::Category;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Repository for the Category resource.
#[derive(Clone)]
pub struct CategoryRepository {
    inner: ResourceClient<Category>,
}

impl CategoryRepository {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceRepository<Category> for CategoryRepository {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }
}

impl CategoryRepository {
    pub async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.list(()).await
    }

    /// Resolves a category by its slug (e.g. `"clothes"`).
    #[instrument(skip(self))]
    pub async fn find_by_slug(&self, slug: &str) -> Result<Category, CategoryError> {
        let categories = self.list_categories().await?;
        debug!(count = categories.len(), "Searching categories");
        categories
            .into_iter()
            .find(|c| c.slug.eq_ignore_ascii_case(slug))
            .ok_or_else(|| CategoryError::UnknownSlug(slug.to_string()))
    }
}
