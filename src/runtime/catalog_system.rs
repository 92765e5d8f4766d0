use crate::clients::{CategoryRepository, ProductRepository};
use crate::framework::FrameworkError;
use crate::runtime::CatalogConfig;
use crate::{category, product};
use tracing::info;

/// The runtime wiring for the catalog's data-access layer.
///
/// `CatalogSystem` is responsible for:
/// - **Construction**: Building every repository from one [`CatalogConfig`]
/// - **Resource Sharing**: Handing all repositories the same connection pool
/// - **Dependency Injection**: Callers receive the repositories explicitly instead
///   of reaching for a global instance
///
/// # Lifetime
///
/// Build it once at startup and pass it (or clones of its repositories) to
/// whatever needs data. The repositories hold no per-request state, so there is
/// nothing to shut down: dropping the system is enough.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&CatalogConfig::from_env())?;
///
/// let mugs = system.products.list_products(Some(1)).await?;
/// let categories = system.categories.list_categories().await?;
/// ```
#[derive(Clone)]
pub struct CatalogSystem {
    /// Repository for products (read and write)
    pub products: ProductRepository,

    /// Repository for categories (read-only)
    pub categories: CategoryRepository,
}

impl CatalogSystem {
    /// Creates both repositories against `config.api_url`.
    ///
    /// Fails with [`FrameworkError::InvalidBaseUrl`] when the URL is not an
    /// absolute http(s) URL.
    pub fn new(config: &CatalogConfig) -> Result<Self, FrameworkError> {
        let http = reqwest::Client::new();
        let products = product::with_http_client(&config.api_url, http.clone())?;
        let categories = category::with_http_client(&config.api_url, http)?;
        info!(api_url = %config.api_url, "Catalog repositories ready");
        Ok(Self {
            products,
            categories,
        })
    }
}
