//! # ResourceRepository Trait
//!
//! Provides a common interface for resource-specific repositories, adding default
//! `get` and `list` methods built on top of a generic [`ResourceClient`].

use crate::framework::{FrameworkError, ResourceClient, RestEntity};
use async_trait::async_trait;

/// Trait for resource-specific repositories to inherit the standard read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// `get` and `list`. Write operations stay on each repository, because only
/// some resources accept them and each validates its payloads differently.
///
/// # Example
///
/// ```ignore
/// struct TagRepository {
///     inner: ResourceClient<Tag>,
/// }
///
/// #[async_trait]
/// impl ResourceRepository<Tag> for TagRepository {
///     type Error = TagError;
///
///     fn inner(&self) -> &ResourceClient<Tag> {
///         &self.inner
///     }
/// }
///
/// // get() and list() are provided automatically!
/// let tag = repo.get(7).await?;
/// ```
#[async_trait]
pub trait ResourceRepository<T: RestEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }

    /// Fetch one record by id from `{base}/{collection}/{id}/`.
    ///
    /// Any non-2xx status fails, a missing record included.
    #[tracing::instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch the collection at `{base}/{collection}/`, filtered by `query`.
    #[tracing::instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(&query).await.map_err(Self::map_error)
    }
}
