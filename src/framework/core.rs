//! # Core Resource Framework
//!
//! This module defines the generic building blocks for talking to a REST resource.
//!
//! ## Key Types
//!
//! - [`RestEntity`]: The trait every readable resource type implements.
//! - [`WritableEntity`]: Adds create/update payloads for resources that accept writes.
//! - [`ResourceClient`]: The generic client that performs the HTTP round trips.
//! - [`Operation`]: The CRUD verb a request performs, used to label failures.

use crate::framework::error::FrameworkError;
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

const JSON: &str = "application/json";

// =============================================================================
// 1. THE ABSTRACTION (Resource traits)
// =============================================================================

/// Trait that any resource type must implement to be served by a [`ResourceClient`].
///
/// # Architecture Note
/// The HTTP plumbing (URL building, status checks, decoding) is written *once* in
/// [`ResourceClient`]. A resource only describes where it lives and how it is
/// identified. Associated types keep every call typed: a `Product` client takes a
/// product id and a product query, and the compiler rejects anything else.
///
/// Resources are read-only by default. Implement [`WritableEntity`] as well to
/// unlock `create`, `update` and `delete`.
pub trait RestEntity: DeserializeOwned + Clone + Send + Sync + 'static {
    /// The unique identifier used in item paths (e.g. `u64`).
    type Id: Clone + Send + Sync + Display + Debug + 'static;

    /// Filter accepted by `list`. Use `()` when the collection takes no filters.
    type Query: Default + Send + Sync + Debug + 'static;

    /// Path segment of the collection, e.g. `"products"` for `{base}/products/`.
    const COLLECTION: &'static str;

    /// Singular name used in failure messages, e.g. `"product"`.
    const RESOURCE: &'static str;

    /// Renders a list query into request parameters.
    ///
    /// Only set filters may appear; an empty vector means no query string at all.
    fn query_pairs(_query: &Self::Query) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// A resource that accepts writes through the API.
pub trait WritableEntity: RestEntity {
    /// JSON body sent on `POST {collection}/`.
    type CreateParams: Serialize + Send + Sync + Debug + 'static;

    /// JSON body sent on `PUT {collection}/{id}/`.
    type UpdateParams: Serialize + Send + Sync + Debug + 'static;
}

// =============================================================================
// 2. OPERATIONS & THE SUCCESS PREDICATE
// =============================================================================

/// The CRUD verb a request performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Operation::List | Operation::Get => "fetch",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Returns true when a `Content-Type` value names a JSON media type.
///
/// Parameters such as `charset` are ignored, and structured suffixes
/// (`application/problem+json`) count as JSON.
pub fn is_json_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == JSON || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
}

fn failure_target<T: RestEntity>(op: Operation, id: Option<&T::Id>) -> String {
    match id {
        Some(id) => format!("{} {}", T::RESOURCE, id),
        None if op == Operation::List => T::COLLECTION.to_string(),
        None => T::RESOURCE.to_string(),
    }
}

fn rejected_status<T: RestEntity>(
    op: Operation,
    id: Option<&T::Id>,
    status: StatusCode,
) -> FrameworkError {
    FrameworkError::Fetch {
        message: format!(
            "Failed to {} {}: HTTP {}",
            op.verb(),
            failure_target::<T>(op, id),
            status
        ),
        status: status.as_u16(),
    }
}

fn rejected_content_type<T: RestEntity>(
    op: Operation,
    id: Option<&T::Id>,
    status: StatusCode,
    content_type: Option<&str>,
) -> FrameworkError {
    FrameworkError::Fetch {
        message: format!(
            "Failed to {} {}: expected a JSON response, got content type '{}' (HTTP {})",
            op.verb(),
            failure_target::<T>(op, id),
            content_type.unwrap_or("none"),
            status
        ),
        status: status.as_u16(),
    }
}

/// The success predicate shared by every operation.
///
/// A response fails when its status is not 2xx, or independently when it does
/// not declare a JSON content type.
fn check_response<T: RestEntity>(
    response: &Response,
    op: Operation,
    id: Option<&T::Id>,
) -> Result<(), FrameworkError> {
    let status = response.status();
    if !status.is_success() {
        debug!(resource = T::RESOURCE, ?op, %status, "Rejected status");
        return Err(rejected_status::<T>(op, id, status));
    }
    let content_type = content_type(response.headers());
    if !content_type.is_some_and(is_json_content_type) {
        debug!(resource = T::RESOURCE, ?op, ?content_type, "Rejected content type");
        return Err(rejected_content_type::<T>(op, id, status, content_type));
    }
    Ok(())
}

async fn decode<T: RestEntity, R: DeserializeOwned>(response: Response) -> Result<R, FrameworkError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| {
        debug!(resource = T::RESOURCE, error = %source, "Undecodable body");
        FrameworkError::Decode {
            resource: T::RESOURCE,
            source,
        }
    })
}

fn normalize_base_url(raw: &str) -> Result<String, FrameworkError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| FrameworkError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = url::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

// =============================================================================
// 3. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for one REST resource collection.
///
/// The client holds the base URL (fixed at construction) and a transport handle.
/// Both are shared on clone, so clones are cheap and calls from different tasks
/// never interfere: each call is one independent request/response round trip.
/// There is no retry, no cache and no explicit timeout.
pub struct ResourceClient<T: RestEntity> {
    base_url: Arc<str>,
    http: reqwest::Client,
    _entity: PhantomData<fn() -> T>,
}

impl<T: RestEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: Arc::clone(&self.base_url),
            http: self.http.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: RestEntity> ResourceClient<T> {
    /// Creates a client with its own connection pool.
    pub fn new(base_url: &str) -> Result<Self, FrameworkError> {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Creates a client sharing an existing connection pool.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<Self, FrameworkError> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Self {
            base_url: base_url.into(),
            http,
            _entity: PhantomData,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{collection}/`
    pub fn collection_url(&self) -> String {
        format!("{}/{}/", self.base_url, T::COLLECTION)
    }

    /// `{base}/{collection}/{id}/`
    pub fn item_url(&self, id: &T::Id) -> String {
        format!("{}/{}/{}/", self.base_url, T::COLLECTION, id)
    }

    pub async fn list(&self, query: &T::Query) -> Result<Vec<T>, FrameworkError> {
        let pairs = T::query_pairs(query);
        debug!(resource = T::RESOURCE, ?pairs, "List");
        let mut request = self.http.get(self.collection_url()).header(ACCEPT, JSON);
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        let response = request.send().await?;
        check_response::<T>(&response, Operation::List, None)?;
        decode::<T, Vec<T>>(response).await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, FrameworkError> {
        debug!(resource = T::RESOURCE, %id, "Get");
        let response = self
            .http
            .get(self.item_url(&id))
            .header(ACCEPT, JSON)
            .send()
            .await?;
        check_response::<T>(&response, Operation::Get, Some(&id))?;
        decode::<T, T>(response).await
    }
}

impl<T: WritableEntity> ResourceClient<T> {
    fn write_request(&self, method: Method, url: String) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
    }

    pub async fn create(&self, params: &T::CreateParams) -> Result<T, FrameworkError> {
        debug!(resource = T::RESOURCE, ?params, "Create");
        let response = self
            .write_request(Method::POST, self.collection_url())
            .json(params)
            .send()
            .await?;
        check_response::<T>(&response, Operation::Create, None)?;
        decode::<T, T>(response).await
    }

    pub async fn update(&self, id: T::Id, update: &T::UpdateParams) -> Result<T, FrameworkError> {
        debug!(resource = T::RESOURCE, %id, ?update, "Update");
        let response = self
            .write_request(Method::PUT, self.item_url(&id))
            .json(update)
            .send()
            .await?;
        check_response::<T>(&response, Operation::Update, Some(&id))?;
        decode::<T, T>(response).await
    }

    /// Deletes a record and returns the server's verdict.
    ///
    /// A 2xx response with an empty body (e.g. `204 No Content`) counts as `true`.
    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        debug!(resource = T::RESOURCE, %id, "Delete");
        let response = self
            .http
            .delete(self.item_url(&id))
            .header(ACCEPT, JSON)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            debug!(resource = T::RESOURCE, op = ?Operation::Delete, %status, "Rejected status");
            return Err(rejected_status::<T>(Operation::Delete, Some(&id), status));
        }
        let is_json = content_type(response.headers()).is_some_and(is_json_content_type);
        let declared = content_type(response.headers()).map(str::to_string);
        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(true);
        }
        if !is_json {
            debug!(resource = T::RESOURCE, op = ?Operation::Delete, content_type = ?declared, "Rejected content type");
            return Err(rejected_content_type::<T>(
                Operation::Delete,
                Some(&id),
                status,
                declared.as_deref(),
            ));
        }
        serde_json::from_slice(&body).map_err(|source| {
            debug!(resource = T::RESOURCE, error = %source, "Undecodable body");
            FrameworkError::Decode {
                resource: T::RESOURCE,
                source,
            }
        })
    }
}

// =============================================================================
// 4. TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, Debug, Deserialize)]
    struct Widget {
        #[allow(dead_code)]
        id: u32,
    }

    impl RestEntity for Widget {
        type Id = u32;
        type Query = ();
        const COLLECTION: &'static str = "widgets";
        const RESOURCE: &'static str = "widget";
    }

    #[test]
    fn test_urls_are_built_from_base() {
        let client = ResourceClient::<Widget>::new("https://api.example.com/api/v1").unwrap();
        assert_eq!(client.collection_url(), "https://api.example.com/api/v1/widgets/");
        assert_eq!(client.item_url(&7), "https://api.example.com/api/v1/widgets/7/");
    }

    #[test]
    fn test_trailing_slash_on_base_is_ignored() {
        let client = ResourceClient::<Widget>::new("http://localhost:3000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.item_url(&1), "http://localhost:3000/api/widgets/1/");
    }

    #[test]
    fn test_invalid_base_urls_are_rejected() {
        for raw in ["not a url", "ftp://example.com", "https://example.com/api?x=1"] {
            let err = ResourceClient::<Widget>::new(raw).err().expect("should be rejected");
            assert!(
                matches!(err, FrameworkError::InvalidBaseUrl { .. }),
                "unexpected error for {raw}: {err:?}"
            );
        }
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(is_json_content_type("application/problem+json"));
        assert!(!is_json_content_type("text/html; charset=utf-8"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type(""));
    }

    #[test]
    fn test_status_failure_names_target_and_status() {
        let err = rejected_status::<Widget>(
            Operation::Update,
            Some(&42),
            StatusCode::INTERNAL_SERVER_ERROR,
        );
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.to_string(),
            "Failed to update widget 42: HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn test_list_failure_names_collection() {
        let err = rejected_status::<Widget>(Operation::List, None, StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Failed to fetch widgets: HTTP 404 Not Found");
    }

    #[test]
    fn test_content_type_failure_reports_declared_type() {
        let err = rejected_content_type::<Widget>(
            Operation::Get,
            Some(&3),
            StatusCode::OK,
            Some("text/html"),
        );
        assert!(matches!(err, FrameworkError::Fetch { status: 200, .. }));
        assert_eq!(err.status(), Some(200));
        assert!(err.to_string().contains("text/html"));

        let err = rejected_content_type::<Widget>(Operation::Get, Some(&3), StatusCode::OK, None);
        assert!(err.to_string().contains("'none'"));
    }
}
