use crate::model::Category;
use serde::{Deserialize, Serialize};

/// Represents a product record in the catalog.
///
/// # Resource Framework
/// This struct implements the [`RestEntity`](crate::framework::RestEntity) and
/// [`WritableEntity`](crate::framework::WritableEntity) traits, allowing it to be
/// served by a [`ResourceClient`](crate::framework::ResourceClient).
///
/// See [`impl RestEntity for Product`](crate::product::entity) for details on:
/// - Creation payloads ([`ProductCreate`])
/// - Update payloads ([`ProductUpdate`])
/// - List filters ([`ProductQuery`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Product {
    /// The image shown first in listings, if the server sent any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Payload for creating a new product.
///
/// Unlike [`Product`], this carries no server-generated fields (id, slug,
/// timestamps) and refers to its category by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category_id: u64,
    pub images: Vec<String>,
}

impl ProductCreate {
    /// Creates a payload with a single image.
    ///
    /// # Arguments
    /// * `title` - Product title
    /// * `price` - Unit price, must be positive
    /// * `description` - Free text description
    /// * `category_id` - Id of an existing category
    /// * `image_url` - URL of the product image
    pub fn new(
        title: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        category_id: u64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price,
            description: description.into(),
            category_id,
            images: vec![image_url.into()],
        }
    }

    /// Checks the invariants every stored product satisfies.
    ///
    /// A product has a non-empty title, a positive price, one category and at
    /// least one image.
    pub fn validate(&self) -> Result<(), String> {
        check_title(&self.title)?;
        check_price(self.price)?;
        check_category_id(self.category_id)?;
        check_images(&self.images)
    }
}

fn check_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("title must not be empty".to_string());
    }
    Ok(())
}

// NaN would serialize as `null`, so non-finite prices never leave the process.
fn check_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price <= 0.0 {
        return Err(format!("price must be positive, got {price}"));
    }
    Ok(())
}

fn check_category_id(category_id: u64) -> Result<(), String> {
    if category_id == 0 {
        return Err("category id must be positive".to_string());
    }
    Ok(())
}

fn check_images(images: &[String]) -> Result<(), String> {
    if images.iter().all(|url| url.trim().is_empty()) {
        return Err("at least one image URL is required".to_string());
    }
    Ok(())
}

/// Payload for updating an existing product.
///
/// Only the fields that are set are sent; the server keeps the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ProductUpdate::default()
    }

    /// Checks the fields that are set against the same invariants as
    /// [`ProductCreate::validate`]. Unset fields keep their stored value.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            check_title(title)?;
        }
        if let Some(price) = self.price {
            check_price(price)?;
        }
        if let Some(category_id) = self.category_id {
            check_category_id(category_id)?;
        }
        if let Some(images) = &self.images {
            check_images(images)?;
        }
        Ok(())
    }
}

// Full replacement, as sent by an edit form.
impl From<ProductCreate> for ProductUpdate {
    fn from(create: ProductCreate) -> Self {
        Self {
            title: Some(create.title),
            price: Some(create.price),
            description: Some(create.description),
            category_id: Some(create.category_id),
            images: Some(create.images),
        }
    }
}

/// Filters for listing products. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category_id: Option<u64>,
    pub title: Option<String>,
}

impl ProductQuery {
    pub fn category(category_id: u64) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}
