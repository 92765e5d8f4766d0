//! Resource trait implementations for the Product domain type.
//!
//! This module contains the [`RestEntity`] and [`WritableEntity`] implementations
//! that let [`Product`] be served by the generic [`crate::framework::ResourceClient`].
//!
//! Products live under `{base}/products/` and accept writes. The list query
//! supports a category filter (`categoryId`) and a title search (`title`).

use crate::framework::{RestEntity, WritableEntity};
use crate::model::{Product, ProductCreate, ProductQuery, ProductUpdate};

impl RestEntity for Product {
    type Id = u64;
    type Query = ProductQuery;

    const COLLECTION: &'static str = "products";
    const RESOURCE: &'static str = "product";

    /// Renders the filters that are set.
    ///
    /// # Parameters
    /// - `categoryId`: only products of that category
    /// - `title`: products whose title matches
    fn query_pairs(query: &ProductQuery) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category_id) = query.category_id {
            pairs.push(("categoryId", category_id.to_string()));
        }
        if let Some(title) = query.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            pairs.push(("title", title.to_string()));
        }
        pairs
    }
}

impl WritableEntity for Product {
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
}
