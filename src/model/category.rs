use serde::{Deserialize, Serialize};

/// A product category as served by the catalog API.
///
/// Categories are reference data: they are read through the
/// [`CategoryRepository`](crate::clients::CategoryRepository) and embedded in
/// every [`Product`](crate::model::Product), but never written by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image: String,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>, slug: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            image: image.into(),
        }
    }
}
