//! Resource trait implementation for the Category domain type.
//!
//! Categories live under `{base}/categories/` and are read-only: there is no
//! [`WritableEntity`](crate::framework::WritableEntity) implementation, so the
//! compiler rejects any attempt to create, update or delete one.

use crate::framework::RestEntity;
use crate::model::Category;

impl RestEntity for Category {
    type Id = u64;
    type Query = ();

    const COLLECTION: &'static str = "categories";
    const RESOURCE: &'static str = "category";
}
