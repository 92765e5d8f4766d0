//! Type-safe repositories over [`ResourceClient`](crate::framework::ResourceClient).

pub mod category_repository;
pub mod product_repository;
pub mod resource_repository;

pub use category_repository::*;
pub use product_repository::*;
pub use resource_repository::*;
