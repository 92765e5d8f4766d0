//! Pure data structures (DTOs) implementing the [`RestEntity`](crate::framework::RestEntity) trait.

pub mod category;
pub mod product;

pub use category::*;
pub use product::*;
