//! Catalog module.
//!
//! Read-only product and category types; writes happen through the seller
//! listing surface, not here.

mod category;
mod product;

pub use category::Category;
pub use product::Product;
