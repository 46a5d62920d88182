//! Shopping cart module.
//!
//! The cart itself is server-persisted; this module holds the item shape,
//! the static insurance catalog, and the pure summary aggregate.

mod insurance;
mod item;
mod summary;

pub use insurance::{InsuranceKind, InsuranceOption, SelectedInsurance};
pub use item::{AddToCartRequest, CartItem};
pub use summary::CartSummary;
