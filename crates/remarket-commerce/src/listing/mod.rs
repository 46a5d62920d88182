//! Seller listings and the recommendation engine.
//!
//! Contains the listing type plus the pure functions consumed by the
//! product-detail view: condition classification, scoring, ranking, and
//! variant detection.

mod condition;
mod listing;
mod recommend;
pub mod score;
mod variants;

pub use condition::ConditionTier;
pub use listing::{CreateListingRequest, DeliveryInfo, Listing};
pub use recommend::{rank, recommend, ScoredListing};
pub use score::{score_listing, PriceBounds};
pub use variants::{AxisPattern, VariantDetector, VariantGroup};
