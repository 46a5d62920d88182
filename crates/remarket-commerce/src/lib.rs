//! Marketplace domain types and logic for Remarket.
//!
//! This crate provides the domain layer for a refurbished-electronics
//! marketplace front-end:
//!
//! - **Catalog**: products and categories (read-only from this layer)
//! - **Listings**: seller offers plus the recommendation engine — condition
//!   tier classification, scoring, ranking, and variant mining
//! - **Cart**: cart items, the static insurance catalog, summary aggregation
//! - **Reviews**: ratings with server-computed distribution stats
//! - **Passport**: environmental and traceability display data
//!
//! # Example
//!
//! ```rust
//! use remarket_commerce::prelude::*;
//!
//! let listings = vec![
//!     Listing::new("1", "42", Money::from_decimal(219.0, Currency::EUR), 3)
//!         .with_condition_note("Comme neuf, Couleur: Noir, 128GB"),
//!     Listing::new("2", "42", Money::from_decimal(249.0, Currency::EUR), 1)
//!         .with_condition_note("Bon \u{e9}tat, Couleur: Blanc, 128GB"),
//! ];
//!
//! // Pre-select the best offer for the product page.
//! let best = recommend(&listings).expect("non-empty set");
//! assert_eq!(best.condition_tier(), ConditionTier::LikeNew);
//!
//! // Full ranked sequence for the "all offers" view.
//! let ranked = rank(&listings);
//! assert_eq!(ranked.len(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod listing;
pub mod passport;
pub mod review;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product};

    // Listings and the recommendation engine
    pub use crate::listing::{
        rank, recommend, AxisPattern, ConditionTier, CreateListingRequest, DeliveryInfo, Listing,
        PriceBounds, ScoredListing, VariantDetector, VariantGroup,
    };

    // Cart
    pub use crate::cart::{
        AddToCartRequest, CartItem, CartSummary, InsuranceKind, InsuranceOption, SelectedInsurance,
    };

    // Reviews
    pub use crate::review::{CreateReviewRequest, Review, ReviewStats};

    // Digital passport
    pub use crate::passport::{DigitalPassport, EcoScore};
}
