//! Seller listing types.

use crate::ids::{ListingId, ProductId, SellerId};
use crate::listing::ConditionTier;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One seller's offer of a catalog product.
///
/// Several sellers may list the same product; the buyer-facing product page
/// aggregates them through the recommendation engine. Listings are read-only
/// from the buyer's perspective and deleted by their owning seller or an
/// administrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: ListingId,
    /// Catalog product this offer is for.
    pub product_id: ProductId,
    /// Owning seller.
    pub seller_id: SellerId,
    /// Seller's shop display name (denormalized).
    pub seller_shop_name: String,
    /// Unit price.
    pub price: Money,
    /// Available quantity.
    pub quantity: u32,
    /// Free-text condition note written by the seller.
    pub condition_note: Option<String>,
    /// Delivery metadata.
    pub delivery: DeliveryInfo,
    /// ISO-8601 creation timestamp from the backend.
    pub created_at: Option<String>,
}

impl Listing {
    /// Create a listing with the minimum required fields.
    pub fn new(
        id: impl Into<ListingId>,
        product_id: impl Into<ProductId>,
        price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            seller_id: SellerId::new(""),
            seller_shop_name: String::new(),
            price,
            quantity,
            condition_note: None,
            delivery: DeliveryInfo::default(),
            created_at: None,
        }
    }

    /// Set the seller identity.
    pub fn with_seller(mut self, seller_id: impl Into<SellerId>, shop_name: impl Into<String>) -> Self {
        self.seller_id = seller_id.into();
        self.seller_shop_name = shop_name.into();
        self
    }

    /// Set the free-text condition note.
    pub fn with_condition_note(mut self, note: impl Into<String>) -> Self {
        self.condition_note = Some(note.into());
        self
    }

    /// Check if the listing has stock available.
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Classify the condition note into a discrete tier.
    pub fn condition_tier(&self) -> ConditionTier {
        ConditionTier::classify(self.condition_note.as_deref())
    }
}

/// Delivery metadata attached to a listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeliveryInfo {
    /// Earliest estimated delivery date.
    pub estimated_min: Option<String>,
    /// Latest estimated delivery date.
    pub estimated_max: Option<String>,
    /// Whether express delivery is offered.
    pub express_available: bool,
    /// Express delivery surcharge.
    pub express_price: Option<Money>,
    /// Express delivery date.
    pub express_date: Option<String>,
}

/// Request payload for creating a listing (seller or admin surface).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    /// Product being offered.
    pub product_id: ProductId,
    /// Unit price as a decimal amount.
    pub price: f64,
    /// Available quantity.
    pub quantity: u32,
    /// Free-text condition note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_note: Option<String>,
}
