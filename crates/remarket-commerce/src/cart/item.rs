//! Cart item types.

use crate::cart::SelectedInsurance;
use crate::error::CommerceError;
use crate::ids::{CartItemId, ListingId};
use crate::listing::DeliveryInfo;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A buyer's selected listing in the cart.
///
/// Product display fields are denormalized by the backend at add time so the
/// cart renders without re-fetching the catalog. The optional insurance is
/// likewise denormalized: a later change to the insurance catalog does not
/// alter items already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Unique cart item identifier.
    pub id: CartItemId,
    /// Listing being purchased.
    pub listing_id: ListingId,
    /// Product title (denormalized).
    pub product_title: String,
    /// Product brand (denormalized).
    pub product_brand: String,
    /// Product image URL (denormalized).
    pub product_image: Option<String>,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Seller's shop name (denormalized).
    pub seller_shop_name: String,
    /// The listing's condition note at add time.
    pub condition_note: Option<String>,
    /// Delivery estimates from the listing.
    pub delivery: DeliveryInfo,
    /// Selected insurance plan, if any.
    pub insurance: Option<SelectedInsurance>,
}

impl CartItem {
    /// Create a cart item with the minimum required fields.
    pub fn new(
        id: impl Into<CartItemId>,
        listing_id: impl Into<ListingId>,
        unit_price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            listing_id: listing_id.into(),
            product_title: String::new(),
            product_brand: String::new(),
            product_image: None,
            unit_price,
            quantity,
            seller_shop_name: String::new(),
            condition_note: None,
            delivery: DeliveryInfo::default(),
            insurance: None,
        }
    }

    /// Set the denormalized product display fields.
    pub fn with_product(mut self, title: impl Into<String>, brand: impl Into<String>) -> Self {
        self.product_title = title.into();
        self.product_brand = brand.into();
        self
    }

    /// Attach an insurance selection.
    pub fn with_insurance(mut self, insurance: SelectedInsurance) -> Self {
        self.insurance = Some(insurance);
        self
    }

    /// Line total (unit price times quantity), checked for overflow.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity as i64)
            .ok_or(CommerceError::Overflow)
    }
}

/// Request payload for adding a listing to the server-side cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    /// Listing to add.
    pub listing_id: ListingId,
    /// Quantity to add.
    pub quantity: u32,
    /// Unit price as a decimal amount.
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_line_total() {
        let item = CartItem::new("c1", "l1", Money::new(1000, Currency::EUR), 3);
        assert_eq!(item.line_total().unwrap().amount_cents, 3000);
    }

    #[test]
    fn test_line_total_overflow() {
        let item = CartItem::new("c1", "l1", Money::new(i64::MAX, Currency::EUR), 2);
        assert!(item.line_total().is_err());
    }
}
