//! Wire DTOs for money-carrying resources.
//!
//! The backend exchanges decimal prices; domain types use cents-based
//! [`Money`]. Types whose wire shape already matches their domain shape
//! (products, reviews, passports) deserialize directly and do not appear
//! here.

use remarket_commerce::cart::{CartItem, SelectedInsurance};
use remarket_commerce::ids::{CartItemId, ListingId, ProductId, SellerId};
use remarket_commerce::listing::{DeliveryInfo, Listing};
use remarket_commerce::money::{Currency, Money};
use serde::Deserialize;

/// The marketplace operates in euros.
pub(crate) const WIRE_CURRENCY: Currency = Currency::EUR;

/// A seller listing as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDto {
    pub id: ListingId,
    pub product_id: ProductId,
    #[serde(default)]
    pub seller_id: Option<SellerId>,
    #[serde(default)]
    pub seller_shop_name: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub condition_note: Option<String>,
    #[serde(default)]
    pub estimated_delivery_min: Option<String>,
    #[serde(default)]
    pub estimated_delivery_max: Option<String>,
    #[serde(default)]
    pub express_delivery_available: bool,
    #[serde(default)]
    pub express_delivery_price: Option<f64>,
    #[serde(default)]
    pub express_delivery_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<ListingDto> for Listing {
    fn from(dto: ListingDto) -> Self {
        Listing {
            id: dto.id,
            product_id: dto.product_id,
            seller_id: dto.seller_id.unwrap_or_else(|| SellerId::new("")),
            seller_shop_name: dto.seller_shop_name,
            price: Money::from_decimal(dto.price, WIRE_CURRENCY),
            quantity: dto.quantity,
            condition_note: dto.condition_note,
            delivery: DeliveryInfo {
                estimated_min: dto.estimated_delivery_min,
                estimated_max: dto.estimated_delivery_max,
                express_available: dto.express_delivery_available,
                express_price: dto
                    .express_delivery_price
                    .map(|p| Money::from_decimal(p, WIRE_CURRENCY)),
                express_date: dto.express_delivery_date,
            },
            created_at: dto.created_at,
        }
    }
}

/// A cart item as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub id: CartItemId,
    pub listing_id: ListingId,
    #[serde(default)]
    pub product_title: String,
    #[serde(default)]
    pub product_brand: String,
    #[serde(default)]
    pub product_image: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub seller_shop_name: String,
    #[serde(default)]
    pub condition_note: Option<String>,
    #[serde(default)]
    pub estimated_delivery_min: Option<String>,
    #[serde(default)]
    pub estimated_delivery_max: Option<String>,
    #[serde(default)]
    pub express_delivery_available: bool,
    #[serde(default)]
    pub express_delivery_price: Option<f64>,
    #[serde(default)]
    pub express_delivery_date: Option<String>,
    #[serde(default)]
    pub insurance: Option<SelectedInsurance>,
}

impl From<CartItemDto> for CartItem {
    fn from(dto: CartItemDto) -> Self {
        CartItem {
            id: dto.id,
            listing_id: dto.listing_id,
            product_title: dto.product_title,
            product_brand: dto.product_brand,
            product_image: dto.product_image,
            unit_price: Money::from_decimal(dto.price, WIRE_CURRENCY),
            quantity: dto.quantity,
            seller_shop_name: dto.seller_shop_name,
            condition_note: dto.condition_note,
            delivery: DeliveryInfo {
                estimated_min: dto.estimated_delivery_min,
                estimated_max: dto.estimated_delivery_max,
                express_available: dto.express_delivery_available,
                express_price: dto
                    .express_delivery_price
                    .map(|p| Money::from_decimal(p, WIRE_CURRENCY)),
                express_date: dto.express_delivery_date,
            },
            insurance: dto.insurance,
        }
    }
}
