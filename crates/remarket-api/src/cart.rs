//! Server-persisted cart endpoints.
//!
//! The cart lives on the backend under the authenticated user; the app layer
//! mirrors the last-loaded snapshot and recomputes the summary locally.

use crate::client::ApiClient;
use crate::dto::CartItemDto;
use crate::error::ApiError;
use crate::page::Paged;
use remarket_commerce::cart::{AddToCartRequest, CartItem};
use remarket_commerce::ids::CartItemId;

const CART_PATH: &str = "/user/cart";

/// Client for the authenticated user's cart.
#[derive(Debug, Clone)]
pub struct CartApi {
    client: ApiClient,
}

impl CartApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Load the current cart snapshot.
    pub async fn load(&self) -> Result<Vec<CartItem>, ApiError> {
        let paged: Paged<CartItemDto> = self.client.get_json(CART_PATH, &[]).await?;
        Ok(paged.into_items().into_iter().map(Into::into).collect())
    }

    /// Add a listing to the cart.
    pub async fn add(&self, request: &AddToCartRequest) -> Result<CartItem, ApiError> {
        let dto: CartItemDto = self.client.post_json(CART_PATH, request).await?;
        Ok(dto.into())
    }

    /// Update an item's quantity.
    pub async fn update_quantity(
        &self,
        item_id: &CartItemId,
        quantity: u32,
    ) -> Result<CartItem, ApiError> {
        let path = format!("{}/{}/quantity", CART_PATH, item_id);
        let dto: CartItemDto = self
            .client
            .put_query(&path, &[("quantity", quantity.to_string())])
            .await?;
        Ok(dto.into())
    }

    /// Remove one item.
    pub async fn remove(&self, item_id: &CartItemId) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", CART_PATH, item_id)).await
    }

    /// Remove every item.
    pub async fn clear(&self) -> Result<(), ApiError> {
        self.client.delete(CART_PATH).await
    }
}
