//! Shipping address endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::page::Paged;
use remarket_commerce::ids::{AddressId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A saved shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Request payload for creating or updating an address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Client for the address endpoints.
#[derive(Debug, Clone)]
pub struct AddressApi {
    client: ApiClient,
}

impl AddressApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Addresses saved by a user.
    pub async fn for_user(&self, user_id: &UserId) -> Result<Vec<Address>, ApiError> {
        let paged: Paged<Address> = self
            .client
            .get_json(&format!("/addresses/user/{}", user_id), &[])
            .await?;
        Ok(paged.into_items())
    }

    /// Create a new address.
    pub async fn create(&self, request: &AddressRequest) -> Result<Address, ApiError> {
        self.client.post_json("/addresses", request).await
    }

    /// Update an existing address.
    pub async fn update(
        &self,
        id: &AddressId,
        request: &AddressRequest,
    ) -> Result<Address, ApiError> {
        self.client
            .put_json(&format!("/addresses/{}", id), request)
            .await
    }

    /// Delete an address.
    pub async fn delete(&self, id: &AddressId) -> Result<(), ApiError> {
        self.client.delete(&format!("/addresses/{}", id)).await
    }

    /// Mark an address as the user's default.
    pub async fn set_default(&self, id: &AddressId, user_id: &UserId) -> Result<(), ApiError> {
        self.client
            .put_unit(
                &format!("/addresses/{}/set-default", id),
                &json!({ "userId": user_id }),
            )
            .await
    }
}
