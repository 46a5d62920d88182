//! Digital passport endpoint.

use crate::client::ApiClient;
use crate::error::ApiError;
use remarket_commerce::ids::ProductId;
use remarket_commerce::passport::DigitalPassport;

/// Client for the digital passport endpoint.
#[derive(Debug, Clone)]
pub struct PassportApi {
    client: ApiClient,
}

impl PassportApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The passport for a product. Not every product has one: a missing
    /// passport surfaces as [`ApiError::NotFound`], which the view renders
    /// as "passport unavailable" rather than a failure.
    pub async fn by_product(&self, product_id: &ProductId) -> Result<DigitalPassport, ApiError> {
        self.client
            .get_json(&format!("/digital-passports/product/{}", product_id), &[])
            .await
    }
}
