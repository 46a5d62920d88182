//! Review endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::page::Page;
use remarket_commerce::ids::ProductId;
use remarket_commerce::review::{CreateReviewRequest, Review, ReviewStats};

/// Client for the review endpoints.
#[derive(Debug, Clone)]
pub struct ReviewsApi {
    client: ApiClient,
}

impl ReviewsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Paginated reviews for a product.
    pub async fn for_product(
        &self,
        product_id: &ProductId,
        page: u32,
        size: u32,
    ) -> Result<Page<Review>, ApiError> {
        let path = format!("/reviews/product/{}", product_id);
        self.client
            .get_json(&path, &[("page", page.to_string()), ("size", size.to_string())])
            .await
    }

    /// Server-computed rating distribution for a product.
    pub async fn stats(&self, product_id: &ProductId) -> Result<ReviewStats, ApiError> {
        let path = format!("/reviews/product/{}/stats", product_id);
        self.client.get_json(&path, &[]).await
    }

    /// Submit a review. The backend allows one review per (product, user)
    /// pair; a second submission surfaces as [`ApiError::Conflict`].
    pub async fn create(&self, request: &CreateReviewRequest) -> Result<Review, ApiError> {
        self.client.post_json("/reviews", request).await
    }
}
