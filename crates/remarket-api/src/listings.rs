//! Seller listing endpoints.
//!
//! Three surfaces share the listing resource: the public read surface, the
//! authenticated seller surface (own listings), and the admin surface (all
//! listings). Collection responses may be arrays or page wrappers; unknown
//! shapes normalize to empty.

use crate::client::ApiClient;
use crate::dto::ListingDto;
use crate::error::ApiError;
use crate::page::{Page, Paged};
use remarket_commerce::ids::{ListingId, ProductId};
use remarket_commerce::listing::{CreateListingRequest, Listing};

const PUBLIC_PATH: &str = "/listings";
const SELLER_PATH: &str = "/seller/listings";
const ADMIN_PATH: &str = "/admin/listings";

/// Client for the listing endpoints.
#[derive(Debug, Clone)]
pub struct ListingsApi {
    client: ApiClient,
}

impl ListingsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All active listings for one product — the recommendation engine's
    /// input snapshot.
    pub async fn by_product(&self, product_id: &ProductId) -> Result<Vec<Listing>, ApiError> {
        let path = format!("{}/product/{}", PUBLIC_PATH, product_id);
        let paged: Paged<ListingDto> = self.client.get_json(&path, &[]).await?;
        Ok(paged.into_items().into_iter().map(Into::into).collect())
    }

    /// One listing by id.
    pub async fn get(&self, id: &ListingId) -> Result<Listing, ApiError> {
        let path = format!("{}/{}", PUBLIC_PATH, id);
        let dto: ListingDto = self.client.get_json(&path, &[]).await?;
        Ok(dto.into())
    }

    /// Public paginated listing search.
    pub async fn list(
        &self,
        page: u32,
        size: u32,
        search: Option<&str>,
    ) -> Result<Page<Listing>, ApiError> {
        let mut query = vec![("page", page.to_string()), ("size", size.to_string())];
        if let Some(term) = search {
            query.push(("search", term.to_string()));
        }
        let page: Page<ListingDto> = self.client.get_json(PUBLIC_PATH, &query).await?;
        Ok(page.map(Into::into))
    }

    /// The authenticated seller's own listings.
    pub async fn my_listings(&self) -> Result<Vec<Listing>, ApiError> {
        let paged: Paged<ListingDto> = self.client.get_json(SELLER_PATH, &[]).await?;
        Ok(paged.into_items().into_iter().map(Into::into).collect())
    }

    /// Create a listing as the authenticated seller.
    pub async fn create(&self, request: &CreateListingRequest) -> Result<Listing, ApiError> {
        let dto: ListingDto = self.client.post_json(SELLER_PATH, request).await?;
        Ok(dto.into())
    }

    /// Delete the authenticated seller's own listing.
    pub async fn delete(&self, id: &ListingId) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", SELLER_PATH, id)).await
    }

    /// All listings, admin surface.
    pub async fn all_as_admin(&self) -> Result<Vec<Listing>, ApiError> {
        let paged: Paged<ListingDto> = self.client.get_json(ADMIN_PATH, &[]).await?;
        Ok(paged.into_items().into_iter().map(Into::into).collect())
    }

    /// Create a listing on behalf of a seller, admin surface.
    pub async fn create_as_admin(
        &self,
        request: &CreateListingRequest,
    ) -> Result<Listing, ApiError> {
        let dto: ListingDto = self.client.post_json(ADMIN_PATH, request).await?;
        Ok(dto.into())
    }

    /// Delete any listing, admin surface.
    pub async fn delete_as_admin(&self, id: &ListingId) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{}", ADMIN_PATH, id)).await
    }
}
