//! Catalog endpoints: products and categories.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::page::{Page, Paged};
use remarket_commerce::catalog::{Category, Product};
use remarket_commerce::ids::{CategoryId, ProductId};

/// Client for the catalog endpoints.
#[derive(Debug, Clone)]
pub struct CatalogApi {
    client: ApiClient,
}

impl CatalogApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One product by id.
    pub async fn product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.client.get_json(&format!("/products/{}", id), &[]).await
    }

    /// Paginated product search, optionally filtered by text and category.
    pub async fn products(
        &self,
        page: u32,
        size: u32,
        search: Option<&str>,
        category: Option<&CategoryId>,
    ) -> Result<Page<Product>, ApiError> {
        let mut query = vec![("page", page.to_string()), ("size", size.to_string())];
        if let Some(term) = search {
            query.push(("search", term.to_string()));
        }
        if let Some(category_id) = category {
            query.push(("category", category_id.to_string()));
        }
        self.client.get_json("/products", &query).await
    }

    /// All categories. Array-or-page tolerant.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let paged: Paged<Category> = self.client.get_json("/categories", &[]).await?;
        Ok(paged.into_items())
    }
}
