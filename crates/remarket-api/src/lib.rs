//! Typed HTTP clients for the Remarket backend REST API.
//!
//! The backend is an opaque JSON service; this crate shapes its responses
//! into `remarket-commerce` domain types and normalizes its wire quirks:
//! decimal prices become cents-based `Money`, numeric or string identifiers
//! become typed IDs, and collection endpoints that return either a bare
//! array or a page wrapper collapse into one shape (unknown shapes become
//! empty collections, never errors).
//!
//! # Example
//!
//! ```rust,ignore
//! use remarket_api::{ApiClient, ListingsApi};
//! use remarket_commerce::prelude::*;
//!
//! let client = ApiClient::new("https://host/api").with_bearer(token);
//! let listings = ListingsApi::new(client.clone());
//!
//! let offers = listings.by_product(&ProductId::new("42")).await?;
//! let best = recommend(&offers);
//! ```

mod client;
mod dto;
mod error;
mod page;

mod addresses;
mod cart;
mod catalog;
mod listings;
mod passports;
mod reviews;

pub use client::ApiClient;
pub use error::ApiError;
pub use page::{Page, Paged};

pub use addresses::{Address, AddressApi, AddressRequest};
pub use cart::CartApi;
pub use catalog::CatalogApi;
pub use listings::ListingsApi;
pub use passports::PassportApi;
pub use reviews::ReviewsApi;
