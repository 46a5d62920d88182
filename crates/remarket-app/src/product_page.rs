//! Product page view model.
//!
//! A pure reducer over an immutable page state: every user or data event
//! produces the next state, with the recommendation, ranking, and variant
//! groups recomputed whenever the listing set changes. Nothing here does
//! I/O; the host loads data through the API crate and feeds the results in
//! as events.

use remarket_commerce::catalog::Product;
use remarket_commerce::ids::{ListingId, UserId};
use remarket_commerce::listing::{
    rank, recommend, Listing, ScoredListing, VariantDetector, VariantGroup,
};
use remarket_commerce::review::{Review, ReviewStats};
use std::collections::BTreeMap;

/// State of the product detail page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPage {
    /// The product being viewed.
    pub product: Option<Product>,
    /// Listing snapshot, as loaded.
    pub listings: Vec<Listing>,
    /// Listings ranked best-first, recomputed from the snapshot.
    pub ranked: Vec<ScoredListing>,
    /// The single best offer, shown as the default buy box.
    pub recommended: Option<Listing>,
    /// The offer the buyer is currently looking at.
    pub selected: Option<Listing>,
    /// Variant axes worth presenting, mined from condition notes.
    pub variant_groups: Vec<VariantGroup>,
    /// The buyer's current per-axis choices.
    pub selected_variants: BTreeMap<String, String>,
    /// Purchase quantity, clamped to the selected listing's stock.
    pub quantity: u32,
    /// Reviews loaded so far, oldest page first.
    pub reviews: Vec<Review>,
    /// Server-computed review distribution.
    pub review_stats: Option<ReviewStats>,
}

/// Events driving the product page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The product record arrived.
    ProductLoaded(Product),
    /// A fresh listing snapshot arrived. Last snapshot wins: ranking,
    /// recommendation, variants, and the selection are all recomputed.
    ListingsLoaded(Vec<Listing>),
    /// The buyer picked a specific offer from the ranked list.
    ListingSelected(ListingId),
    /// The buyer picked a value on a variant axis.
    VariantSelected { axis: String, value: String },
    /// The buyer changed the purchase quantity.
    QuantityChanged(u32),
    /// A page of reviews arrived; appended to those already loaded.
    ReviewsLoaded(Vec<Review>),
    /// The review distribution arrived.
    StatsLoaded(ReviewStats),
}

/// Apply one event and return the next page state.
pub fn reduce(detector: &VariantDetector, state: ProductPage, event: PageEvent) -> ProductPage {
    let mut next = state;
    match event {
        PageEvent::ProductLoaded(product) => {
            next.product = Some(product);
        }
        PageEvent::ListingsLoaded(listings) => {
            next.ranked = rank(&listings);
            next.recommended = recommend(&listings).cloned();
            next.variant_groups = detector.detect(&listings);
            next.selected_variants.clear();
            next.listings = listings;
            next.selected = next.recommended.clone();
            next.quantity = initial_quantity(next.selected.as_ref());
        }
        PageEvent::ListingSelected(id) => {
            if let Some(listing) = next.listings.iter().find(|l| l.id == id) {
                next.selected = Some(listing.clone());
                next.quantity = clamp_quantity(next.quantity, listing);
            }
        }
        PageEvent::VariantSelected { axis, value } => {
            next.selected_variants.insert(axis, value);
            // No listing for this combination: keep the prior selection so
            // the buyer is never dropped onto nothing.
            if let Some(found) = detector.find_match(&next.listings, &next.selected_variants) {
                let found = found.clone();
                next.quantity = clamp_quantity(next.quantity, &found);
                next.selected = Some(found);
            }
        }
        PageEvent::QuantityChanged(quantity) => {
            next.quantity = match next.selected.as_ref() {
                Some(listing) => clamp_quantity(quantity, listing),
                None => quantity.max(1),
            };
        }
        PageEvent::ReviewsLoaded(reviews) => {
            next.reviews.extend(reviews);
        }
        PageEvent::StatsLoaded(stats) => {
            next.review_stats = Some(stats);
        }
    }
    next
}

impl ProductPage {
    /// Whether a user already reviewed this product (one review per user).
    pub fn user_has_reviewed(&self, user_id: &UserId) -> bool {
        self.reviews.iter().any(|r| &r.user_id == user_id)
    }
}

fn initial_quantity(selected: Option<&Listing>) -> u32 {
    match selected {
        Some(listing) if listing.in_stock() => 1,
        _ => 0,
    }
}

/// Clamp a requested quantity to the listing's available stock, keeping at
/// least one unit while the listing has any.
fn clamp_quantity(requested: u32, listing: &Listing) -> u32 {
    if listing.quantity == 0 {
        0
    } else {
        requested.clamp(1, listing.quantity)
    }
}
