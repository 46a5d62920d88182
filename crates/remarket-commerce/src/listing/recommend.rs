//! Recommendation aggregation over a listing set.
//!
//! Scores every listing of a product and picks the single best offer plus a
//! fully ranked sequence for the "all offers" view. Total and reentrant:
//! empty input yields no recommendation rather than an error, and every call
//! recomputes from the caller-supplied snapshot.

use crate::listing::score::{score_listing, PriceBounds};
use crate::listing::Listing;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A listing paired with its computed score. Ephemeral: recomputed whenever
/// the listing set changes, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredListing {
    /// The scored listing.
    pub listing: Listing,
    /// Desirability score, higher is better.
    pub score: f64,
}

/// Return the single highest-scoring listing, or `None` for an empty set.
///
/// Ties break by lowest price, then lowest listing id, so the result is
/// deterministic for a given snapshot.
pub fn recommend(listings: &[Listing]) -> Option<&Listing> {
    let bounds = PriceBounds::of(listings);
    listings.iter().reduce(|best, candidate| {
        let best_score = score_listing(best, &bounds);
        let candidate_score = score_listing(candidate, &bounds);
        match compare_scored(candidate, candidate_score, best, best_score) {
            Ordering::Less => candidate,
            _ => best,
        }
    })
}

/// Rank all listings by descending score with the same deterministic
/// tie-break as [`recommend`]. Returns a permutation of the input.
pub fn rank(listings: &[Listing]) -> Vec<ScoredListing> {
    let bounds = PriceBounds::of(listings);
    let mut scored: Vec<ScoredListing> = listings
        .iter()
        .map(|listing| ScoredListing {
            listing: listing.clone(),
            score: score_listing(listing, &bounds),
        })
        .collect();

    scored.sort_by(|a, b| compare_scored(&a.listing, a.score, &b.listing, b.score));
    scored
}

/// Ordering used for ranking: best first (higher score, then lower price,
/// then lower id).
fn compare_scored(a: &Listing, a_score: f64, b: &Listing, b_score: f64) -> Ordering {
    b_score
        .partial_cmp(&a_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.price.amount_cents.cmp(&b.price.amount_cents))
        .then_with(|| a.id.cmp(&b.id))
}
