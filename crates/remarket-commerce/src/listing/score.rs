//! Listing desirability scoring.
//!
//! A listing's score combines its price relative to the comparison set, its
//! condition tier, and stock availability. The function is pure: it depends
//! only on the listing and the set's precomputed price bounds.
//!
//! Chosen weights (see DESIGN.md):
//! - price: up to [`PRICE_WEIGHT`] points, cheapest of the set gets the full
//!   amount, most expensive gets zero;
//! - condition: tier weight scaled to [`CONDITION_WEIGHT`] points;
//! - stock: a flat [`IN_STOCK_BONUS`] strictly larger than the sum of the
//!   other two weights, so an out-of-stock listing can never outrank an
//!   in-stock one.

use crate::listing::Listing;
use crate::money::Money;

/// Maximum points awarded for price.
pub const PRICE_WEIGHT: f64 = 40.0;

/// Maximum points awarded for condition.
pub const CONDITION_WEIGHT: f64 = 30.0;

/// Flat bonus for having stock. Must exceed `PRICE_WEIGHT +
/// CONDITION_WEIGHT` to keep out-of-stock listings strictly below in-stock
/// ones.
pub const IN_STOCK_BONUS: f64 = 100.0;

/// Min/max price over a comparison set of listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    min_cents: i64,
    max_cents: i64,
}

impl PriceBounds {
    /// Compute the bounds of a listing set. Empty input yields degenerate
    /// bounds under which every price normalizes to the full price score.
    pub fn of(listings: &[Listing]) -> Self {
        let mut min_cents = i64::MAX;
        let mut max_cents = i64::MIN;
        for listing in listings {
            min_cents = min_cents.min(listing.price.amount_cents);
            max_cents = max_cents.max(listing.price.amount_cents);
        }
        if listings.is_empty() {
            Self {
                min_cents: 0,
                max_cents: 0,
            }
        } else {
            Self {
                min_cents,
                max_cents,
            }
        }
    }

    /// Normalize a price into `[0, 1]`: 1.0 for the cheapest price of the
    /// set, 0.0 for the most expensive. A single-price set normalizes to
    /// 1.0.
    pub fn normalized(&self, price: Money) -> f64 {
        let span = self.max_cents - self.min_cents;
        if span <= 0 {
            return 1.0;
        }
        (self.max_cents - price.amount_cents) as f64 / span as f64
    }
}

/// Score one listing against the comparison set's price bounds.
///
/// Monotone: a strictly lower price never decreases the score, a strictly
/// better condition tier never decreases it, and any in-stock listing scores
/// strictly above every out-of-stock listing.
pub fn score_listing(listing: &Listing, bounds: &PriceBounds) -> f64 {
    let price_score = bounds.normalized(listing.price) * PRICE_WEIGHT;
    let condition_score = listing.condition_tier().weight() * CONDITION_WEIGHT;
    let stock_score = if listing.in_stock() {
        IN_STOCK_BONUS
    } else {
        0.0
    };
    price_score + condition_score + stock_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn listing(id: &str, price_cents: i64, quantity: u32, note: Option<&str>) -> Listing {
        let mut l = Listing::new(id, "1", Money::new(price_cents, Currency::EUR), quantity);
        l.condition_note = note.map(String::from);
        l
    }

    #[test]
    fn test_cheaper_never_scores_lower() {
        let a = listing("a", 10000, 1, Some("bon etat"));
        let b = listing("b", 20000, 1, Some("bon etat"));
        let bounds = PriceBounds::of(&[a.clone(), b.clone()]);

        assert!(score_listing(&a, &bounds) >= score_listing(&b, &bounds));
    }

    #[test]
    fn test_better_condition_never_scores_lower() {
        let a = listing("a", 10000, 1, Some("comme neuf"));
        let b = listing("b", 10000, 1, Some("correct"));
        let bounds = PriceBounds::of(&[a.clone(), b.clone()]);

        assert!(score_listing(&a, &bounds) >= score_listing(&b, &bounds));
    }

    #[test]
    fn test_in_stock_strictly_beats_out_of_stock() {
        // Out-of-stock listing with the best possible profile still loses
        // to an in-stock listing with the worst profile.
        let best_profile = listing("a", 10000, 0, Some("comme neuf"));
        let worst_profile = listing("b", 99000, 1, None);
        let set = [best_profile.clone(), worst_profile.clone()];
        let bounds = PriceBounds::of(&set);

        assert!(score_listing(&worst_profile, &bounds) > score_listing(&best_profile, &bounds));
    }

    #[test]
    fn test_stock_difference_only() {
        let in_stock = listing("a", 15000, 2, Some("bon etat"));
        let out_of_stock = listing("b", 15000, 0, Some("bon etat"));
        let set = [in_stock.clone(), out_of_stock.clone()];
        let bounds = PriceBounds::of(&set);

        assert!(score_listing(&in_stock, &bounds) > score_listing(&out_of_stock, &bounds));
    }

    #[test]
    fn test_single_listing_gets_full_price_score() {
        let only = listing("a", 15000, 1, None);
        let bounds = PriceBounds::of(std::slice::from_ref(&only));
        let expected = PRICE_WEIGHT + 0.1 * CONDITION_WEIGHT + IN_STOCK_BONUS;
        assert!((score_listing(&only, &bounds) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_bounds() {
        let bounds = PriceBounds::of(&[]);
        assert!((bounds.normalized(Money::new(500, Currency::EUR)) - 1.0).abs() < 1e-9);
    }
}
