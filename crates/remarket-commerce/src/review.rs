//! Product reviews and aggregate statistics.

use crate::ids::{ProductId, ReviewId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A buyer's rating and comment for a product.
///
/// The backend enforces one review per (product, user) pair; a second
/// submission is rejected with a conflict, observed at the API layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Reviewed product.
    pub product_id: ProductId,
    /// Authoring user.
    pub user_id: UserId,
    /// Author display name (denormalized).
    #[serde(default)]
    pub user_name: String,
    /// Rating from 1 to 5.
    pub rating: u8,
    /// Optional review title.
    #[serde(default)]
    pub title: Option<String>,
    /// Review body.
    #[serde(default)]
    pub comment: String,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Whether the purchase was verified.
    #[serde(default)]
    pub verified: bool,
}

/// Precomputed review distribution for a product.
///
/// Computed server-side, not derived client-side. The backend keys the
/// distribution map with string rating levels.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    /// Mean rating.
    #[serde(default)]
    pub average_rating: f64,
    /// Total number of reviews.
    #[serde(default)]
    pub total_reviews: u64,
    /// Count per rating level, keyed by the stringified level ("1".."5").
    #[serde(default)]
    pub rating_counts: HashMap<String, u64>,
}

impl ReviewStats {
    /// Number of reviews at a rating level; missing levels count zero.
    pub fn count_for(&self, level: u8) -> u64 {
        self.rating_counts
            .get(&level.to_string())
            .copied()
            .unwrap_or(0)
    }

    /// Share of reviews at a rating level, as a percentage. Zero reviews
    /// yields 0%, not a division error.
    pub fn percentage_for(&self, level: u8) -> f64 {
        if self.total_reviews == 0 {
            return 0.0;
        }
        self.count_for(level) as f64 / self.total_reviews as f64 * 100.0
    }
}

/// Request payload for submitting a review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Reviewed product.
    pub product_id: ProductId,
    /// Rating from 1 to 5.
    pub rating: u8,
    /// Optional review title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Review body.
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> ReviewStats {
        let mut counts = HashMap::new();
        counts.insert("5".to_string(), 6);
        counts.insert("4".to_string(), 3);
        counts.insert("1".to_string(), 1);
        ReviewStats {
            average_rating: 4.2,
            total_reviews: 10,
            rating_counts: counts,
        }
    }

    #[test]
    fn test_count_for_missing_level() {
        assert_eq!(stats().count_for(3), 0);
        assert_eq!(stats().count_for(5), 6);
    }

    #[test]
    fn test_percentage_for() {
        assert!((stats().percentage_for(5) - 60.0).abs() < 1e-9);
        assert!((stats().percentage_for(2) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_with_no_reviews() {
        let empty = ReviewStats::default();
        assert_eq!(empty.percentage_for(5), 0.0);
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "averageRating": 4.5,
            "totalReviews": 2,
            "ratingCounts": {"5": 1, "4": 1}
        }"#;
        let s: ReviewStats = serde_json::from_str(json).unwrap();
        assert_eq!(s.total_reviews, 2);
        assert_eq!(s.count_for(4), 1);
    }
}
