//! Condition tier classification.
//!
//! Sellers describe the condition of a refurbished device in a free-text
//! note. The classifier maps that note onto a closed, ordered set of tiers
//! for display and scoring. It is deterministic and total: unrecognized or
//! missing text maps to [`ConditionTier::Unknown`], never an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete condition quality, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConditionTier {
    /// "Comme neuf" / "like new".
    LikeNew,
    /// Excellent condition.
    Excellent,
    /// Good condition.
    Good,
    /// Fair / acceptable condition.
    Fair,
    /// No recognizable condition keyword.
    #[default]
    Unknown,
}

impl ConditionTier {
    /// All tiers, best first. Classification scans in this order so that
    /// when several keywords match, the best tier wins.
    pub const ALL: [ConditionTier; 5] = [
        ConditionTier::LikeNew,
        ConditionTier::Excellent,
        ConditionTier::Good,
        ConditionTier::Fair,
        ConditionTier::Unknown,
    ];

    /// Classify a free-text condition note.
    ///
    /// Matching is case-insensitive keyword detection over French and
    /// English phrases. Ties break toward the better tier.
    pub fn classify(note: Option<&str>) -> ConditionTier {
        let note = match note {
            Some(n) if !n.trim().is_empty() => n.to_lowercase(),
            _ => return ConditionTier::Unknown,
        };

        for tier in ConditionTier::ALL {
            if tier.keywords().iter().any(|kw| note.contains(kw)) {
                return tier;
            }
        }
        ConditionTier::Unknown
    }

    /// Keywords that indicate this tier in a condition note.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            ConditionTier::LikeNew => &["comme neuf", "like new", "neuf", "mint"],
            ConditionTier::Excellent => &["excellent", "tr\u{e8}s bon", "tres bon", "parfait"],
            ConditionTier::Good => &["bon \u{e9}tat", "bon etat", "good", "bien"],
            ConditionTier::Fair => &["correct", "acceptable", "fair", "moyen"],
            ConditionTier::Unknown => &[],
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionTier::LikeNew => "Comme neuf",
            ConditionTier::Excellent => "Excellent \u{e9}tat",
            ConditionTier::Good => "Bon \u{e9}tat",
            ConditionTier::Fair => "\u{c9}tat correct",
            ConditionTier::Unknown => "\u{c9}tat non pr\u{e9}cis\u{e9}",
        }
    }

    /// Stable display color for the tier badge.
    pub fn color(&self) -> &'static str {
        match self {
            ConditionTier::LikeNew => "#00a550",
            ConditionTier::Excellent => "#50b848",
            ConditionTier::Good => "#ffc107",
            ConditionTier::Fair => "#ff9800",
            ConditionTier::Unknown => "#9e9e9e",
        }
    }

    /// Numeric weight in `[0, 1]` used by the listing scorer. Strictly
    /// decreasing from best to worst tier.
    pub fn weight(&self) -> f64 {
        match self {
            ConditionTier::LikeNew => 1.0,
            ConditionTier::Excellent => 0.8,
            ConditionTier::Good => 0.55,
            ConditionTier::Fair => 0.3,
            ConditionTier::Unknown => 0.1,
        }
    }

    /// Rank for ordering comparisons (higher = better).
    pub fn rank(&self) -> u8 {
        match self {
            ConditionTier::LikeNew => 4,
            ConditionTier::Excellent => 3,
            ConditionTier::Good => 2,
            ConditionTier::Fair => 1,
            ConditionTier::Unknown => 0,
        }
    }
}

impl fmt::Display for ConditionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_like_new() {
        assert_eq!(
            ConditionTier::classify(Some("Comme neuf")),
            ConditionTier::LikeNew
        );
        assert_eq!(
            ConditionTier::classify(Some("like NEW, boxed")),
            ConditionTier::LikeNew
        );
    }

    #[test]
    fn test_classify_french_accents() {
        assert_eq!(
            ConditionTier::classify(Some("Tr\u{e8}s bon \u{e9}tat g\u{e9}n\u{e9}ral")),
            ConditionTier::Excellent
        );
    }

    #[test]
    fn test_classify_empty_and_none() {
        assert_eq!(ConditionTier::classify(None), ConditionTier::Unknown);
        assert_eq!(ConditionTier::classify(Some("")), ConditionTier::Unknown);
        assert_eq!(ConditionTier::classify(Some("   ")), ConditionTier::Unknown);
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(
            ConditionTier::classify(Some("Couleur: Noir, 128GB")),
            ConditionTier::Unknown
        );
    }

    #[test]
    fn test_tie_breaks_toward_better_tier() {
        // "tres bon etat" contains both an Excellent keyword and the Good
        // keyword "bon etat"; the better tier must win.
        assert_eq!(
            ConditionTier::classify(Some("tres bon etat")),
            ConditionTier::Excellent
        );
        assert_eq!(
            ConditionTier::classify(Some("comme neuf, excellent")),
            ConditionTier::LikeNew
        );
    }

    #[test]
    fn test_weights_strictly_decreasing() {
        let weights: Vec<f64> = ConditionTier::ALL.iter().map(|t| t.weight()).collect();
        for pair in weights.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_tier_colors_stable() {
        assert_eq!(ConditionTier::LikeNew.color(), "#00a550");
        assert_eq!(ConditionTier::Unknown.color(), "#9e9e9e");
    }
}
