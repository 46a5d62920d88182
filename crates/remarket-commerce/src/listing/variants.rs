//! Variant detection by condition-note mining.
//!
//! Sellers encode pseudo-variants (color, storage capacity, size) inside the
//! free-text condition note. The detector scans the listing set with a
//! pluggable list of per-axis patterns and surfaces an axis as a selectable
//! choice only when more than one distinct value was observed. This is
//! best-effort text mining: false positives and negatives are expected.

use crate::error::CommerceError;
use crate::listing::Listing;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Extraction rule for one variant axis.
///
/// Patterns are evaluated independently per listing; the first pattern that
/// matches wins. If the pattern has a capture group, the group is the value,
/// otherwise the whole match is.
#[derive(Debug, Clone)]
pub struct AxisPattern {
    axis: String,
    label: String,
    patterns: Vec<Regex>,
    uppercase_values: bool,
}

impl AxisPattern {
    /// Build an axis rule from regex sources.
    pub fn new(
        axis: impl Into<String>,
        label: impl Into<String>,
        patterns: &[&str],
    ) -> Result<Self, CommerceError> {
        let axis = axis.into();
        let mut compiled = Vec::with_capacity(patterns.len());
        for source in patterns {
            let regex = Regex::new(source).map_err(|e| CommerceError::InvalidPattern {
                axis: axis.clone(),
                message: e.to_string(),
            })?;
            compiled.push(regex);
        }
        Ok(Self {
            axis,
            label: label.into(),
            patterns: compiled,
            uppercase_values: false,
        })
    }

    /// Normalize extracted values to uppercase (used for storage capacities
    /// so "128gb" and "128GB" collapse into one value).
    pub fn uppercased(mut self) -> Self {
        self.uppercase_values = true;
        self
    }

    /// Axis identifier (e.g., "color").
    pub fn axis(&self) -> &str {
        &self.axis
    }

    /// Display label (e.g., "Couleur").
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Extract this axis's value from a condition note, if present.
    fn extract(&self, note: &str) -> Option<String> {
        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(note) {
                let raw = caps
                    .get(1)
                    .or_else(|| caps.get(0))
                    .map(|m| m.as_str().trim())
                    .unwrap_or("");
                if !raw.is_empty() {
                    return Some(if self.uppercase_values {
                        raw.to_uppercase()
                    } else {
                        raw.to_string()
                    });
                }
            }
        }
        None
    }

    /// Check whether a note satisfies a selected value for this axis
    /// (case-insensitive substring).
    fn value_matches(&self, note: &str, value: &str) -> bool {
        if self.uppercase_values {
            note.to_uppercase().contains(&value.to_uppercase())
        } else {
            note.to_lowercase().contains(&value.to_lowercase())
        }
    }
}

/// A surfaced variant axis with its distinct observed values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantGroup {
    /// Axis identifier.
    pub axis: String,
    /// Display label.
    pub label: String,
    /// Distinct values in first-observed order.
    pub values: Vec<String>,
}

/// Mines variant axes from a listing set's condition notes.
#[derive(Debug, Clone)]
pub struct VariantDetector {
    axes: Vec<AxisPattern>,
}

impl Default for VariantDetector {
    /// Standard axes: color ("Couleur: Noir"), storage ("128GB" / "1 To"),
    /// and size ("Taille: M").
    fn default() -> Self {
        let axes = vec![
            AxisPattern::new(
                "color",
                "Couleur",
                &[r"(?i)couleur[:\s]+([\w\s-]+)", r"(?i)color[:\s]+([\w\s-]+)"],
            ),
            AxisPattern::new("storage", "Stockage", &[r"(?i)(\d+\s*(?:GB|TB|Go|To))"])
                .map(AxisPattern::uppercased),
            AxisPattern::new(
                "size",
                "Taille",
                &[r"(?i)taille[:\s]+([\w\s-]+)", r"(?i)size[:\s]+([\w\s-]+)"],
            ),
        ];
        let axes = axes
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .expect("built-in variant patterns are valid");
        Self { axes }
    }
}

impl VariantDetector {
    /// Build a detector from custom axis rules.
    pub fn new(axes: Vec<AxisPattern>) -> Self {
        Self { axes }
    }

    /// Scan the listing set and return the axes worth presenting to the
    /// buyer: only axes with more than one distinct observed value, since a
    /// single value leaves nothing to choose between.
    pub fn detect(&self, listings: &[Listing]) -> Vec<VariantGroup> {
        let mut groups = Vec::new();
        for axis in &self.axes {
            let mut values: Vec<String> = Vec::new();
            for listing in listings {
                let note = match listing.condition_note.as_deref() {
                    Some(n) => n,
                    None => continue,
                };
                if let Some(value) = axis.extract(note) {
                    if !values.contains(&value) {
                        values.push(value);
                    }
                }
            }
            if values.len() > 1 {
                groups.push(VariantGroup {
                    axis: axis.axis.clone(),
                    label: axis.label.clone(),
                    values,
                });
            }
        }
        groups
    }

    /// Find a listing whose condition note satisfies *all* selected axis
    /// values (logical AND, case-insensitive). Returns `None` when no
    /// listing matches, in which case the caller keeps its prior selection.
    pub fn find_match<'a>(
        &self,
        listings: &'a [Listing],
        selection: &BTreeMap<String, String>,
    ) -> Option<&'a Listing> {
        if selection.is_empty() {
            return None;
        }
        listings.iter().find(|listing| {
            let note = listing.condition_note.as_deref().unwrap_or("");
            selection.iter().all(|(axis, value)| {
                match self.axes.iter().find(|a| a.axis == *axis) {
                    Some(axis_pattern) => axis_pattern.value_matches(note, value),
                    None => note.to_lowercase().contains(&value.to_lowercase()),
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn listing(id: &str, note: &str) -> Listing {
        Listing::new(id, "1", Money::new(10000, Currency::EUR), 1).with_condition_note(note)
    }

    fn sample_set() -> Vec<Listing> {
        vec![
            listing("1", "Couleur: Noir, 128GB"),
            listing("2", "Couleur: Blanc, 128GB"),
            listing("3", "Couleur: Noir, 256GB"),
        ]
    }

    #[test]
    fn test_detects_axes_with_multiple_values() {
        let detector = VariantDetector::default();
        let groups = detector.detect(&sample_set());

        let color = groups.iter().find(|g| g.axis == "color").unwrap();
        assert_eq!(color.values, vec!["Noir", "Blanc"]);

        let storage = groups.iter().find(|g| g.axis == "storage").unwrap();
        assert_eq!(storage.values, vec!["128GB", "256GB"]);
    }

    #[test]
    fn test_single_value_axis_not_surfaced() {
        let detector = VariantDetector::default();
        let set = vec![
            listing("1", "Couleur: Noir, 128GB"),
            listing("2", "Couleur: Noir, 256GB"),
        ];
        let groups = detector.detect(&set);
        assert!(groups.iter().all(|g| g.axis != "color"));
        assert!(groups.iter().any(|g| g.axis == "storage"));
    }

    #[test]
    fn test_storage_values_normalized_to_uppercase() {
        let detector = VariantDetector::default();
        let set = vec![listing("1", "64gb"), listing("2", "128 Go")];
        let groups = detector.detect(&set);
        let storage = groups.iter().find(|g| g.axis == "storage").unwrap();
        assert_eq!(storage.values, vec!["64GB", "128 GO"]);
    }

    #[test]
    fn test_selection_narrows_to_matching_listing() {
        let detector = VariantDetector::default();
        let set = sample_set();
        let mut selection = BTreeMap::new();
        selection.insert("color".to_string(), "Blanc".to_string());

        let found = detector.find_match(&set, &selection).unwrap();
        assert_eq!(found.id.as_str(), "2");
    }

    #[test]
    fn test_conjunction_of_axes() {
        let detector = VariantDetector::default();
        let set = sample_set();
        let mut selection = BTreeMap::new();
        selection.insert("color".to_string(), "Noir".to_string());
        selection.insert("storage".to_string(), "256GB".to_string());

        let found = detector.find_match(&set, &selection).unwrap();
        assert_eq!(found.id.as_str(), "3");
    }

    #[test]
    fn test_no_match_returns_none() {
        // Blanc + 256GB does not exist in the set; the caller keeps its
        // prior selection.
        let detector = VariantDetector::default();
        let set = sample_set();
        let mut selection = BTreeMap::new();
        selection.insert("color".to_string(), "Blanc".to_string());
        selection.insert("storage".to_string(), "256GB".to_string());

        assert!(detector.find_match(&set, &selection).is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let detector = VariantDetector::default();
        let set = sample_set();
        let mut selection = BTreeMap::new();
        selection.insert("color".to_string(), "blanc".to_string());
        selection.insert("storage".to_string(), "128gb".to_string());

        let found = detector.find_match(&set, &selection).unwrap();
        assert_eq!(found.id.as_str(), "2");
    }

    #[test]
    fn test_empty_inputs() {
        let detector = VariantDetector::default();
        assert!(detector.detect(&[]).is_empty());
        assert!(detector.find_match(&[], &BTreeMap::new()).is_none());
    }

    #[test]
    fn test_custom_axis() {
        let axis = AxisPattern::new("grade", "Grade", &[r"(?i)grade[:\s]+([A-C])"]).unwrap();
        let detector = VariantDetector::new(vec![axis]);
        let set = vec![listing("1", "Grade: A"), listing("2", "Grade: B")];
        let groups = detector.detect(&set);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].values, vec!["A", "B"]);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(AxisPattern::new("broken", "Broken", &["("]).is_err());
    }
}
