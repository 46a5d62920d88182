//! Device insurance plans.
//!
//! The coverage catalog is static in this version rather than fetched from
//! the backend. A plan is attached to a cart item by copying its identifying
//! fields into a [`SelectedInsurance`] at selection time, so later catalog
//! changes never retroactively alter items already in the cart.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Billing model of an insurance plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceKind {
    /// Paid in monthly installments.
    Monthly,
    /// Paid once for a year of coverage.
    Annual,
}

/// A coverage plan from the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsuranceOption {
    /// Stable plan identifier.
    pub id: String,
    /// Billing model.
    pub kind: InsuranceKind,
    /// Display name.
    pub name: String,
    /// Total price over the billing period.
    pub price: Money,
    /// Monthly installment, for monthly plans.
    pub price_per_month: Option<Money>,
    /// Coverage duration description.
    pub duration: String,
    /// Short description.
    pub description: String,
    /// Benefit bullet points.
    pub benefits: Vec<String>,
    /// Whether this plan is highlighted as recommended.
    pub recommended: bool,
}

impl InsuranceOption {
    /// The static plan catalog offered at cart time.
    pub fn catalog() -> Vec<InsuranceOption> {
        vec![
            InsuranceOption {
                id: "monthly".to_string(),
                kind: InsuranceKind::Monthly,
                name: "Assurance casse mensuelle".to_string(),
                price: Money::from_decimal(71.88, Currency::EUR),
                price_per_month: Some(Money::from_decimal(5.99, Currency::EUR)),
                duration: "12 mois minimum".to_string(),
                description:
                    "Paiement en mensualit\u{e9}s. Couverture de votre appareil jusqu'\u{e0} 5 ans."
                        .to_string(),
                benefits: vec![
                    "Casse, chute, fissure et oxydation accidentelle couvertes.".to_string(),
                    "Votre appareil r\u{e9}par\u{e9} gratuitement jusqu'\u{e0} 2 fois par an."
                        .to_string(),
                    "R\u{e9}paration rapide, appareil de retour en 3 jours.".to_string(),
                ],
                recommended: true,
            },
            InsuranceOption {
                id: "annual".to_string(),
                kind: InsuranceKind::Annual,
                name: "Assurance casse de 12 mois".to_string(),
                price: Money::from_decimal(59.99, Currency::EUR),
                price_per_month: None,
                duration: "12 mois".to_string(),
                description:
                    "Paiement en une seule fois. Couverture de votre appareil pour 1 an."
                        .to_string(),
                benefits: vec![
                    "Casse, chute, fissure et oxydation accidentelle couvertes.".to_string(),
                    "Votre appareil r\u{e9}par\u{e9} gratuitement 1 fois par an.".to_string(),
                    "R\u{e9}paration rapide, appareil de retour en 3 jours.".to_string(),
                ],
                recommended: false,
            },
        ]
    }

    /// Look up a catalog plan by id.
    pub fn by_id(id: &str) -> Option<InsuranceOption> {
        Self::catalog().into_iter().find(|o| o.id == id)
    }
}

/// Insurance attached to a cart item, denormalized at selection time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedInsurance {
    /// Id of the catalog plan this was copied from.
    pub option_id: String,
    /// Billing model.
    pub kind: InsuranceKind,
    /// Plan name at selection time.
    pub name: String,
    /// Plan price at selection time.
    pub price: Money,
}

impl SelectedInsurance {
    /// Copy the identifying fields of a catalog plan.
    pub fn from_option(option: &InsuranceOption) -> Self {
        Self {
            option_id: option.id.clone(),
            kind: option.kind,
            name: option.name.clone(),
            price: option.price,
        }
    }
}
