//! Digital product passport.
//!
//! Environmental and traceability data attached to a catalog product:
//! carbon footprint, provenance journey, material composition, durability,
//! certifications, and recycling guidance. Supplied by the backend; this
//! module only shapes it for display.

use crate::ids::{PassportId, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A-to-E environmental grade, used for both the carbon score and the
/// repairability index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EcoScore {
    A,
    B,
    C,
    D,
    E,
}

impl EcoScore {
    /// Stable display color for the grade badge.
    pub fn color(&self) -> &'static str {
        match self {
            EcoScore::A => "#00a550",
            EcoScore::B => "#50b848",
            EcoScore::C => "#ffc107",
            EcoScore::D => "#ff9800",
            EcoScore::E => "#f44336",
        }
    }
}

impl fmt::Display for EcoScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            EcoScore::A => "A",
            EcoScore::B => "B",
            EcoScore::C => "C",
            EcoScore::D => "D",
            EcoScore::E => "E",
        };
        write!(f, "{}", letter)
    }
}

/// Carbon footprint broken down by lifecycle phase, in kg CO2.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarbonFootprint {
    /// Total over all phases.
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    pub manufacturing: f64,
    pub transportation: f64,
    /// Usage phase, estimated over three years.
    pub usage: f64,
    pub end_of_life: f64,
    /// Equivalent distance driven by car, in km.
    #[serde(default)]
    pub equivalent_km_car: f64,
    /// Trees needed to offset the total for one year.
    #[serde(default)]
    pub equivalent_trees_year: f64,
    /// Carbon grade.
    pub score: EcoScore,
}

/// One step of the product's provenance journey.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStep {
    pub location: String,
    pub date: String,
    /// Step kind (manufacturing, shipping, ...).
    #[serde(rename = "type")]
    pub kind: JourneyStepKind,
    #[serde(default)]
    pub description: String,
}

/// Kind of journey step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JourneyStepKind {
    Manufacturing,
    Assembly,
    QualityCheck,
    Shipping,
    Warehouse,
    Retail,
}

/// Provenance information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Traceability {
    pub country_of_origin: String,
    pub manufacture_date: String,
    pub manufacturer: String,
    #[serde(default)]
    pub factory_location: String,
    /// Provenance journey, oldest step first.
    #[serde(default)]
    pub journey: Vec<JourneyStep>,
    /// Supply chain transparency, 0-100%.
    #[serde(default)]
    pub supply_chain_transparency: f64,
}

/// One material in the product's composition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: String,
    /// Share of the product, in percent.
    pub percentage: f64,
    #[serde(default)]
    pub renewable: bool,
    #[serde(default)]
    pub recycled: bool,
    #[serde(default)]
    pub recyclable: bool,
    #[serde(default)]
    pub origin: String,
}

/// Durability and repairability information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Durability {
    /// Expected lifespan in years.
    pub expected_lifespan: f64,
    /// Repairability score, 0-10.
    pub repairability_score: f64,
    /// Repairability grade.
    pub repairability_index: EcoScore,
    #[serde(default)]
    pub spare_parts_available: bool,
    #[serde(default)]
    pub spare_parts_availability_years: u32,
    #[serde(default)]
    pub warranty_years: u32,
    #[serde(default)]
    pub extended_warranty_available: bool,
    /// Software update commitment in years, for electronics.
    #[serde(default)]
    pub software_updates_years: u32,
}

/// Kind of certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationKind {
    Environmental,
    Social,
    Quality,
    Safety,
    Other,
}

/// A third-party certification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub valid_until: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub verification_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: CertificationKind,
}

/// A physical collection point for end-of-life devices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPoint {
    pub name: String,
    pub address: String,
    /// Distance from the buyer, in km.
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub accepted_materials: Vec<String>,
}

/// End-of-life recycling guidance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecyclingInfo {
    #[serde(default)]
    pub recyclable: bool,
    /// Share of the product that is recyclable, in percent.
    #[serde(default)]
    pub recyclable_percentage: f64,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub collection_points: Vec<CollectionPoint>,
    #[serde(default)]
    pub take_back_program: bool,
    #[serde(default)]
    pub take_back_program_details: String,
}

/// The full digital passport for one product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DigitalPassport {
    pub id: PassportId,
    pub product_id: ProductId,
    pub carbon_footprint: CarbonFootprint,
    pub traceability: Traceability,
    #[serde(default)]
    pub materials: Vec<Material>,
    pub durability: Durability,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    pub recycling: RecyclingInfo,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eco_score_colors() {
        assert_eq!(EcoScore::A.color(), "#00a550");
        assert_eq!(EcoScore::E.color(), "#f44336");
        assert_eq!(EcoScore::B.to_string(), "B");
    }

    #[test]
    fn test_deserialize_passport() {
        let json = r#"{
            "id": 1,
            "productId": 42,
            "carbonFootprint": {
                "totalCO2": 58.4,
                "manufacturing": 45.0,
                "transportation": 6.2,
                "usage": 6.0,
                "endOfLife": 1.2,
                "equivalentKmCar": 240.0,
                "equivalentTreesYear": 3.0,
                "score": "B"
            },
            "traceability": {
                "countryOfOrigin": "France",
                "manufactureDate": "2022-03-01",
                "manufacturer": "Remade",
                "factoryLocation": "Caen",
                "journey": [
                    {"location": "Caen", "date": "2022-03-01", "type": "manufacturing", "description": ""},
                    {"location": "Paris", "date": "2022-03-10", "type": "quality-check", "description": ""}
                ],
                "supplyChainTransparency": 85.0
            },
            "materials": [
                {"name": "Aluminium", "percentage": 40.0, "renewable": false, "recycled": true, "recyclable": true, "origin": "EU"}
            ],
            "durability": {
                "expectedLifespan": 5.0,
                "repairabilityScore": 7.8,
                "repairabilityIndex": "B",
                "sparePartsAvailable": true,
                "sparePartsAvailabilityYears": 7,
                "warrantyYears": 1,
                "extendedWarrantyAvailable": true,
                "softwareUpdatesYears": 4
            },
            "certifications": [
                {"name": "EPEAT", "issuer": "GEC", "type": "environmental"}
            ],
            "recycling": {
                "recyclable": true,
                "recyclablePercentage": 92.0,
                "instructions": "Rapportez l'appareil en point de collecte.",
                "collectionPoints": [],
                "takeBackProgram": true,
                "takeBackProgramDetails": "Reprise en magasin"
            }
        }"#;

        let passport: DigitalPassport = serde_json::from_str(json).unwrap();
        assert_eq!(passport.product_id.as_str(), "42");
        assert_eq!(passport.carbon_footprint.score, EcoScore::B);
        assert_eq!(
            passport.traceability.journey[1].kind,
            JourneyStepKind::QualityCheck
        );
        assert_eq!(passport.certifications[0].kind, CertificationKind::Environmental);
        assert!(passport.recycling.take_back_program);
    }
}
