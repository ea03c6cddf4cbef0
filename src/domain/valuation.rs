// src/domain/valuation.rs

//! Marketing-page price estimate.
//!
//! This is a fixed formula over hard-coded coefficients, not an appraisal
//! model: base rate per m² for the neighborhood, times size, times condition
//! and category multipliers, times a small bonus per amenity.

use crate::domain::property::PropertyCategory;
use crate::search::{ParamValue, Params, QueryError};

/// Base rate per square meter, by neighborhood name.
pub const BASE_RATES: &[(&str, u64)] = &[
    ("Saadat Abad", 7_500_000),
    ("Niavaran", 12_000_000),
    ("Tehranpars", 4_500_000),
    ("Lavasan", 25_000_000),
    ("Vanak", 6_800_000),
    ("Jordan", 18_000_000),
    ("Zaferanieh", 15_000_000),
    ("Elahieh", 9_500_000),
    ("Shahrak-e Gharb", 6_500_000),
    ("Darrous", 5_500_000),
];

pub const DEFAULT_BASE_RATE: u64 = 5_000_000;
pub const DEFAULT_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub fn multiplier(self) -> f64 {
        match self {
            Condition::Excellent => 1.2,
            Condition::Good => 1.0,
            Condition::Fair => 0.8,
            Condition::Poor => 0.6,
        }
    }
}

impl ParamValue for Condition {
    const VARIANTS: &'static [Self] = &[
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    fn token(self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent - Like New",
            Condition::Good => "Good - Well Maintained",
            Condition::Fair => "Fair - Needs Some Updates",
            Condition::Poor => "Poor - Needs Major Renovation",
        }
    }
}

pub fn category_multiplier(category: PropertyCategory) -> f64 {
    match category {
        PropertyCategory::Apartment => 1.0,
        PropertyCategory::House => 1.2,
        PropertyCategory::Villa => 1.5,
        PropertyCategory::Commercial => 1.3,
        PropertyCategory::Land => 0.8,
        PropertyCategory::Penthouse => 1.8,
        PropertyCategory::Duplex => 1.4,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Parking,
    Elevator,
    Storage,
    Balcony,
    Heating,
    Cooling,
    Security,
}

impl Amenity {
    pub const ALL: &'static [Amenity] = &[
        Amenity::Parking,
        Amenity::Elevator,
        Amenity::Storage,
        Amenity::Balcony,
        Amenity::Heating,
        Amenity::Cooling,
        Amenity::Security,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Amenity::Parking => "parking",
            Amenity::Elevator => "elevator",
            Amenity::Storage => "storage",
            Amenity::Balcony => "balcony",
            Amenity::Heating => "heating",
            Amenity::Cooling => "cooling",
            Amenity::Security => "security",
        }
    }

    pub fn bonus(self) -> f64 {
        match self {
            Amenity::Parking => 1.05,
            Amenity::Elevator => 1.03,
            Amenity::Storage | Amenity::Balcony | Amenity::Security => 1.02,
            Amenity::Heating | Amenity::Cooling => 1.01,
        }
    }
}

/// What the valuation form submits.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValuationInput {
    pub neighborhood: Option<String>,
    pub category: Option<PropertyCategory>,
    pub size: Option<u32>,
    pub condition: Option<Condition>,
    pub amenities: Vec<Amenity>,
}

impl ValuationInput {
    pub fn from_params(params: &Params) -> Result<Self, QueryError> {
        let mut amenities = Vec::new();
        for amenity in Amenity::ALL {
            if params.flag(amenity.key())?.is_set() {
                amenities.push(*amenity);
            }
        }

        Ok(Self {
            neighborhood: params.get("neighborhood").map(str::to_string),
            category: params.choice_of("category")?.selected().copied(),
            size: params.number("size")?,
            condition: params.choice_of("condition")?.selected().copied(),
            amenities,
        })
    }

    pub fn has(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }
}

pub fn base_rate(neighborhood: &str) -> Option<u64> {
    BASE_RATES
        .iter()
        .find(|(name, _)| *name == neighborhood)
        .map(|(_, rate)| *rate)
}

/// Estimated value, rounded to the nearest unit. Unknown or missing inputs
/// fall back to neutral values (default base rate, 100 m², multiplier 1.0).
pub fn estimate(input: &ValuationInput) -> u64 {
    let base = input
        .neighborhood
        .as_deref()
        .and_then(base_rate)
        .unwrap_or(DEFAULT_BASE_RATE) as f64;
    let size = input.size.filter(|s| *s > 0).unwrap_or(DEFAULT_SIZE) as f64;
    let condition = input.condition.map_or(1.0, Condition::multiplier);
    let category = input.category.map_or(1.0, category_multiplier);

    let value = input
        .amenities
        .iter()
        .fold(base * size * condition * category, |acc, a| acc * a.bonus());

    value.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_uses_fallbacks() {
        assert_eq!(estimate(&ValuationInput::default()), 500_000_000);
    }

    #[test]
    fn multipliers_compose() {
        let input = ValuationInput {
            neighborhood: Some("Niavaran".to_string()),
            category: Some(PropertyCategory::Villa),
            size: Some(200),
            condition: Some(Condition::Excellent),
            amenities: vec![Amenity::Parking],
        };
        // 12M * 200 * 1.2 * 1.5 * 1.05
        assert_eq!(estimate(&input), 4_536_000_000);
    }

    #[test]
    fn form_params_decode() {
        let params = Params::parse(
            "neighborhood=Vanak&category=duplex&size=120&condition=fair&elevator=on&security=true",
        );
        let input = ValuationInput::from_params(&params).unwrap();

        assert_eq!(input.neighborhood.as_deref(), Some("Vanak"));
        assert_eq!(input.category, Some(PropertyCategory::Duplex));
        assert_eq!(input.size, Some(120));
        assert_eq!(input.condition, Some(Condition::Fair));
        assert_eq!(input.amenities, vec![Amenity::Elevator, Amenity::Security]);
    }

    #[test]
    fn bad_size_is_rejected() {
        let params = Params::parse("size=big");
        assert!(ValuationInput::from_params(&params).is_err());
    }
}
