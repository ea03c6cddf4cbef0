// src/domain/property.rs

use crate::search::{
    Choice, Criteria, Encoder, Flag, ParamValue, Params, QueryError, QueryParams, Range, SortKey,
    TextQuery,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Upper edge of the price slider; a max at or above it means "no max".
pub const PRICE_CEILING: u64 = 5_000_000_000;
/// Upper edge of the size slider, in square meters.
pub const SIZE_CEILING: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Buy,
    Rent,
}

impl ParamValue for ListingType {
    const VARIANTS: &'static [Self] = &[ListingType::Buy, ListingType::Rent];

    fn token(self) -> &'static str {
        match self {
            ListingType::Buy => "buy",
            ListingType::Rent => "rent",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ListingType::Buy => "For Sale",
            ListingType::Rent => "For Rent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    Apartment,
    House,
    Villa,
    Commercial,
    Land,
    Penthouse,
    Duplex,
}

impl ParamValue for PropertyCategory {
    const VARIANTS: &'static [Self] = &[
        PropertyCategory::Apartment,
        PropertyCategory::House,
        PropertyCategory::Villa,
        PropertyCategory::Commercial,
        PropertyCategory::Land,
        PropertyCategory::Penthouse,
        PropertyCategory::Duplex,
    ];

    fn token(self) -> &'static str {
        match self {
            PropertyCategory::Apartment => "apartment",
            PropertyCategory::House => "house",
            PropertyCategory::Villa => "villa",
            PropertyCategory::Commercial => "commercial",
            PropertyCategory::Land => "land",
            PropertyCategory::Penthouse => "penthouse",
            PropertyCategory::Duplex => "duplex",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PropertyCategory::Apartment => "Apartment",
            PropertyCategory::House => "House",
            PropertyCategory::Villa => "Villa",
            PropertyCategory::Commercial => "Commercial",
            PropertyCategory::Land => "Land",
            PropertyCategory::Penthouse => "Penthouse",
            PropertyCategory::Duplex => "Duplex",
        }
    }
}

/// A property listing as shipped in `properties.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: u64,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub category: PropertyCategory,
    pub neighborhood: String,
    /// Square meters.
    pub size: u32,
    pub rooms: u8,
    pub bedrooms: u8,
    pub bathrooms: u8,
    #[serde(default)]
    pub year_built: Option<u16>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub agent_id: Option<u32>,
}

impl Property {
    pub fn url(&self) -> String {
        format!("/properties/{}", self.id)
    }
}

/// Facets of the property search form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyCriteria {
    pub listing_type: Choice<ListingType>,
    pub category: Choice<PropertyCategory>,
    pub neighborhood: Choice<String>,
    /// Matched against title, description and neighborhood.
    pub search: TextQuery,
    pub price: Range<u64>,
    pub size: Range<u32>,
    pub bedrooms: Range<u8>,
    pub bathrooms: Range<u8>,
    pub amenity: Choice<String>,
    pub featured: Flag,
}

impl Criteria<Property> for PropertyCriteria {
    fn matches(&self, p: &Property) -> bool {
        self.listing_type.admits(&p.listing_type)
            && self.category.admits(&p.category)
            && self.neighborhood.admits(&p.neighborhood)
            && self.search.matches_any([
                p.title.as_str(),
                p.description.as_str(),
                p.neighborhood.as_str(),
            ])
            && self.price.contains(p.price)
            && self.size.contains(p.size)
            && self.bedrooms.contains(p.bedrooms)
            && self.bathrooms.contains(p.bathrooms)
            && self.amenity.admits_any_of(&p.amenities)
            && self.featured.admits(p.featured)
    }
}

impl QueryParams for PropertyCriteria {
    fn from_params(params: &Params) -> Result<Self, QueryError> {
        Ok(Self {
            listing_type: params.choice_of("type")?,
            category: params.choice_of("category")?,
            neighborhood: params.choice("neighborhood"),
            search: params.text("search"),
            price: params
                .range("minPrice", "maxPrice")?
                .within(0, PRICE_CEILING),
            size: params.range("minSize", "maxSize")?.within(0, SIZE_CEILING),
            bedrooms: minimum(params.number("bedrooms")?),
            bathrooms: minimum(params.number("bathrooms")?),
            amenity: params.choice("amenity"),
            featured: params.flag("featured")?,
        })
    }

    fn to_params(&self, out: &mut Encoder) {
        out.choice_of("type", &self.listing_type)
            .choice_of("category", &self.category)
            .choice("neighborhood", &self.neighborhood)
            .text("search", &self.search)
            .range("minPrice", "maxPrice", &self.price)
            .range("minSize", "maxSize", &self.size)
            .number("bedrooms", self.bedrooms.min)
            .number("bathrooms", self.bathrooms.min)
            .choice("amenity", &self.amenity)
            .flag("featured", self.featured);
    }
}

/// "At least n"; zero means no constraint.
fn minimum(n: Option<u8>) -> Range<u8> {
    n.filter(|n| *n > 0).map(Range::at_least).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertySort {
    /// Highest id first.
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    SizeLarge,
    SizeSmall,
}

impl SortKey<Property> for PropertySort {
    fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self {
            PropertySort::Newest => b.id.cmp(&a.id),
            PropertySort::Oldest => a.id.cmp(&b.id),
            PropertySort::PriceLow => a.price.cmp(&b.price),
            PropertySort::PriceHigh => b.price.cmp(&a.price),
            PropertySort::SizeLarge => b.size.cmp(&a.size),
            PropertySort::SizeSmall => a.size.cmp(&b.size),
        }
    }
}

impl ParamValue for PropertySort {
    const VARIANTS: &'static [Self] = &[
        PropertySort::Newest,
        PropertySort::Oldest,
        PropertySort::PriceLow,
        PropertySort::PriceHigh,
        PropertySort::SizeLarge,
        PropertySort::SizeSmall,
    ];

    fn token(self) -> &'static str {
        match self {
            PropertySort::Newest => "newest",
            PropertySort::Oldest => "oldest",
            PropertySort::PriceLow => "price-low",
            PropertySort::PriceHigh => "price-high",
            PropertySort::SizeLarge => "size-large",
            PropertySort::SizeSmall => "size-small",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PropertySort::Newest => "Newest First",
            PropertySort::Oldest => "Oldest First",
            PropertySort::PriceLow => "Price: Low to High",
            PropertySort::PriceHigh => "Price: High to Low",
            PropertySort::SizeLarge => "Size: Large to Small",
            PropertySort::SizeSmall => "Size: Small to Large",
        }
    }
}

/// Other listings in the same neighborhood, in catalog order.
pub fn similar_to<'a>(properties: &'a [Property], property: &Property, limit: usize) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| p.id != property.id && p.neighborhood == property.neighborhood)
        .take(limit)
        .collect()
}

/// Rounded mean price of the listings in `neighborhood`, or 0 if it has none.
pub fn average_price(properties: &[Property], neighborhood: &str) -> u64 {
    let (count, total) = properties
        .iter()
        .filter(|p| p.neighborhood == neighborhood)
        .fold((0u64, 0u128), |(count, total), p| (count + 1, total + p.price as u128));

    if count == 0 {
        return 0;
    }
    ((total + count as u128 / 2) / count as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::QueryState;
    use crate::tests::utils::sample_properties;

    #[test]
    fn default_criteria_match_everything() {
        let criteria = PropertyCriteria::default();
        assert!(sample_properties().iter().all(|p| criteria.matches(p)));
    }

    #[test]
    fn search_covers_neighborhood_name() {
        let criteria = PropertyCriteria {
            search: TextQuery::new("niavaran"),
            ..Default::default()
        };
        let properties = sample_properties();
        let hits: Vec<_> = properties.iter().filter(|p| criteria.matches(p)).collect();

        assert!(!hits.is_empty());
        assert!(hits.iter().all(|p| p.neighborhood == "Niavaran"));
    }

    #[test]
    fn full_price_range_decodes_to_unbounded() {
        let state: QueryState<PropertyCriteria, PropertySort> =
            QueryState::decode("minPrice=0&maxPrice=5000000000&minSize=0&maxSize=500").unwrap();
        assert_eq!(state.criteria(), &PropertyCriteria::default());
        assert!(!state.is_filtered());
    }

    #[test]
    fn zero_bedrooms_is_no_constraint() {
        let state: QueryState<PropertyCriteria, PropertySort> =
            QueryState::decode("bedrooms=0&bathrooms=2").unwrap();
        assert!(state.criteria().bedrooms.is_unbounded());
        assert_eq!(state.criteria().bathrooms, Range::at_least(2));
    }

    #[test]
    fn average_price_rounds_and_handles_missing_neighborhood() {
        let properties = sample_properties();
        assert_eq!(average_price(&properties, "Nowhere"), 0);

        let vanak: Vec<u64> = properties
            .iter()
            .filter(|p| p.neighborhood == "Vanak")
            .map(|p| p.price)
            .collect();
        let expected = (vanak.iter().sum::<u64>() as f64 / vanak.len() as f64).round() as u64;
        assert_eq!(average_price(&properties, "Vanak"), expected);
    }

    #[test]
    fn similar_excludes_the_property_itself() {
        let properties = sample_properties();
        let subject = &properties[0];
        let similar = similar_to(&properties, subject, 3);

        assert!(similar.len() <= 3);
        assert!(similar.iter().all(|p| p.id != subject.id));
        assert!(similar.iter().all(|p| p.neighborhood == subject.neighborhood));
    }
}
