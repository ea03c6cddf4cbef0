use crate::search::{
    collate, Choice, Criteria, Encoder, ParamValue, Params, QueryError, QueryParams, SortKey,
    TextQuery,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const LUXURY_MIN_PRICE: u64 = 1_000_000_000;
pub const AFFORDABLE_MAX_PRICE: u64 = 800_000_000;
pub const POPULAR_MIN_PROPERTIES: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    /// URL slug, e.g. "saadat-abad".
    pub id: String,
    pub name: String,
    pub description: String,
    pub average_price: u64,
    pub average_rent: u64,
    pub properties_count: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub image: String,
}

impl Neighborhood {
    /// Property search pre-filtered to this neighborhood.
    pub fn listings_url(&self) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("neighborhood", &self.name)
            .finish();
        format!("/properties?{query}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborhoodTier {
    #[default]
    All,
    Luxury,
    Affordable,
    Popular,
}

impl NeighborhoodTier {
    fn admits(self, n: &Neighborhood) -> bool {
        match self {
            NeighborhoodTier::All => true,
            NeighborhoodTier::Luxury => n.average_price > LUXURY_MIN_PRICE,
            NeighborhoodTier::Affordable => n.average_price < AFFORDABLE_MAX_PRICE,
            NeighborhoodTier::Popular => n.properties_count > POPULAR_MIN_PROPERTIES,
        }
    }
}

impl ParamValue for NeighborhoodTier {
    const VARIANTS: &'static [Self] = &[
        NeighborhoodTier::All,
        NeighborhoodTier::Luxury,
        NeighborhoodTier::Affordable,
        NeighborhoodTier::Popular,
    ];

    fn token(self) -> &'static str {
        match self {
            NeighborhoodTier::All => "all",
            NeighborhoodTier::Luxury => "luxury",
            NeighborhoodTier::Affordable => "affordable",
            NeighborhoodTier::Popular => "popular",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NeighborhoodTier::All => "All Areas",
            NeighborhoodTier::Luxury => "Luxury Areas",
            NeighborhoodTier::Affordable => "Affordable Areas",
            NeighborhoodTier::Popular => "Most Popular",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NeighborhoodCriteria {
    pub search: TextQuery,
    pub tier: NeighborhoodTier,
    pub feature: Choice<String>,
}

impl Criteria<Neighborhood> for NeighborhoodCriteria {
    fn matches(&self, n: &Neighborhood) -> bool {
        self.search
            .matches_any([n.name.as_str(), n.description.as_str()])
            && self.tier.admits(n)
            && self.feature.admits_any_of(&n.features)
    }
}

impl QueryParams for NeighborhoodCriteria {
    fn from_params(params: &Params) -> Result<Self, QueryError> {
        Ok(Self {
            search: params.text("search"),
            tier: params.preset("filter")?,
            feature: params.choice("feature"),
        })
    }

    fn to_params(&self, out: &mut Encoder) {
        out.text("search", &self.search)
            .preset("filter", self.tier)
            .choice("feature", &self.feature);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborhoodSort {
    #[default]
    Name,
    PriceHigh,
    PriceLow,
    Properties,
}

impl SortKey<Neighborhood> for NeighborhoodSort {
    fn compare(&self, a: &Neighborhood, b: &Neighborhood) -> Ordering {
        match self {
            NeighborhoodSort::Name => collate(&a.name, &b.name),
            NeighborhoodSort::PriceHigh => b.average_price.cmp(&a.average_price),
            NeighborhoodSort::PriceLow => a.average_price.cmp(&b.average_price),
            NeighborhoodSort::Properties => b.properties_count.cmp(&a.properties_count),
        }
    }
}

impl ParamValue for NeighborhoodSort {
    const VARIANTS: &'static [Self] = &[
        NeighborhoodSort::Name,
        NeighborhoodSort::PriceHigh,
        NeighborhoodSort::PriceLow,
        NeighborhoodSort::Properties,
    ];

    fn token(self) -> &'static str {
        match self {
            NeighborhoodSort::Name => "name",
            NeighborhoodSort::PriceHigh => "price-high",
            NeighborhoodSort::PriceLow => "price-low",
            NeighborhoodSort::Properties => "properties",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NeighborhoodSort::Name => "Name",
            NeighborhoodSort::PriceHigh => "Price: High to Low",
            NeighborhoodSort::PriceLow => "Price: Low to High",
            NeighborhoodSort::Properties => "Most Properties",
        }
    }
}
