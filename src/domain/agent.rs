use crate::search::{
    collate, Choice, Criteria, Encoder, ParamValue, Params, QueryError, QueryParams, SortKey,
    TextQuery,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const TOP_RATED_MIN: f32 = 4.8;
pub const EXPERIENCED_MIN_LISTINGS: u32 = 20;
pub const COMMERCIAL_SPECIALTY: &str = "Commercial Properties";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub photo: String,
    pub phone: String,
    pub email: String,
    pub rating: f32,
    pub listings_count: u32,
    pub sold_count: u32,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Agent {
    pub fn is_top_rated(&self) -> bool {
        self.rating >= TOP_RATED_MIN
    }
}

/// Canned filters from the agent directory's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentSegment {
    #[default]
    All,
    TopRated,
    Experienced,
    Commercial,
}

impl AgentSegment {
    fn admits(self, agent: &Agent) -> bool {
        match self {
            AgentSegment::All => true,
            AgentSegment::TopRated => agent.is_top_rated(),
            AgentSegment::Experienced => agent.listings_count > EXPERIENCED_MIN_LISTINGS,
            AgentSegment::Commercial => agent
                .specialties
                .iter()
                .any(|s| s == COMMERCIAL_SPECIALTY),
        }
    }
}

impl ParamValue for AgentSegment {
    const VARIANTS: &'static [Self] = &[
        AgentSegment::All,
        AgentSegment::TopRated,
        AgentSegment::Experienced,
        AgentSegment::Commercial,
    ];

    fn token(self) -> &'static str {
        match self {
            AgentSegment::All => "all",
            AgentSegment::TopRated => "top-rated",
            AgentSegment::Experienced => "experienced",
            AgentSegment::Commercial => "commercial",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AgentSegment::All => "All Agents",
            AgentSegment::TopRated => "Top Rated",
            AgentSegment::Experienced => "Most Experienced",
            AgentSegment::Commercial => "Commercial Specialists",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgentCriteria {
    /// Matched against name, title and bio.
    pub search: TextQuery,
    pub segment: AgentSegment,
    pub specialty: Choice<String>,
    pub language: Choice<String>,
}

impl Criteria<Agent> for AgentCriteria {
    fn matches(&self, agent: &Agent) -> bool {
        self.search
            .matches_any([agent.name.as_str(), agent.title.as_str(), agent.bio.as_str()])
            && self.segment.admits(agent)
            && self.specialty.admits_any_of(&agent.specialties)
            && self.language.admits_any_of(&agent.languages)
    }
}

impl QueryParams for AgentCriteria {
    fn from_params(params: &Params) -> Result<Self, QueryError> {
        Ok(Self {
            search: params.text("search"),
            segment: params.preset("filter")?,
            specialty: params.choice("specialty"),
            language: params.choice("language"),
        })
    }

    fn to_params(&self, out: &mut Encoder) {
        out.text("search", &self.search)
            .preset("filter", self.segment)
            .choice("specialty", &self.specialty)
            .choice("language", &self.language);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentSort {
    #[default]
    Rating,
    Listings,
    Sold,
    Name,
}

impl SortKey<Agent> for AgentSort {
    fn compare(&self, a: &Agent, b: &Agent) -> Ordering {
        match self {
            AgentSort::Rating => b.rating.total_cmp(&a.rating),
            AgentSort::Listings => b.listings_count.cmp(&a.listings_count),
            AgentSort::Sold => b.sold_count.cmp(&a.sold_count),
            AgentSort::Name => collate(&a.name, &b.name),
        }
    }
}

impl ParamValue for AgentSort {
    const VARIANTS: &'static [Self] = &[
        AgentSort::Rating,
        AgentSort::Listings,
        AgentSort::Sold,
        AgentSort::Name,
    ];

    fn token(self) -> &'static str {
        match self {
            AgentSort::Rating => "rating",
            AgentSort::Listings => "listings",
            AgentSort::Sold => "sold",
            AgentSort::Name => "name",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AgentSort::Rating => "Highest Rated",
            AgentSort::Listings => "Most Listings",
            AgentSort::Sold => "Most Sold",
            AgentSort::Name => "Name",
        }
    }
}

/// Agents shown on the home page: top rated, catalog order.
pub fn top_agents(agents: &[Agent], limit: usize) -> Vec<&Agent> {
    agents.iter().filter(|a| a.is_top_rated()).take(limit).collect()
}
