pub mod agent;
pub mod neighborhood;
pub mod post;
pub mod property;
pub mod valuation;

pub use agent::{Agent, AgentCriteria, AgentSort};
pub use neighborhood::{Neighborhood, NeighborhoodCriteria, NeighborhoodSort};
pub use post::{Post, PostCriteria, PostSort};
pub use property::{Property, PropertyCriteria, PropertySort};
