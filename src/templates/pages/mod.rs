pub mod agents;
pub mod blog;
pub mod featured;
pub mod home;
pub mod neighborhoods;
pub mod properties;
pub mod property_detail;
pub mod valuation;

pub use agents::{agents_page, AgentQuery};
pub use blog::{blog_page, post_page, BlogVm, PostQuery};
pub use featured::featured_page;
pub use home::{home_page, HomeVm};
pub use neighborhoods::{neighborhoods_page, NeighborhoodQuery};
pub use properties::{properties_page, PropertiesVm, PropertyQuery};
pub use property_detail::{property_detail_page, PropertyDetailVm};
pub use valuation::valuation_page;
