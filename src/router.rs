use crate::catalog::Catalog;
use crate::domain::agent::top_agents;
use crate::domain::post::{self, categories, tags};
use crate::domain::property::{average_price, similar_to};
use crate::domain::valuation::{estimate, ValuationInput};
use crate::domain::{PostSort, PropertyCriteria, PropertySort};
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::search::{
    self, Flag, PageSize, ParamValue, Params, QueryError, QueryParams, QueryState,
};
use crate::templates::pages::{self, BlogVm, HomeVm, PropertiesVm, PropertyDetailVm};
use crate::templates::html_error_response;
use astra::{Request, Response};
use tracing::{debug, info, warn};

const HOME_FEATURED: usize = 6;
const HOME_AGENTS: usize = 3;
const HOME_POSTS: usize = 3;
const SIMILAR_LIMIT: usize = 3;
const RELATED_LIMIT: usize = 3;

/// Everything a request handler can read. Immutable once the server starts.
pub struct Site {
    pub catalog: Catalog,
    pub page_size: PageSize,
}

/// Handles one request end to end: errors become HTML error pages and every
/// request is logged with its status.
pub fn respond(req: Request, site: &Site) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let resp = match handle(req, site) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    };

    info!(%method, %uri, status = resp.status().as_u16(), "request");
    resp
}

pub fn handle(req: Request, site: &Site) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query().unwrap_or("");

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", [""]) => home(site),
        ("GET", ["properties"]) => properties(site, query),
        ("GET", ["properties", id]) => property_detail(site, id),
        ("GET", ["featured"]) => featured(site, query),
        ("GET", ["agents"]) => agents(site, query),
        ("GET", ["blog"]) => blog(site, query),
        ("GET", ["blog", id]) => post_detail(site, id),
        ("GET", ["neighborhoods"]) => neighborhoods(site, query),
        ("GET", ["valuation"]) => valuation(query),
        _ => Err(ServerError::NotFound),
    }
}

/// Decodes a listing query, logging what was rejected.
fn decode<C, K>(query: &str) -> Result<QueryState<C, K>, ServerError>
where
    C: QueryParams + Default + PartialEq,
    K: ParamValue + Default,
{
    QueryState::decode(query).map_err(|err| rejected(query, err))
}

fn rejected(query: &str, err: QueryError) -> ServerError {
    warn!(%err, query, "Rejected listing query");
    ServerError::from(err)
}

fn parse_id(raw: &str) -> Result<u32, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

fn home(site: &Site) -> ResultResp {
    let catalog = &site.catalog;

    let featured_only = PropertyCriteria {
        featured: Flag(true),
        ..Default::default()
    };
    let featured = search::sort(
        search::filter(&catalog.properties, &featured_only),
        PropertySort::Oldest,
    );
    let latest_posts = search::sort(&catalog.posts, PostSort::Newest);

    let vm = HomeVm {
        featured: featured.into_iter().take(HOME_FEATURED).collect(),
        top_agents: top_agents(&catalog.agents, HOME_AGENTS),
        latest_posts: latest_posts.into_iter().take(HOME_POSTS).collect(),
        neighborhoods: catalog.neighborhood_names(),
        total_properties: catalog.properties.len(),
    };

    html_response(pages::home_page(&vm))
}

fn properties(site: &Site, query: &str) -> ResultResp {
    let state: pages::PropertyQuery = decode(query)?;
    let page = search::run(&site.catalog.properties, &state, site.page_size);
    debug!(
        total = page.total_items,
        page = state.page().get(),
        "Property search"
    );

    let vm = PropertiesVm {
        state: &state,
        page: &page,
        neighborhoods: site.catalog.neighborhood_names(),
    };
    html_response(pages::properties_page(&vm))
}

fn property_detail(site: &Site, raw_id: &str) -> ResultResp {
    let catalog = &site.catalog;
    let property = catalog
        .property(parse_id(raw_id)?)
        .ok_or(ServerError::NotFound)?;

    let vm = PropertyDetailVm {
        property,
        agent: property.agent_id.and_then(|id| catalog.agent(id)),
        similar: similar_to(&catalog.properties, property, SIMILAR_LIMIT),
        neighborhood_average: average_price(&catalog.properties, &property.neighborhood),
    };
    html_response(pages::property_detail_page(&vm))
}

fn featured(site: &Site, query: &str) -> ResultResp {
    let sort: PropertySort = Params::parse(query)
        .sort()
        .map_err(|err| rejected(query, err))?;

    let featured_only = PropertyCriteria {
        featured: Flag(true),
        ..Default::default()
    };
    let matched = search::filter(&site.catalog.properties, &featured_only);
    let ordered = search::sort(matched, sort);

    html_response(pages::featured_page(&ordered, sort))
}

fn agents(site: &Site, query: &str) -> ResultResp {
    let state: pages::AgentQuery = decode(query)?;
    let page = search::run(&site.catalog.agents, &state, site.page_size);
    html_response(pages::agents_page(&state, &page))
}

fn blog(site: &Site, query: &str) -> ResultResp {
    let catalog = &site.catalog;
    let state: pages::PostQuery = decode(query)?;
    let page = search::run(&catalog.posts, &state, site.page_size);

    let vm = BlogVm {
        state: &state,
        page: &page,
        featured: post::featured(&catalog.posts),
        categories: categories(&catalog.posts),
        tags: tags(&catalog.posts),
    };
    html_response(pages::blog_page(&vm))
}

fn post_detail(site: &Site, raw_id: &str) -> ResultResp {
    let posts = &site.catalog.posts;
    let post = site
        .catalog
        .post(parse_id(raw_id)?)
        .ok_or(ServerError::NotFound)?;

    let related: Vec<_> = posts
        .iter()
        .filter(|p| p.id != post.id && p.category == post.category)
        .take(RELATED_LIMIT)
        .collect();

    html_response(pages::post_page(post, &related))
}

fn neighborhoods(site: &Site, query: &str) -> ResultResp {
    let state: pages::NeighborhoodQuery = decode(query)?;
    let page = search::run(&site.catalog.neighborhoods, &state, site.page_size);
    html_response(pages::neighborhoods_page(&state, &page))
}

fn valuation(query: &str) -> ResultResp {
    let params = Params::parse(query);
    let input =
        ValuationInput::from_params(&params).map_err(|err| rejected(query, err))?;

    // an untouched form shows no figure
    let value = (!query.is_empty()).then(|| estimate(&input));
    html_response(pages::valuation_page(&input, value))
}
