use crate::domain::neighborhood::NeighborhoodTier;
use crate::domain::{Neighborhood, NeighborhoodCriteria, NeighborhoodSort};
use crate::search::{Page, QueryState};
use crate::templates::components::format::format_amount;
use crate::templates::components::{empty_state, pager, past_last_page, showing, value_select};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub type NeighborhoodQuery = QueryState<NeighborhoodCriteria, NeighborhoodSort>;

pub fn neighborhoods_page(state: &NeighborhoodQuery, page: &Page<&Neighborhood>) -> Markup {
    let c = state.criteria();

    desktop_layout(
        "Neighborhoods",
        html! {
            main class="container" {
                h1 { "Explore Tehran's Neighborhoods" }

                form class="card search-form" action="/neighborhoods" method="get" {
                    input type="search" name="search" value=(c.search.as_str())
                        placeholder="Search neighborhoods";
                    label for="filter" { "Show" }
                    (value_select::<NeighborhoodTier>("filter", c.tier))
                    label for="sort" { "Sort by" }
                    (value_select("sort", state.sort()))
                    button type="submit" class="primary" { "Search" }
                }

                (showing(page, "neighborhoods"))

                @if page.is_past_end() {
                    (past_last_page(state, page, "/neighborhoods"))
                } @else if page.is_empty() {
                    (empty_state("neighborhoods", &state.clear_link("/neighborhoods")))
                } @else {
                    div class="grid" {
                        @for n in &page.items {
                            article class="card neighborhood-card" id=(n.id) {
                                @if !n.image.is_empty() {
                                    img src=(n.image) alt=(n.name) loading="lazy";
                                }
                                h3 { (n.name) }
                                p class="muted" { (n.properties_count) " properties" }
                                p { (n.description) }
                                ul class="facts" {
                                    li { "Avg. price: " strong { (format_amount(n.average_price)) } }
                                    li { "Avg. rent: " strong { (format_amount(n.average_rent)) } }
                                }
                                p class="tags" {
                                    @for feature in n.features.iter().take(3) {
                                        span class="badge" { (feature) }
                                    }
                                }
                                a class="btn" href=(n.listings_url()) { "View Properties" }
                            }
                        }
                    }
                }

                (pager(state, page, "/neighborhoods"))
            }
        },
    )
}
