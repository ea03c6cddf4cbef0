use crate::domain::property::{ListingType, PropertyCategory};
use crate::domain::{Property, PropertyCriteria, PropertySort};
use crate::search::{Page, ParamValue, QueryState};
use crate::templates::components::{
    choice_select, empty_state, pager, past_last_page, showing, text_select, value_select,
};
use crate::templates::{desktop_layout, property_card};
use maud::{html, Markup};

pub type PropertyQuery = QueryState<PropertyCriteria, PropertySort>;

const BASE: &str = "/properties";

pub struct PropertiesVm<'a> {
    pub state: &'a PropertyQuery,
    pub page: &'a Page<&'a Property>,
    pub neighborhoods: Vec<&'a str>,
}

pub fn properties_page(vm: &PropertiesVm) -> Markup {
    let state = vm.state;
    let page = vm.page;

    desktop_layout(
        "Properties",
        html! {
            main class="container" {
                h1 { "Properties in Tehran" }
                p { "Found " strong { (page.total_items) } " properties matching your criteria" }

                (search_form(state, &vm.neighborhoods))

                (showing(page, "properties"))
                (sort_bar(state))

                @if page.is_past_end() {
                    (past_last_page(state, page, BASE))
                } @else if page.is_empty() {
                    (empty_state("properties", &state.clear_link(BASE)))
                } @else {
                    div class="grid" {
                        @for property in &page.items {
                            (property_card(property))
                        }
                    }
                }

                (pager(state, page, BASE))
            }
        },
    )
}

/// The form never carries a page number, so submitting it always lands on page 1.
fn search_form(state: &PropertyQuery, neighborhoods: &[&str]) -> Markup {
    let c = state.criteria();

    html! {
        form class="card search-form" action="/properties" method="get" {
            label for="type" { "Property Type" }
            (choice_select::<ListingType>("type", "All Types", &c.listing_type))

            label for="category" { "Category" }
            (choice_select::<PropertyCategory>("category", "All Categories", &c.category))

            label for="neighborhood" { "Neighborhood" }
            (text_select("neighborhood", "All Areas", neighborhoods, &c.neighborhood))

            label for="search" { "Search" }
            input type="search" id="search" name="search" value=(c.search.as_str())
                placeholder="Title, description or area";

            fieldset {
                legend { "Price" }
                input type="number" name="minPrice" min="0" placeholder="Min"
                    value=[c.price.min];
                input type="number" name="maxPrice" min="0" placeholder="Max"
                    value=[c.price.max];
            }

            fieldset {
                legend { "Size (m²)" }
                input type="number" name="minSize" min="0" placeholder="Min"
                    value=[c.size.min];
                input type="number" name="maxSize" min="0" placeholder="Max"
                    value=[c.size.max];
            }

            label for="bedrooms" { "Bedrooms" }
            (minimum_select("bedrooms", c.bedrooms.min))

            label for="bathrooms" { "Bathrooms" }
            (minimum_select("bathrooms", c.bathrooms.min))

            label {
                input type="checkbox" name="featured" value="true" checked[c.featured.is_set()];
                " Featured only"
            }

            label for="sort" { "Sort by" }
            (value_select("sort", state.sort()))

            button type="submit" class="primary" { "Search" }
            @if state.is_filtered() {
                a class="btn outline" href=(state.clear_link(BASE)) { "Clear Filters" }
            }
        }
    }
}

/// One-click reordering of the current results.
fn sort_bar(state: &PropertyQuery) -> Markup {
    html! {
        nav class="sort-bar" aria-label="Sort" {
            @for key in PropertySort::VARIANTS {
                @if *key == state.sort() {
                    span class="badge current" { (key.label()) }
                } @else {
                    a class="badge" href=(state.sort_link(BASE, *key)) { (key.label()) }
                }
            }
        }
    }
}

fn minimum_select(name: &str, current: Option<u8>) -> Markup {
    html! {
        select name=(name) id=(name) {
            option value="0" selected[current.is_none()] { "Any" }
            @for n in 1u8..=5 {
                option value=(n) selected[current == Some(n)] { (n) "+" }
            }
        }
    }
}
