use crate::domain::{Property, PropertySort};
use crate::templates::components::value_select;
use crate::templates::{desktop_layout, property_card};
use maud::{html, Markup};

pub fn featured_page(properties: &[&Property], sort: PropertySort) -> Markup {
    desktop_layout(
        "Featured Properties",
        html! {
            main class="container" {
                h1 { "Featured Properties" }
                p { "Hand-picked listings from our agents." }

                form class="inline" action="/featured" method="get" {
                    label for="sort" { "Sort by" }
                    (value_select("sort", sort))
                    button type="submit" { "Apply" }
                }

                p class="showing" { "Showing " (properties.len()) " featured properties" }

                @if properties.is_empty() {
                    div class="card empty-state" {
                        h3 { "No featured properties right now" }
                        a class="btn" href="/properties" { "Browse all properties" }
                    }
                } @else {
                    div class="grid" {
                        @for property in properties {
                            (property_card(property))
                        }
                    }
                }
            }
        },
    )
}
