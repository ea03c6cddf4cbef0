// templates/pages/home.rs

use crate::domain::property::{ListingType, PropertyCategory};
use crate::domain::{Agent, Post, Property};
use crate::search::Choice;
use crate::templates::components::format::format_date;
use crate::templates::components::{card, choice_select, rating_stars, text_select};
use crate::templates::{desktop_layout, property_card};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub featured: Vec<&'a Property>,
    pub top_agents: Vec<&'a Agent>,
    pub latest_posts: Vec<&'a Post>,
    pub neighborhoods: Vec<&'a str>,
    pub total_properties: usize,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Home",
        html! {
            section class="hero" {
                h1 { "Find your next home in Tehran" }
                p { (vm.total_properties) " properties for sale and rent" }

                form class="quick-search" action="/properties" method="get" {
                    (choice_select::<ListingType>("type", "All Types", &Choice::All))
                    (choice_select::<PropertyCategory>("category", "All Categories", &Choice::All))
                    (text_select("neighborhood", "All Areas", &vm.neighborhoods, &Choice::All))
                    input type="search" name="search" placeholder="Search by title or area";
                    button type="submit" class="primary" { "Search" }
                }
            }

            section {
                h2 { "Featured Properties" }
                div class="grid" {
                    @for property in &vm.featured {
                        (property_card(property))
                    }
                }
                a href="/featured" { "View all featured properties" }
            }

            section {
                h2 { "Top Agents" }
                div class="grid" {
                    @for agent in &vm.top_agents {
                        (card(&agent.name, html! {
                            p { (agent.title) }
                            (rating_stars(agent.rating))
                            p { (agent.sold_count) " properties sold" }
                        }))
                    }
                }
                a href="/agents" { "Meet all agents" }
            }

            section {
                h2 { "From the Blog" }
                ul class="post-list" {
                    @for post in &vm.latest_posts {
                        li {
                            a href=(post.url()) { (post.title) }
                            " · " (format_date(post.date))
                        }
                    }
                }
            }
        },
    )
}
