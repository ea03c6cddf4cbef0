use crate::domain::{Agent, Property};
use crate::search::ParamValue;
use crate::templates::components::format::{format_amount, format_price, format_size};
use crate::templates::components::rating_stars;
use crate::templates::{desktop_layout, property_card};
use maud::{html, Markup};

pub struct PropertyDetailVm<'a> {
    pub property: &'a Property,
    pub agent: Option<&'a Agent>,
    pub similar: Vec<&'a Property>,
    pub neighborhood_average: u64,
}

pub fn property_detail_page(vm: &PropertyDetailVm) -> Markup {
    let p = vm.property;

    desktop_layout(
        &p.title,
        html! {
            main class="container" {
                p { a href="/properties" { "← Back to Properties" } }

                div class="gallery" {
                    @for image in &p.images {
                        img src=(image) alt=(p.title);
                    }
                }

                h1 { (p.title) }
                p class="location" { (p.neighborhood) }
                p class="price" { (format_price(p.price, p.listing_type)) }

                ul class="facts" {
                    li { strong { "Type: " } (p.listing_type.label()) }
                    li { strong { "Category: " } (p.category.label()) }
                    li { strong { "Size: " } (format_size(p.size)) }
                    li { strong { "Rooms: " } (p.rooms) }
                    li { strong { "Bedrooms: " } (p.bedrooms) }
                    li { strong { "Bathrooms: " } (p.bathrooms) }
                    @if let Some(year) = p.year_built {
                        li { strong { "Year built: " } (year) }
                    }
                }

                section {
                    h2 { "Description" }
                    p { (p.description) }
                }

                @if !p.amenities.is_empty() {
                    section {
                        h2 { "Amenities" }
                        ul class="amenities" {
                            @for amenity in &p.amenities {
                                li { (amenity) }
                            }
                        }
                    }
                }

                @if vm.neighborhood_average > 0 {
                    p class="muted" {
                        "Average asking price in " (p.neighborhood) ": "
                        (format_amount(vm.neighborhood_average))
                    }
                }

                @if let Some(agent) = vm.agent {
                    section class="card agent" {
                        h3 { "Listed by " (agent.name) }
                        p { (agent.title) }
                        (rating_stars(agent.rating))
                        p { a href=(format!("tel:{}", agent.phone)) { (agent.phone) } }
                        p { a href=(format!("mailto:{}", agent.email)) { (agent.email) } }
                    }
                }

                @if !vm.similar.is_empty() {
                    section {
                        h2 { "Similar Properties" }
                        div class="grid" {
                            @for similar in &vm.similar {
                                (property_card(similar))
                            }
                        }
                    }
                }
            }
        },
    )
}
