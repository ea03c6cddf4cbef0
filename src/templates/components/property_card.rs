use crate::domain::Property;
use crate::search::ParamValue;
use crate::templates::components::format::{format_price, format_size};
use maud::{html, Markup};

pub fn property_card(property: &Property) -> Markup {
    html! {
        article class="card property-card" {
            a href=(property.url()) {
                @if let Some(image) = property.images.first() {
                    img src=(image) alt=(property.title) loading="lazy";
                }
                @if property.featured {
                    span class="badge featured" { "Featured" }
                }
                span class="badge" { (property.listing_type.label()) }
            }
            div class="card-body" {
                h3 { a href=(property.url()) { (property.title) } }
                p class="location" { (property.neighborhood) }
                p class="price" { (format_price(property.price, property.listing_type)) }
                ul class="facts" {
                    li { (property.bedrooms) " bed" }
                    li { (property.bathrooms) " bath" }
                    li { (format_size(property.size)) }
                    li { (property.category.label()) }
                }
            }
        }
    }
}
