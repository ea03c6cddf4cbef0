use crate::domain::property::PropertyCategory;
use crate::domain::valuation::{Amenity, Condition, ValuationInput, BASE_RATES};
use crate::search::ParamValue;
use crate::templates::components::format::format_amount;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn valuation_page(input: &ValuationInput, estimate: Option<u64>) -> Markup {
    desktop_layout(
        "Free Property Valuation",
        html! {
            main class="container narrow" {
                h1 { "What is your property worth?" }
                p class="lead" { "Get an instant estimate based on recent prices in your area." }

                @if let Some(value) = estimate {
                    section class="card valuation-result" {
                        h2 { "Estimated value" }
                        p class="price" { (format_amount(value)) }
                        p class="muted" {
                            "This is an indicative figure from area averages, not a formal appraisal. "
                            "One of our agents can give you a detailed valuation."
                        }
                        a class="btn" href="/agents" { "Talk to an agent" }
                    }
                }

                form class="card" action="/valuation" method="get" {
                    label for="neighborhood" { "Neighborhood" }
                    select name="neighborhood" id="neighborhood" required {
                        option value="" disabled selected[input.neighborhood.is_none()] { "Select a neighborhood..." }
                        @for (name, _) in BASE_RATES {
                            option value=(name) selected[input.neighborhood.as_deref() == Some(*name)] { (name) }
                        }
                    }

                    label for="category" { "Property type" }
                    select name="category" id="category" required {
                        option value="" disabled selected[input.category.is_none()] { "Select a type..." }
                        @for category in PropertyCategory::VARIANTS {
                            option value=(category.token()) selected[input.category == Some(*category)] {
                                (category.label())
                            }
                        }
                    }

                    label for="size" { "Size (m²)" }
                    input type="number" id="size" name="size" min="1" required value=[input.size];

                    label for="condition" { "Condition" }
                    select name="condition" id="condition" {
                        option value="" selected[input.condition.is_none()] { "Select condition..." }
                        @for condition in Condition::VARIANTS {
                            option value=(condition.token()) selected[input.condition == Some(*condition)] {
                                (condition.label())
                            }
                        }
                    }

                    fieldset {
                        legend { "Features" }
                        @for amenity in Amenity::ALL {
                            label {
                                input type="checkbox" name=(amenity.key()) value="true" checked[input.has(*amenity)];
                                " " (amenity.key())
                            }
                        }
                    }

                    button type="submit" class="primary" { "Get Estimate" }
                }
            }
        },
    )
}
